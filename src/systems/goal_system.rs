// src/systems/goal_system.rs

use crate::components::{GameEvent, Player, Position};
use crate::config::layout;
use crate::ecs::{System, World};
use crate::logic::grid;
use crate::systems::{find_player_entity, push_event};

/// ゴール（水際）到達を処理するシステムだよ！🏁
///
/// プレイヤーがゴール行 (y = -20) に立っていたら:
/// 1. wins を1増やす 🏆
/// 2. `GoalReached` イベントを積む（GameApp が勝利音を鳴らす）
/// 3. 1秒のお祝いタイマーを開始する
///
/// タイマーが動いている間はキー入力が無視されて（event_handler 側のガード）、
/// タイマーが切れた瞬間にスタート地点へ戻されるよ。
/// 元のゲームの「1秒後に setInterval で reset」を dt の積算で再現してるんだ。⏱️
pub struct GoalSystem;

impl GoalSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoalSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for GoalSystem {
    fn run(&mut self, world: &mut World, dt: f64) {
        let player_entity = match find_player_entity(world) {
            Some(entity) => entity,
            None => return,
        };

        let player_y = match world.get_component::<Position>(player_entity) {
            Some(pos) => pos.y,
            None => return,
        };

        // タイマー進行中？それとも新規到達？を先に読み取っておく
        let timer = world
            .get_component::<Player>(player_entity)
            .and_then(|player| player.goal_timer);

        match timer {
            Some(remaining) => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    // お祝い終了！スタート地点へ戻る
                    if let Some(player) = world.get_component_mut::<Player>(player_entity) {
                        player.goal_timer = None;
                    }
                    if let Some(pos) = world.get_component_mut::<Position>(player_entity) {
                        pos.x = layout::PLAYER_START_X;
                        pos.y = layout::PLAYER_START_Y;
                    }
                } else {
                    if let Some(player) = world.get_component_mut::<Player>(player_entity) {
                        player.goal_timer = Some(remaining);
                    }
                }
            }
            None => {
                if grid::is_goal_row(player_y) {
                    // 水際に到達！🎊
                    if let Some(player) = world.get_component_mut::<Player>(player_entity) {
                        player.wins += 1;
                        player.goal_timer = Some(layout::GOAL_RESET_DELAY);
                    }
                    push_event(world, GameEvent::GoalReached);
                }
            }
        }
    }
}
