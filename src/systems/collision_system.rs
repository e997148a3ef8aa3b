// src/systems/collision_system.rs

use crate::components::{Enemy, GameEvent, GameStatus, Player, Position};
use crate::config::layout;
use crate::ecs::{System, World};
use crate::logic::collision;
use crate::systems::{find_player_entity, push_event, set_status};

/// 敵の虫とプレイヤーの当たり判定をするシステムだよ！💥
///
/// ヒットしたら:
/// 1. ライフを1つ失う 💔
/// 2. プレイヤーはスタート地点に戻される
/// 3. `PlayerHit` イベントが積まれる（GameApp が失敗音を鳴らす）
///
/// 最後のライフを失ったら GameOver 状態に切り替えて、
/// その時点の wins / score を載せた `GameOver` イベントを積むよ。
/// ダイアログ表示やスコアの転記はぜんぶ GameApp 側の仕事！
pub struct CollisionSystem;

impl CollisionSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CollisionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for CollisionSystem {
    fn run(&mut self, world: &mut World, _dt: f64) {
        let player_entity = match find_player_entity(world) {
            Some(entity) => entity,
            None => return, // キャラ選択中はプレイヤーがいない
        };

        let enemies = world.get_all_entities_with_component::<Enemy>();
        for enemy in enemies {
            // 1体目のヒットでプレイヤーが戻されるから、毎回座標を読み直す！
            let player_pos = match world.get_component::<Position>(player_entity) {
                Some(pos) => *pos,
                None => return,
            };
            let enemy_pos = match world.get_component::<Position>(enemy) {
                Some(pos) => *pos,
                None => continue,
            };

            if !collision::enemy_hits_player(enemy_pos.x, enemy_pos.y, player_pos.x, player_pos.y)
            {
                continue;
            }

            // ライフ減算＋お祝い状態の解除
            let (lives_left, wins, score) = match world.get_component_mut::<Player>(player_entity)
            {
                Some(player) => {
                    player.lives = player.lives.saturating_sub(1);
                    player.goal_timer = None;
                    (player.lives, player.wins, player.score)
                }
                None => return,
            };

            // スタート地点に戻す
            if let Some(pos) = world.get_component_mut::<Position>(player_entity) {
                pos.x = layout::PLAYER_START_X;
                pos.y = layout::PLAYER_START_Y;
            }

            push_event(world, GameEvent::PlayerHit);

            if lives_left == 0 {
                set_status(world, GameStatus::GameOver);
                push_event(world, GameEvent::GameOver { wins, score });
                return; // ゲームオーバーなら残りの判定は不要！
            }
        }
    }
}
