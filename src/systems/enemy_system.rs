// src/systems/enemy_system.rs

use rand::thread_rng;

use crate::components::{Enemy, Position, Velocity};
use crate::config::layout;
use crate::ecs::{System, World};
use crate::logic::spawn;

/// 敵の虫を走らせるシステムだよ！🐞💨
///
/// 毎フレーム、Velocity を持つ虫たちを `round(speed * dt)` ピクセルずつ
/// 右に進める。画面の右端 (x > 505) を越えていた虫は、左端 (x = 0) に
/// 戻して、レーンとスピードをランダムに引き直すよ。
/// だから同じ虫でも毎周違うコースを違う速さで走ってくる！油断禁物！⚠️
pub struct EnemyMovementSystem;

impl EnemyMovementSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnemyMovementSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for EnemyMovementSystem {
    fn run(&mut self, world: &mut World, dt: f64) {
        let mut rng = thread_rng();
        let enemies = world.get_all_entities_with_component::<Enemy>();

        for enemy in enemies {
            // 画面外に出ていたらリセット、そうでなければ前進。
            // 「先に判定、それから移動」の順番は元の挙動と同じ！
            let offscreen = world
                .get_component::<Position>(enemy)
                .map(|pos| pos.x > layout::ENEMY_OFFSCREEN_X)
                .unwrap_or(false);

            if offscreen {
                let new_lane = spawn::random_lane(&mut rng);
                let new_speed = spawn::random_speed(&mut rng);
                if let Some(pos) = world.get_component_mut::<Position>(enemy) {
                    pos.x = layout::ENEMY_RESET_X;
                    pos.y = new_lane;
                }
                if let Some(vel) = world.get_component_mut::<Velocity>(enemy) {
                    vel.speed = new_speed;
                }
            } else {
                let speed = world
                    .get_component::<Velocity>(enemy)
                    .map(|vel| vel.speed)
                    .unwrap_or(0.0);
                if let Some(pos) = world.get_component_mut::<Position>(enemy) {
                    // 1フレームぶんの移動量をピクセル単位に丸めてから足す。
                    pos.x += (speed * dt).round();
                }
            }
        }
    }
}
