// src/systems/gem_system.rs

use rand::thread_rng;

use crate::components::{Collectible, GameEvent, Player, Position, Sprite};
use crate::config::layout;
use crate::ecs::{System, World};
use crate::logic::{collision, spawn};
use crate::systems::{find_player_entity, push_event};

/// 宝石の出現と回収を担当するシステムだよ！💎
///
/// ルールはこう！
/// - フィールド上の宝石は常に最大1個。
/// - 宝石がない間はカウントダウンして、0になったら敵レーンの
///   ランダムなマスにランダムな種類の宝石を出現させる。
/// - プレイヤーが宝石と同じマスに乗ったら回収！スコアにポイントを足して、
///   宝石のエンティティを破棄し、`GemCollected` イベントを積む。
///   次の宝石はまたカウントダウン後に出てくるよ。⏳
pub struct GemSpawnSystem {
    /// 次の宝石が出現するまでの残り秒数。宝石がフィールドにある間は使わない。
    respawn_timer: f64,
}

impl GemSpawnSystem {
    pub fn new() -> Self {
        Self {
            respawn_timer: layout::GEM_RESPAWN_DELAY,
        }
    }
}

impl Default for GemSpawnSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for GemSpawnSystem {
    fn run(&mut self, world: &mut World, dt: f64) {
        let gem = world
            .get_all_entities_with_component::<Collectible>()
            .into_iter()
            .next();

        match gem {
            None => {
                // 宝石待ち。カウントダウンが切れたら出現！✨
                self.respawn_timer -= dt;
                if self.respawn_timer <= 0.0 {
                    let mut rng = thread_rng();
                    let (sprite_path, points) = spawn::random_gem_kind(&mut rng);
                    let x = spawn::random_column(&mut rng);
                    let y = spawn::random_lane(&mut rng);

                    let gem_entity = world.create_entity();
                    world.add_component(gem_entity, Collectible { points });
                    world.add_component(gem_entity, Position { x, y });
                    world.add_component(gem_entity, Sprite::new(sprite_path));

                    self.respawn_timer = layout::GEM_RESPAWN_DELAY;
                }
            }
            Some(gem_entity) => {
                // 宝石がある。プレイヤーが同じマスに乗ってたら回収！
                let player_entity = match find_player_entity(world) {
                    Some(entity) => entity,
                    None => return,
                };
                let (player_pos, gem_pos) = match (
                    world.get_component::<Position>(player_entity),
                    world.get_component::<Position>(gem_entity),
                ) {
                    (Some(p), Some(g)) => (*p, *g),
                    _ => return,
                };

                if collision::gem_on_player(gem_pos.x, gem_pos.y, player_pos.x, player_pos.y) {
                    let points = world
                        .get_component::<Collectible>(gem_entity)
                        .map(|gem| gem.points)
                        .unwrap_or(0);

                    if let Some(player) = world.get_component_mut::<Player>(player_entity) {
                        player.score += points;
                    }
                    world.destroy_entity(gem_entity);
                    push_event(world, GameEvent::GemCollected { points });
                    self.respawn_timer = layout::GEM_RESPAWN_DELAY;
                }
            }
        }
    }
}
