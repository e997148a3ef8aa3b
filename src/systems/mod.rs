// src/systems/mod.rs
//! 毎フレーム実行されるゲームロジック（System）たち！
//! それぞれが一つの関心事だけを担当するよ。

pub mod collision_system;
pub mod enemy_system;
pub mod gem_system;
pub mod goal_system;

pub use collision_system::CollisionSystem;
pub use enemy_system::EnemyMovementSystem;
pub use gem_system::GemSpawnSystem;
pub use goal_system::GoalSystem;

use crate::components::{EventQueue, GameEvent, GameState, GameStatus, Player};
use crate::ecs::{Entity, World};

// --- System と event_handler が共有する小さなヘルパーたち ---

/// ゲーム状態シングルトンのエンティティを探すよ。
/// init_handler が最初に1つだけ作っている前提！
pub(crate) fn find_state_entity(world: &World) -> Option<Entity> {
    world
        .get_all_entities_with_component::<GameState>()
        .into_iter()
        .next()
}

/// プレイヤーのエンティティを探すよ。キャラ選択中は存在しないから Option！
pub(crate) fn find_player_entity(world: &World) -> Option<Entity> {
    world
        .get_all_entities_with_component::<Player>()
        .into_iter()
        .next()
}

/// 現在のゲーム状態を読むよ。
pub(crate) fn current_status(world: &World) -> Option<GameStatus> {
    let entity = find_state_entity(world)?;
    world
        .get_component::<GameState>(entity)
        .map(|state| state.status)
}

/// ゲーム状態を切り替えるよ。
pub(crate) fn set_status(world: &mut World, status: GameStatus) {
    if let Some(entity) = find_state_entity(world) {
        if let Some(state) = world.get_component_mut::<GameState>(entity) {
            state.status = status;
        }
    }
}

/// イベントをシングルトンのキューに積むよ。📮
pub(crate) fn push_event(world: &mut World, event: GameEvent) {
    if let Some(entity) = find_state_entity(world) {
        if let Some(queue) = world.get_component_mut::<EventQueue>(entity) {
            queue.push(event);
        }
    }
}
