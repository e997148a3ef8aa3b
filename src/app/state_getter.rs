// src/app/state_getter.rs
//! Gets the current game state from the World and converts it to JSON.
//! ブラウザのコンソールからゲームの中身を覗くためのデバッグ用機能だよ。🔍

use std::sync::{Arc, Mutex};

use itertools::Itertools;
use log::{error, info};
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::components::{Collectible, GameStatus, Player, Position, Sprite, Velocity};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::systems::{current_status, find_player_entity};

/// 1エンティティぶんのスナップショット。
#[derive(Debug, Serialize)]
struct EntityStateData {
    entity: Entity,
    sprite: Option<String>,
    x: f64,
    y: f64,
    speed: Option<f64>,
    points: Option<u32>,
}

/// World 全体のスナップショット。JSON にしてJS側へ渡すよ。
#[derive(Debug, Serialize)]
struct WorldStateData {
    status: Option<GameStatus>,
    player: Option<Player>,
    entities: Vec<EntityStateData>,
}

/// ワールドの状態を取得し、JSON 文字列として返します。
pub fn get_world_state_json(world_arc: &Arc<Mutex<World>>) -> Result<JsValue, JsValue> {
    let world = match world_arc.try_lock() {
        Ok(w) => w,
        Err(e) => {
            let error_msg = format!("Failed to lock world for getting state: {}", e);
            error!("{}", error_msg);
            return Err(JsValue::from_str(&error_msg));
        }
    };

    info!("Getting world state...");

    // Position を持つ全エンティティを ID 順に集める
    let entities: Vec<EntityStateData> = world
        .get_all_entities_with_component::<Position>()
        .into_iter()
        .sorted()
        .filter_map(|entity| {
            let pos = world.get_component::<Position>(entity)?;
            Some(EntityStateData {
                entity,
                sprite: world
                    .get_component::<Sprite>(entity)
                    .map(|sprite| sprite.path.clone()),
                x: pos.x,
                y: pos.y,
                speed: world
                    .get_component::<Velocity>(entity)
                    .map(|vel| vel.speed),
                points: world
                    .get_component::<Collectible>(entity)
                    .map(|gem| gem.points),
            })
        })
        .collect();

    let state = WorldStateData {
        status: current_status(&world),
        player: find_player_entity(&world)
            .and_then(|entity| world.get_component::<Player>(entity).cloned()),
        entities,
    };

    info!("Collected state for {} entities.", state.entities.len());

    match serde_json::to_string(&state) {
        Ok(json) => Ok(JsValue::from_str(&json)),
        Err(e) => {
            let error_msg = format!("Failed to serialize world state: {}", e);
            error!("{}", error_msg);
            Err(JsValue::from_str(&error_msg))
        }
    }
}
