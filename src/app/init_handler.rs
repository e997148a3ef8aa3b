// src/app/init_handler.rs
//! GameApp の初期化に関するロジック。
//! World の組み立てと Canvas の取得をここに分離しておくよ。

use std::sync::{Arc, Mutex};

use rand::thread_rng;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::{
    Collectible, Enemy, EventQueue, GameState, GameStatus, Player, Position, Selector, Sprite,
    Velocity,
};
use crate::config::{assets, layout};
use crate::ecs::world::World;
use crate::logic::spawn;

/// World を組み立てるよ！
///
/// - 全コンポーネント型の登録
/// - ゲーム状態シングルトン（最初はキャラ選択画面 + 空のイベントキュー）
/// - キャラ選択カーソル
/// - 敵の虫3体（ランダムなレーンとスピードで左端からスタート）
///
/// プレイヤーはまだ作らない！エンターでキャラが決まった時に
/// event_handler が作るからね。👤
pub fn initialize_world() -> Arc<Mutex<World>> {
    let mut world = World::new();

    // --- コンポーネント型の登録（ここで一度だけ！） ---
    world.register_component::<Position>();
    world.register_component::<Sprite>();
    world.register_component::<Velocity>();
    world.register_component::<Enemy>();
    world.register_component::<Player>();
    world.register_component::<Collectible>();
    world.register_component::<Selector>();
    world.register_component::<GameState>();
    world.register_component::<EventQueue>();

    // --- ゲーム状態シングルトン ---
    let state = world.create_entity();
    world.add_component(
        state,
        GameState {
            status: GameStatus::Selecting,
        },
    );
    world.add_component(state, EventQueue::default());

    // --- キャラ選択カーソル ---
    let selector = world.create_entity();
    world.add_component(selector, Selector { index: 0 });
    world.add_component(
        selector,
        Position {
            x: 0.0,
            y: layout::SELECT_ROW_Y,
        },
    );
    world.add_component(selector, Sprite::new(assets::SELECTOR_SPRITE));

    // --- 敵の虫たち 🐞🐞🐞 ---
    let mut rng = thread_rng();
    for _ in 0..layout::ENEMY_COUNT {
        let bug = world.create_entity();
        world.add_component(bug, Enemy);
        world.add_component(
            bug,
            Position {
                x: layout::ENEMY_RESET_X,
                y: spawn::random_lane(&mut rng),
            },
        );
        world.add_component(
            bug,
            Velocity {
                speed: spawn::random_speed(&mut rng),
            },
        );
        world.add_component(bug, Sprite::new(assets::ENEMY_SPRITE));
    }

    Arc::new(Mutex::new(world))
}

/// ページから Canvas と 2D コンテキストを取得するよ。
pub fn initialize_canvas() -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let window = window().ok_or("Failed to get window")?;
    let document = window.document().ok_or("Failed to get document")?;

    let canvas = document
        .query_selector("canvas")?
        .ok_or("Canvas element not found")?
        .dyn_into::<HtmlCanvasElement>()?;

    let context = canvas
        .get_context("2d")?
        .ok_or("Failed to get 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()?;

    Ok((canvas, context))
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Enemy, GameState, Selector};

    #[test]
    fn initialized_world_has_state_selector_and_enemies() {
        let world_arc = initialize_world();
        let world = world_arc.lock().unwrap();

        // シングルトンは1つだけ！
        assert_eq!(
            world.get_all_entities_with_component::<GameState>().len(),
            1
        );
        assert_eq!(world.get_all_entities_with_component::<Selector>().len(), 1);

        // 虫は3体、みんな石畳のレーンでスピード持ち！
        let bugs = world.get_all_entities_with_component::<Enemy>();
        assert_eq!(bugs.len(), layout::ENEMY_COUNT);
        for bug in bugs {
            let pos = world.get_component::<Position>(bug).unwrap();
            assert_eq!(pos.x, layout::ENEMY_RESET_X);
            assert!(layout::ENEMY_LANES.contains(&pos.y));
            let vel = world.get_component::<Velocity>(bug).unwrap();
            assert!(vel.speed >= layout::ENEMY_SPEED_MIN);
            assert!(vel.speed < layout::ENEMY_SPEED_MAX);
        }

        // プレイヤーはまだいない！
        assert!(world.get_all_entities_with_component::<Player>().is_empty());

        println!("World 初期化テスト、成功！🎉");
    }
}
