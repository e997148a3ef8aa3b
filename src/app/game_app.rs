// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::sync::{Arc, Mutex};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement};

use crate::app::browser_event_manager;
use crate::app::event_handler;
use crate::app::init_handler;
use crate::app::renderer::{self, SpriteCache};
use crate::app::state_getter;
use crate::app::{audio, dom};
use crate::components::{GameEvent, GameStatus, Player};
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::systems::{
    self, CollisionSystem, EnemyMovementSystem, GemSpawnSystem, GoalSystem,
};
use crate::{error, log};

/// ゲーム全体のアプリケーション状態を管理する構造体だよ！
///
/// JS 側はこの GameApp を new して、requestAnimationFrame のループから
/// `update(dt)` と `render()` を毎フレーム呼ぶだけ。
/// キー入力は `attach_input_listeners()` で Rust 側からドキュメントに
/// リスナーを付けるから、JS 側の配線はほぼ不要！✨
#[wasm_bindgen]
pub struct GameApp {
    world: Arc<Mutex<World>>,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    // 毎フレーム走る System たち。状態を持つのは GemSpawnSystem だけ！
    enemy_system: EnemyMovementSystem,
    goal_system: GoalSystem,
    gem_system: GemSpawnSystem,
    collision_system: CollisionSystem,
    // スプライト画像のキャッシュ（パス → HtmlImageElement）
    sprite_cache: SpriteCache,
    // keyup リスナーのクロージャ。drop するとリスナーが死ぬので保持！
    keyup_closure: Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<GameApp, JsValue> {
        log("GameApp: Initializing...");

        // --- World と Canvas の初期化は init_handler に委譲 ---
        let world_arc = init_handler::initialize_world();
        let (canvas, context) = init_handler::initialize_canvas()?;

        log("GameApp: Initialization complete.");
        Ok(Self {
            world: world_arc,
            canvas,
            context,
            enemy_system: EnemyMovementSystem::new(),
            goal_system: GoalSystem::new(),
            gem_system: GemSpawnSystem::new(),
            collision_system: CollisionSystem::new(),
            sprite_cache: SpriteCache::new(),
            keyup_closure: Arc::new(Mutex::new(None)),
        })
    }

    /// 1フレームぶんゲームを進めるよ。`dt` は前フレームからの経過秒数！
    pub fn update(&mut self, dt: f64) {
        // --- ステップ1: World をロックして System を回す ---
        let (events, stats) = {
            let mut world = match self.world.lock() {
                Ok(guard) => guard,
                Err(poisoned) => {
                    error(&format!(
                        "GameApp: World mutex was poisoned! Attempting recovery. Error: {:?}",
                        poisoned
                    ));
                    poisoned.into_inner()
                }
            };

            if systems::current_status(&world) == Some(GameStatus::Playing) {
                // 順番が大事！移動 → ゴール判定 → 宝石 → 当たり判定。
                self.enemy_system.run(&mut world, dt);
                self.goal_system.run(&mut world, dt);
                self.gem_system.run(&mut world, dt);
                self.collision_system.run(&mut world, dt);
            }

            // 溜まったイベントと、スコアボード用のプレイヤー情報を持ち出す
            let events = Self::drain_events(&mut world);
            let stats = systems::find_player_entity(&world)
                .and_then(|entity| world.get_component::<Player>(entity).cloned());
            (events, stats)
        }; // <-- ここで World のロック解放！

        // --- ステップ2: ロックの外でブラウザ仕事（効果音・DOM） ---
        let mut scoreboard_dirty = false;
        for event in events {
            match event {
                GameEvent::GameStarted => {
                    dom::show_scoreboard();
                    dom::hide_results();
                    scoreboard_dirty = true;
                }
                GameEvent::GoalReached => {
                    audio::play_win_sound();
                    scoreboard_dirty = true;
                }
                GameEvent::PlayerHit => {
                    audio::play_lose_sound();
                }
                GameEvent::GemCollected { .. } => {
                    audio::play_gem_sound();
                    scoreboard_dirty = true;
                }
                GameEvent::GameOver { wins, score } => {
                    dom::show_results(wins, score);
                }
                GameEvent::ResultsDismissed => {
                    dom::hide_results();
                    dom::show_instructions();
                }
            }
        }

        if scoreboard_dirty {
            if let Some(player) = stats {
                dom::update_scoreboard(player.wins, player.score);
            }
        }
    }

    /// 現在の画面を Canvas に描くよ。🖼️
    pub fn render(&mut self) {
        let world = match self.world.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = renderer::render_game(
            &world,
            &self.canvas,
            &self.context,
            &mut self.sprite_cache,
        ) {
            error(&format!("GameApp: render failed: {:?}", e));
        }
    }

    /// ドキュメントに keyup リスナーを付けるよ。起動時に1回呼んでね！⌨️
    pub fn attach_input_listeners(&self) -> Result<(), JsValue> {
        browser_event_manager::attach_keyup_listener(
            Arc::clone(&self.world),
            Arc::clone(&self.keyup_closure),
        )
    }

    /// keyup リスナーを外すよ（ページ遷移時とか用）。
    pub fn detach_input_listeners(&self) -> Result<(), JsValue> {
        browser_event_manager::detach_keyup_listener(&self.keyup_closure)
    }

    /// JS から直接キー入力を流し込む入り口。リスナー経由と同じ処理をするよ。
    /// （テストページやオンスクリーンボタンから使える！）
    pub fn handle_key_up(&self, key_code: u32) {
        event_handler::handle_key_up(&self.world, key_code);
    }

    /// リザルトダイアログの「閉じる」から呼ばれるよ。
    /// キャラ選択画面に戻って、次のゲームの準備をする！🔄
    pub fn dismiss_results(&self) {
        match self.world.lock() {
            Ok(mut world) => event_handler::dismiss_results(&mut world),
            Err(e) => error(&format!(
                "GameApp: Failed to lock world for dismiss_results: {:?}",
                e
            )),
        }
    }

    /// デバッグ用: World の中身を JSON で返すよ。🔍
    pub fn get_world_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_world_state_json(&self.world)
    }
}

impl GameApp {
    /// シングルトンのイベントキューを空にして中身を返す内部ヘルパー。
    fn drain_events(world: &mut World) -> Vec<GameEvent> {
        use crate::components::EventQueue;
        match systems::find_state_entity(world) {
            Some(entity) => world
                .get_component_mut::<EventQueue>(entity)
                .map(|queue| queue.drain())
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }
}
