// src/app/event_handler.rs
//! ユーザー入力（キーボード）に関連する GameApp のロジック。
//! `apply_key` と `dismiss_results` は World だけを触る純粋なロジックだから、
//! ブラウザなしの `cargo test` で丸ごとテストできるよ！🧪

use std::sync::{Arc, Mutex};

use log::error;

use crate::components::{GameEvent, GameStatus, Player, Position, Selector, Sprite};
use crate::config::layout;
use crate::ecs::world::World;
use crate::ecs::Entity;
use crate::logic::grid::{self, Move};
use crate::systems::{current_status, find_player_entity, push_event, set_status};

/// ゲームが反応するキーだよ。元のゲームの allowedKeys と同じ顔ぶれ！
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Left,
    Right,
    Up,
    Down,
    Enter,
}

impl InputKey {
    /// 移動キーなら対応する Move に変換するよ。エンターは移動じゃない！
    fn as_move(self) -> Option<Move> {
        match self {
            InputKey::Left => Some(Move::Left),
            InputKey::Right => Some(Move::Right),
            InputKey::Up => Some(Move::Up),
            InputKey::Down => Some(Move::Down),
            InputKey::Enter => None,
        }
    }
}

/// keyCode をゲームのキーに変換するよ。
/// 13 = Enter, 37-40 = 矢印キー。それ以外は None（無視）！
pub fn key_from_code(code: u32) -> Option<InputKey> {
    match code {
        13 => Some(InputKey::Enter),
        37 => Some(InputKey::Left),
        38 => Some(InputKey::Up),
        39 => Some(InputKey::Right),
        40 => Some(InputKey::Down),
        _ => None,
    }
}

/// keyup リスナーから呼ばれる入り口。World をロックして純粋ロジックに渡すよ。
pub fn handle_key_up(world_arc: &Arc<Mutex<World>>, key_code: u32) {
    let key = match key_from_code(key_code) {
        Some(key) => key,
        None => return, // 関係ないキーは無視！
    };
    match world_arc.lock() {
        Ok(mut world) => apply_key(&mut world, key),
        Err(e) => error!("event_handler: failed to lock world for key input: {}", e),
    }
}

/// キー入力1回ぶんを World に適用する本体だよ。
pub fn apply_key(world: &mut World, key: InputKey) {
    match current_status(world) {
        Some(GameStatus::Selecting) => apply_selecting_key(world, key),
        Some(GameStatus::Playing) => apply_playing_key(world, key),
        // ゲームオーバー中はダイアログの閉じるボタン (dismiss_results) 待ち。
        Some(GameStatus::GameOver) | None => {}
    }
}

/// キャラ選択画面でのキー処理。カーソル移動とエンター決定！🎯
fn apply_selecting_key(world: &mut World, key: InputKey) {
    let selector_entity = match find_selector_entity(world) {
        Some(entity) => entity,
        None => return,
    };

    match key {
        InputKey::Left | InputKey::Right => {
            let mv = key.as_move().expect("left/right are moves");
            let new_index = match world.get_component::<Selector>(selector_entity) {
                Some(selector) => grid::selector_step(selector.index, mv),
                None => return,
            };
            // 不変条件: カーソルの x は常に index * 101！
            if let Some(selector) = world.get_component_mut::<Selector>(selector_entity) {
                selector.index = new_index;
            }
            if let Some(pos) = world.get_component_mut::<Position>(selector_entity) {
                pos.x = grid::selector_x(new_index);
            }
        }
        InputKey::Enter => {
            // キャラ決定！選ばれたスプライトでプレイヤー誕生！👤✨
            let sprite_path = match world.get_component::<Selector>(selector_entity) {
                Some(selector) => selector.selected_sprite(),
                None => return,
            };

            let hero = world.create_entity();
            world.add_component(hero, Player::new());
            world.add_component(
                hero,
                Position {
                    x: layout::PLAYER_START_X,
                    y: layout::PLAYER_START_Y,
                },
            );
            world.add_component(hero, Sprite::new(sprite_path));

            set_status(world, GameStatus::Playing);
            push_event(world, GameEvent::GameStarted);
        }
        InputKey::Up | InputKey::Down => {} // 選択画面では上下は無視
    }
}

/// プレイ中のキー処理。1マスぶんの移動！🚶
fn apply_playing_key(world: &mut World, key: InputKey) {
    let mv = match key.as_move() {
        Some(mv) => mv,
        None => return, // プレイ中のエンターは何もしない
    };
    let player_entity = match find_player_entity(world) {
        Some(entity) => entity,
        None => return,
    };

    // ゴール到達のお祝い中は入力を受け付けない！🎊
    let celebrating = world
        .get_component::<Player>(player_entity)
        .map(|player| player.goal_timer.is_some())
        .unwrap_or(false);
    if celebrating {
        return;
    }

    if let Some(pos) = world.get_component_mut::<Position>(player_entity) {
        let (nx, ny) = grid::apply_move(pos.x, pos.y, mv);
        pos.x = nx;
        pos.y = ny;
    }
}

/// リザルトダイアログが閉じられた時の後片付け。
/// プレイヤーと宝石を片付けて、キャラ選択画面からやり直し！🔄
pub fn dismiss_results(world: &mut World) {
    if let Some(player) = find_player_entity(world) {
        world.destroy_entity(player);
    }
    for gem in world.get_all_entities_with_component::<crate::components::Collectible>() {
        world.destroy_entity(gem);
    }
    set_status(world, GameStatus::Selecting);
    push_event(world, GameEvent::ResultsDismissed);
}

/// キャラ選択カーソルのエンティティを探すよ。
fn find_selector_entity(world: &World) -> Option<Entity> {
    world
        .get_all_entities_with_component::<Selector>()
        .into_iter()
        .next()
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Collectible, EventQueue, GameState};

    /// キャラ選択画面の状態の World を組み立てるよ。
    fn select_screen_world() -> (World, Entity, Entity) {
        let mut world = World::new();
        world.register_component::<GameState>();
        world.register_component::<EventQueue>();
        world.register_component::<Player>();
        world.register_component::<Position>();
        world.register_component::<Selector>();
        world.register_component::<Sprite>();
        world.register_component::<Collectible>();

        let state = world.create_entity();
        world.add_component(
            state,
            GameState {
                status: GameStatus::Selecting,
            },
        );
        world.add_component(state, EventQueue::default());

        let selector = world.create_entity();
        world.add_component(selector, Selector { index: 0 });
        world.add_component(
            selector,
            Position {
                x: 0.0,
                y: layout::SELECT_ROW_Y,
            },
        );
        world.add_component(selector, Sprite::new("images/Selector.png"));

        (world, state, selector)
    }

    fn drain_events(world: &mut World, state: Entity) -> Vec<GameEvent> {
        world
            .get_component_mut::<EventQueue>(state)
            .unwrap()
            .drain()
    }

    #[test]
    fn keycodes_map_like_the_arrow_keys() {
        assert_eq!(key_from_code(13), Some(InputKey::Enter));
        assert_eq!(key_from_code(37), Some(InputKey::Left));
        assert_eq!(key_from_code(38), Some(InputKey::Up));
        assert_eq!(key_from_code(39), Some(InputKey::Right));
        assert_eq!(key_from_code(40), Some(InputKey::Down));
        // 関係ないキーは None！
        assert_eq!(key_from_code(65), None);

        println!("keyCode 変換テスト、成功！🎉");
    }

    #[test]
    fn selector_moves_and_keeps_x_in_lockstep() {
        let (mut world, _state, selector) = select_screen_world();

        apply_key(&mut world, InputKey::Right);
        apply_key(&mut world, InputKey::Right);
        assert_eq!(world.get_component::<Selector>(selector).unwrap().index, 2);
        assert_eq!(world.get_component::<Position>(selector).unwrap().x, 202.0);

        // 左端より左へは行けない！
        apply_key(&mut world, InputKey::Left);
        apply_key(&mut world, InputKey::Left);
        apply_key(&mut world, InputKey::Left);
        assert_eq!(world.get_component::<Selector>(selector).unwrap().index, 0);
        assert_eq!(world.get_component::<Position>(selector).unwrap().x, 0.0);

        println!("カーソル移動テスト、成功！🎉");
    }

    #[test]
    fn enter_spawns_player_with_selected_character() {
        let (mut world, state, _selector) = select_screen_world();

        // 2番目のキャラを選んでからエンター！
        apply_key(&mut world, InputKey::Right);
        apply_key(&mut world, InputKey::Enter);

        // プレイヤー誕生！スタート地点で、選んだキャラのスプライト！
        let hero = find_player_entity(&world).expect("player should exist");
        let pos = world.get_component::<Position>(hero).unwrap();
        assert_eq!(pos.x, layout::PLAYER_START_X);
        assert_eq!(pos.y, layout::PLAYER_START_Y);
        let sprite = world.get_component::<Sprite>(hero).unwrap();
        assert_eq!(sprite.path, "images/char-cat-girl.png");

        // 状態は Playing になって、GameStarted イベントが積まれる！
        assert_eq!(current_status(&world), Some(GameStatus::Playing));
        assert_eq!(drain_events(&mut world, state), vec![GameEvent::GameStarted]);

        println!("キャラ決定テスト、成功！🎉");
    }

    #[test]
    fn player_movement_respects_grid_and_celebration() {
        let (mut world, _state, _selector) = select_screen_world();
        apply_key(&mut world, InputKey::Enter); // char-boy でスタート
        let hero = find_player_entity(&world).unwrap();

        // 上に1歩！
        apply_key(&mut world, InputKey::Up);
        assert_eq!(world.get_component::<Position>(hero).unwrap().y, 300.0);

        // 下端からさらに下には行けない
        apply_key(&mut world, InputKey::Down);
        apply_key(&mut world, InputKey::Down);
        assert_eq!(world.get_component::<Position>(hero).unwrap().y, 380.0);

        // お祝いタイマー中は入力無視！
        world
            .get_component_mut::<Player>(hero)
            .unwrap()
            .goal_timer = Some(0.5);
        apply_key(&mut world, InputKey::Up);
        assert_eq!(world.get_component::<Position>(hero).unwrap().y, 380.0);

        println!("プレイヤー移動テスト、成功！🎉");
    }

    #[test]
    fn dismissing_results_returns_to_character_select() {
        let (mut world, state, _selector) = select_screen_world();
        apply_key(&mut world, InputKey::Enter);
        let hero = find_player_entity(&world).unwrap();

        // 宝石も置いておく（一緒に片付くはず）
        let gem = world.create_entity();
        world.add_component(gem, Collectible { points: 10 });

        // ゲームオーバーになったことにして、ダイアログを閉じる！
        set_status(&mut world, GameStatus::GameOver);
        drain_events(&mut world, state);
        dismiss_results(&mut world);

        assert!(!world.is_entity_alive(hero), "プレイヤーは片付いたはず！");
        assert!(!world.is_entity_alive(gem), "宝石も片付いたはず！");
        assert_eq!(current_status(&world), Some(GameStatus::Selecting));
        assert_eq!(
            drain_events(&mut world, state),
            vec![GameEvent::ResultsDismissed]
        );

        // ゲームオーバー中の矢印キーは何も起こさない（パニックもしない）
        set_status(&mut world, GameStatus::GameOver);
        apply_key(&mut world, InputKey::Left);

        println!("リザルト閉じテスト、成功！🎉");
    }
}
