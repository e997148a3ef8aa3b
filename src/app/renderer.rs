// src/app/renderer.rs
//! GameApp の描画関連ロジック。
//! World から「何をどこに描くか」を集めて、Canvas 2D コンテキストに
//! `draw_image` していくよ。画像はパスをキーにしたキャッシュで持つ！🖼️

use std::collections::HashMap;

use itertools::Itertools;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::components::{
    Collectible, Enemy, GameStatus, Player, Position, Selector, Sprite,
};
use crate::config::{assets, layout};
use crate::ecs::{Entity, World};
use crate::systems::current_status;

/// パス → HtmlImageElement のキャッシュ。
/// 初回に要素を作って src を設定したら、あとは使い回すよ。
/// （未ロードの画像の draw_image は no-op だから、読み込みが済んだ
/// 次のフレームから自然に表示される！）
pub type SpriteCache = HashMap<String, HtmlImageElement>;

/// Rust側で Canvas にゲーム画面を描画する関数。毎フレーム呼ばれるよ！
pub fn render_game(
    world: &World,
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    cache: &mut SpriteCache,
) -> Result<(), JsValue> {
    // --- ステップ1: Canvas をクリア ---
    let canvas_width = canvas.width() as f64;
    let canvas_height = canvas.height() as f64;
    context.clear_rect(0.0, 0.0, canvas_width, canvas_height);

    // --- ステップ2: 状態に応じた画面を描く ---
    match current_status(world) {
        Some(GameStatus::Selecting) => render_select_screen(world, context, cache),
        Some(GameStatus::Playing) | Some(GameStatus::GameOver) => {
            render_playfield(world, context, cache)
        }
        None => Ok(()), // World が初期化されてなければ何も描かない
    }
}

/// キャラクター選択画面。カーソルを描いてから5人のキャラを並べるよ。
fn render_select_screen(
    world: &World,
    context: &CanvasRenderingContext2d,
    cache: &mut SpriteCache,
) -> Result<(), JsValue> {
    // カーソル（選択中のマスの背景になる）
    if let Some(selector_entity) = world
        .get_all_entities_with_component::<Selector>()
        .into_iter()
        .next()
    {
        if let (Some(pos), Some(sprite)) = (
            world.get_component::<Position>(selector_entity),
            world.get_component::<Sprite>(selector_entity),
        ) {
            draw_sprite(context, cache, &sprite.path, pos.x, pos.y)?;
        }
    }

    // 5人のキャラを1列に並べる
    for (column, path) in assets::CHARACTER_SPRITES.iter().enumerate() {
        draw_sprite(
            context,
            cache,
            path,
            column as f64 * layout::COLUMN_WIDTH,
            layout::SELECT_ROW_Y,
        )?;
    }

    Ok(())
}

/// プレイ中の画面。宝石 → プレイヤー → 敵 → ハートの順で重ねるよ。
fn render_playfield(
    world: &World,
    context: &CanvasRenderingContext2d,
    cache: &mut SpriteCache,
) -> Result<(), JsValue> {
    // 宝石（いちばん下のレイヤー）
    for gem in sorted_entities_with::<Collectible>(world) {
        draw_entity(world, context, cache, gem)?;
    }

    // プレイヤー
    if let Some(hero) = world
        .get_all_entities_with_component::<Player>()
        .into_iter()
        .next()
    {
        draw_entity(world, context, cache, hero)?;
    }

    // 敵の虫たち（プレイヤーの上を走り抜ける！）
    for bug in sorted_entities_with::<Enemy>(world) {
        draw_entity(world, context, cache, bug)?;
    }

    // 残りライフのハートを下段に並べる ❤️
    if let Some(hero) = world
        .get_all_entities_with_component::<Player>()
        .into_iter()
        .next()
    {
        if let Some(player) = world.get_component::<Player>(hero) {
            for heart in 0..player.lives {
                draw_sprite(
                    context,
                    cache,
                    assets::HEART_SPRITE,
                    heart as f64 * layout::COLUMN_WIDTH,
                    layout::HEART_ROW_Y,
                )?;
            }
        }
    }

    Ok(())
}

/// 指定の型のコンポーネントを持つエンティティを ID 順で返すよ。
/// クエリ結果の順序は不定だから、描画順がフレームごとにチラつかないように！
fn sorted_entities_with<T: crate::ecs::Component + 'static>(world: &World) -> Vec<Entity> {
    world
        .get_all_entities_with_component::<T>()
        .into_iter()
        .sorted()
        .collect()
}

/// Sprite + Position を持つエンティティを1体描くよ。
fn draw_entity(
    world: &World,
    context: &CanvasRenderingContext2d,
    cache: &mut SpriteCache,
    entity: Entity,
) -> Result<(), JsValue> {
    if let (Some(pos), Some(sprite)) = (
        world.get_component::<Position>(entity),
        world.get_component::<Sprite>(entity),
    ) {
        draw_sprite(context, cache, &sprite.path, pos.x, pos.y)?;
    }
    Ok(())
}

/// パスで指定したスプライトを (x, y) に描くよ。画像はキャッシュから！
fn draw_sprite(
    context: &CanvasRenderingContext2d,
    cache: &mut SpriteCache,
    path: &str,
    x: f64,
    y: f64,
) -> Result<(), JsValue> {
    if !cache.contains_key(path) {
        let image = HtmlImageElement::new()?;
        image.set_src(path);
        cache.insert(path.to_string(), image);
    }
    let image = cache
        .get(path)
        .expect("sprite was just inserted into the cache");
    context.draw_image_with_html_image_element(image, x, y)
}
