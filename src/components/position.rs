// src/components/position.rs

// serde を使う宣言！位置情報をデバッグ用の状態ダンプ (JSON) に含めるために使うよ。
use serde::{Deserialize, Serialize};
// Component トレイトを使う宣言！Position がコンポーネントであることを示す！
use crate::ecs::component::Component;

/// 2D空間での位置を表すコンポーネントだよ！ (x, y) キャンバス座標を持つよ。📍
///
/// プレイヤーだったり、敵の虫だったり、宝石だったり、キャラ選択カーソルだったり、
/// いろんなエンティティがこのコンポーネントを持つことになるよ。汎用性高い！✨
///
/// 座標の型は `f64`！ Canvas API (`draw_image` とか) が f64 を受け取るのと、
/// 敵の虫は speed * dt でなめらかに（ただし1フレームごとに丸めて）進むからね。
/// プレイヤーと宝石はマス目にきっちり揃った値しか取らないよ（101刻み / 80刻み）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

// Position 構造体が Component であることを示すマーカー！ これ大事！✅
impl Component for Position {}
