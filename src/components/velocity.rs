// src/components/velocity.rs

use serde::{Deserialize, Serialize};
use crate::ecs::component::Component;

/// 水平方向の移動スピードを表すコンポーネントだよ！💨
///
/// 敵の虫が持つ。単位は「ピクセル／秒」で、毎フレーム `speed * dt` ぶん右に進む。
/// 値は画面端でリセットされるたびに [150, 404) の範囲でランダムに引き直されるよ。
/// y 方向の速度は持たない！虫は自分のレーンをまっすぐ走るだけだからね。🐞
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub speed: f64,
}

// Velocity 構造体が Component であることを示すマーカー！✅
impl Component for Velocity {}
