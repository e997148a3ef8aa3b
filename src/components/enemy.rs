// src/components/enemy.rs

use serde::{Deserialize, Serialize};
use crate::ecs::component::Component;

/// 敵の虫であることを示すマーカーコンポーネントだよ！🐞
///
/// データは持たない。「このエンティティは避けるべき敵だ」という事実そのものが情報！
/// 位置は Position、速さは Velocity が別々に持ってるから、
/// このマーカーは当たり判定システムと移動システムがクエリのキーとして使うんだ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy;

// Enemy 構造体が Component であることを示すマーカー！✅
impl Component for Enemy {}
