// src/components/collectible.rs

use serde::{Deserialize, Serialize};
use crate::ecs::component::Component;

/// 拾えるアイテム（宝石）を表すコンポーネントだよ！💎
///
/// - `points`: 拾った時にスコアに加算されるポイント。
///   緑の宝石は10点、青は30点、オレンジは60点！
///
/// 宝石は敵のレーン上のマス目にぴったり置かれて、プレイヤーが
/// 同じマスに乗った瞬間に回収される。回収されたらエンティティごと破棄されて、
/// しばらくしてから GemSpawnSystem が新しい宝石を出現させるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collectible {
    pub points: u32,
}

// Collectible 構造体が Component であることを示すマーカー！✅
impl Component for Collectible {}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_collectible_component() {
        let green = Collectible { points: 10 };
        let blue = Collectible { points: 30 };
        let orange = Collectible { points: 60 };

        assert_eq!(green.points, 10);
        assert_eq!(blue.points, 30);
        assert_eq!(orange.points, 60);
        assert_ne!(green, blue);

        println!("Collectible コンポーネント作成テスト、成功！🎉");
    }
}
