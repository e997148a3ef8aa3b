// src/components/player.rs

// serde を使う宣言！スコアとかをデバッグダンプに含めるよ。
use serde::{Deserialize, Serialize};
// Component トレイトを使う宣言！Player がコンポーネントであることを示す！
use crate::ecs::component::Component;

/// プレイヤーを表すコンポーネントだよ！👤
///
/// - `lives`: 残りライフ（ハート）の数。3からスタートして、虫にぶつかるたびに1減る。💔
///            0になったらゲームオーバー！
/// - `wins`: 水際（ゴール）にたどり着いた回数。🏆
/// - `score`: 宝石を拾って貯めたポイント。💎
/// - `goal_timer`: ゴール到達後の「お祝い待ち」残り秒数。
///                 `Some(t)` の間はキー入力が無視されて、t が 0 になった瞬間に
///                 スタート地点へ戻される（元のゲームの1秒タイマーと同じ挙動！）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub lives: u32,
    pub wins: u32,
    pub score: u32,
    pub goal_timer: Option<f64>,
}

impl Player {
    /// ライフ3・スコア0の初期状態のプレイヤーを作るよ。
    pub fn new() -> Self {
        Self {
            lives: 3,
            wins: 0,
            score: 0,
            goal_timer: None,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

// Player 構造体が Component であることを示すマーカー！✅
impl Component for Player {}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_player_component() {
        let player = Player::new();

        // 初期状態の確認！
        assert_eq!(player.lives, 3);
        assert_eq!(player.wins, 0);
        assert_eq!(player.score, 0);
        assert_eq!(player.goal_timer, None);

        println!("Player コンポーネント作成テスト、成功！🎉");
    }

    #[test]
    fn player_stats_can_change() {
        let mut player = Player::new();

        // 虫にぶつかった！💥
        player.lives -= 1;
        assert_eq!(player.lives, 2);

        // ゴール到達！🏁
        player.wins += 1;
        player.goal_timer = Some(1.0);
        assert_eq!(player.wins, 1);
        assert!(player.goal_timer.is_some());

        // 宝石ゲット！💎
        player.score += 30;
        assert_eq!(player.score, 30);

        println!("Player 状態変化テスト、成功！🎉");
    }
}
