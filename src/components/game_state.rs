// src/components/game_state.rs

// serde を使う宣言！ゲーム状態もデバッグダンプに含めるよ。
use serde::{Deserialize, Serialize};
// Component トレイトを使うからインポートするよ
use crate::ecs::component::Component;

/// ゲーム全体の現在の状態を表す列挙型だよ！
///
/// キャラクターを選んでいる最中なのか、道路を渡っている最中なのか、
/// それともライフが尽きてリザルト画面が出ているのか、を示すのに使うよ！🏁
///
/// このコンポーネントは、ゲーム全体で一つだけ存在する特別なエンティティ
/// （シングルトン）にアタッチされるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// キャラクター選択画面。矢印キーでカーソル移動、エンターで開始！
    Selecting,
    /// ゲームプレイ中。敵が動いて、当たり判定が生きてる状態。
    Playing,
    /// ライフが尽きた。リザルトダイアログが出ていて、閉じると Selecting に戻る。
    GameOver,
}

/// ゲーム状態を保持するコンポーネント。
///
/// 中身はシンプルに GameStatus enum を持つだけ！
/// これを World の中のシングルトンエンティティに持たせることで、
/// どこからでも現在のゲーム状態を参照・更新できるようにするんだ。便利！💡
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
}

// GameState 構造体が Component であることを示すマーカー！✅
impl Component for GameState {}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_game_state_component() {
        // 最初はキャラ選択画面から！
        let initial = GameState {
            status: GameStatus::Selecting,
        };
        assert_eq!(initial.status, GameStatus::Selecting);

        // プレイ中とゲームオーバーも作って比較してみる
        let playing = GameState {
            status: GameStatus::Playing,
        };
        let over = GameState {
            status: GameStatus::GameOver,
        };
        assert_ne!(initial, playing);
        assert_ne!(playing, over);

        println!("GameState コンポーネント作成テスト、成功！🎉");
    }
}
