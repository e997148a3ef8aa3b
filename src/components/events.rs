// src/components/events.rs

use serde::{Deserialize, Serialize};
use crate::ecs::component::Component;

/// 1フレームの間に起きた「出来事」を表す列挙型だよ！📣
///
/// System はゲームロジックだけに集中して、効果音を鳴らしたり DOM を
/// 書き換えたりといったブラウザ仕事は GameApp 側に任せたい。
/// そこで、System は出来事をこのイベントとしてキューに積むだけにして、
/// GameApp が毎フレームキューを空にしながらブラウザ側の処理をやるんだ。
/// おかげで System は wasm なしの `cargo test` で丸ごとテストできる！🧪✨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// キャラが決定されてゲームが始まった（スコアボード表示へ切り替え）。
    GameStarted,
    /// プレイヤーが水際にたどり着いた（勝利音＋wins表示の更新）。
    GoalReached,
    /// 敵の虫にぶつかった（失敗音。ライフ減算は済んでいる）。
    PlayerHit,
    /// 宝石を拾った（宝石音＋score表示の更新）。
    GemCollected { points: u32 },
    /// 最後のライフを失った（リザルトダイアログ表示）。
    GameOver { wins: u32, score: u32 },
    /// リザルトダイアログが閉じられた（キャラ選択画面へ戻す）。
    ResultsDismissed,
}

/// GameEvent を溜めておくキューのコンポーネント。
///
/// GameState と同じシングルトンエンティティにアタッチされるよ。
/// System が push して、GameApp::update が drain する、一方通行の箱！📮
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventQueue {
    pub events: Vec<GameEvent>,
}

impl EventQueue {
    /// イベントを積むよ。
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// 溜まっていたイベントを全部取り出して、キューを空にするよ。
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

// EventQueue 構造体が Component であることを示すマーカー！✅
impl Component for EventQueue {}
