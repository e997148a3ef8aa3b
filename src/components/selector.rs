// src/components/selector.rs

use serde::{Deserialize, Serialize};
use crate::ecs::component::Component;
use crate::config::assets;

/// キャラクター選択画面のカーソルを表すコンポーネントだよ！🎯
///
/// - `index`: 今選んでいるキャラクターの番号 (0..=4)。
///
/// カーソルの x 座標は常に `index * 101` になるっていう不変条件があるから、
/// index を動かすときは Position も一緒に更新すること！（event_handler がやってる）
/// 左右の端ではそれ以上動かない（クランプ）。エンターで決定して、
/// 選ばれたキャラのスプライトでプレイヤーが生成されるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    pub index: usize,
}

impl Selector {
    /// 今選ばれているキャラクターのスプライトパスを返すよ。
    pub fn selected_sprite(&self) -> &'static str {
        assets::CHARACTER_SPRITES[self.index]
    }
}

// Selector 構造体が Component であることを示すマーカー！✅
impl Component for Selector {}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_reports_selected_sprite() {
        let selector = Selector { index: 0 };
        assert_eq!(selector.selected_sprite(), "images/char-boy.png");

        let last = Selector { index: 4 };
        assert_eq!(last.selected_sprite(), "images/char-princess-girl.png");

        println!("Selector スプライト選択テスト、成功！🎉");
    }
}
