// src/components/sprite.rs

// serde を使う宣言！見た目の情報もデバッグダンプに含めるよ。
use serde::{Deserialize, Serialize};
// Component トレイトを使う宣言！
use crate::ecs::component::Component;

/// エンティティの見た目（スプライト画像）を表すコンポーネントだよ！🖼️
///
/// 中身は画像ファイルへのパスだけ。実際の `HtmlImageElement` は
/// app 側のレンダラーがパスをキーにキャッシュして持つから、
/// World の中にはブラウザの型を持ち込まない！ここ大事！✅
///
/// プレイヤーはキャラ選択の結果によってスプライトが変わるから、
/// `&'static str` じゃなくて `String` で持っておくよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub path: String,
}

impl Sprite {
    /// パスからスプライトを作る小さいヘルパー。
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

// Sprite 構造体が Component であることを示すマーカー！✅
impl Component for Sprite {}
