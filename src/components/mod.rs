// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
// ゲームに登場する「データ」はぜんぶここに集まってる。整理整頓！🧹✨
pub mod collectible;
pub mod enemy;
pub mod events;
pub mod game_state;
pub mod player;
pub mod position;
pub mod selector;
pub mod sprite;
pub mod velocity;

// よく使う型は `crate::components::X` で届くように re-export しておくよ！
pub use collectible::Collectible;
pub use enemy::Enemy;
pub use events::{EventQueue, GameEvent};
pub use game_state::{GameState, GameStatus};
pub use player::Player;
pub use position::Position;
pub use selector::Selector;
pub use sprite::Sprite;
pub use velocity::Velocity;
