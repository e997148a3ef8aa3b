// src/ecs/component.rs

/// Component（コンポーネント）のマーカートレイトだよ！
///
/// コンポーネントは「エンティティにくっつけるデータ」のこと。
/// 例えば「座標 (Position)」とか「スピード (Velocity)」とか「プレイヤー情報 (Player)」とかね！
/// データそのものには振る舞いを持たせず、ロジックは System 側に書くのが ECS 流！✨
///
/// このトレイト自体は中身が空っぽ。「この型はコンポーネントとして World に
/// 登録していいよ」っていう印をつけるためだけに存在するんだ。
/// `'static` 境界は、型消去ストレージ (`Box<dyn Any>`) に入れるために必要！
pub trait Component: 'static {}
