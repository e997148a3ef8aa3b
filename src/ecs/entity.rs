// src/ecs/entity.rs

// serde を使う宣言！Entity の ID をデバッグ用の状態ダンプ (JSON) に含めるために使うよ。
use serde::{Deserialize, Serialize};

/// Entity（エンティティ）とは、ゲームに登場する「モノ」を表すただの識別子（ID）だよ！
/// この横断ゲームだと、プレイヤー、敵の虫たち、宝石、キャラ選択カーソル、
/// それからゲーム状態を持つシングルトンもぜんぶエンティティになる。
///
/// ID は単なる数字（usize）で、これだけだと意味はないんだけど、
/// コンポーネントと組み合わせることで
/// 「IDが 2 のエンティティは、敵の虫で、座標 (0, 140) をスピード 250 で走ってる」
/// みたいに意味を持たせることができるんだ！便利でしょ？ ✨
///
/// #[derive(...)] はRustが自動的に便利な機能を追加してくれるおまじない！
/// - PartialEq, Eq: ID同士が同じかどうか比較できるようにする (`==` とか)
/// - PartialOrd, Ord: IDの大小を比較できるようにする（描画順を安定させるのに使う！）
/// - Hash: HashMap / HashSet のキーとして使えるようにする
/// - Clone, Copy: IDを簡単に複製できるようにする
/// - Debug: デバッグ出力 (`println!("{:?}", entity)`) できるようにする
/// - Serialize, Deserialize: serde でJSONなどに変換できるようにする
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize,
)]
pub struct Entity(pub usize);
