// src/logic/mod.rs
//! ブラウザに依存しない純粋なゲームルールたち。
//! ここのコードは全部ふつうの `cargo test` でテストできるよ！🧪

pub mod collision;
pub mod grid;
pub mod spawn;
