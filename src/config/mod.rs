// src/config/mod.rs
//! ゲームの定数置き場。レイアウトの数値とアセットのパスはここに集約！

pub mod assets;
pub mod layout;
