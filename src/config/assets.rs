// src/config/assets.rs
//! スプライト画像と効果音のパス／セレクタを定義するよ！🖼️🔊
//! 実際のファイルはページ側 (images/, <audio> タグ) が持っていて、
//! Rust 側はパスとセレクタ文字列だけを知っていればOK！

// --- スプライト画像 ---
pub const ENEMY_SPRITE: &str = "images/enemy-bug.png";
pub const SELECTOR_SPRITE: &str = "images/Selector.png";
pub const HEART_SPRITE: &str = "images/Heart.png";

/// 選べるキャラクターたち！カーソルの index とこの配列の添字が対応するよ。
pub const CHARACTER_SPRITES: [&str; 5] = [
    "images/char-boy.png",
    "images/char-cat-girl.png",
    "images/char-horn-girl.png",
    "images/char-pink-girl.png",
    "images/char-princess-girl.png",
];

/// 宝石の種類。スプライトとポイントのペアだよ。💎
/// 緑10点・青30点・オレンジ60点！
pub const GEM_KINDS: [(&str, u32); 3] = [
    ("images/Gem Green.png", 10),
    ("images/Gem Blue.png", 30),
    ("images/Gem Orange.png", 60),
];

// --- 効果音の <audio> 要素セレクタ ---
pub const WIN_SOUND_SELECTOR: &str = "#win-sound";
pub const LOSE_SOUND_SELECTOR: &str = "#lose-sound";
pub const GEM_SOUND_SELECTOR: &str = "#gem-sound";

// --- DOM のセレクタ（スコアボードとリザルトダイアログ） ---
pub const SCOREBOARD_SELECTOR: &str = ".score";
pub const INSTRUCTIONS_SELECTOR: &str = ".instructions";
pub const WINS_SELECTOR: &str = ".wins";
pub const POINTS_SELECTOR: &str = ".points";
pub const TOTAL_WINS_SELECTOR: &str = ".total-wins";
pub const TOTAL_SCORE_SELECTOR: &str = ".total-score";
pub const RESULTS_SELECTOR: &str = "#results";
