// src/app/audio.rs
//! 効果音の再生。ページ側の <audio> 要素を探して鳴らすだけの薄いラッパー！🔊
//! 要素がなくても（テスト用ページとか）警告だけ出してゲームは続行するよ。

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlAudioElement};

use crate::config::assets;

/// セレクタで <audio> 要素を探して再生するよ。
/// `play()` が返す Promise は待たない（鳴ればラッキーくらいの扱いでOK！）。
fn play(selector: &str) {
    let audio = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());

    match audio {
        Some(audio) => {
            let _ = audio.play();
        }
        None => warn!("audio: element not found for selector '{}'", selector),
    }
}

/// ゴール到達の勝利音！🎺
pub fn play_win_sound() {
    play(assets::WIN_SOUND_SELECTOR);
}

/// 虫にぶつかった時の失敗音…💥
pub fn play_lose_sound() {
    play(assets::LOSE_SOUND_SELECTOR);
}

/// 宝石ゲットのキラキラ音！💎
pub fn play_gem_sound() {
    play(assets::GEM_SOUND_SELECTOR);
}
