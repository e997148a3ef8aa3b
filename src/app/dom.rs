// src/app/dom.rs
//! スコアボードとリザルトダイアログの DOM 操作をまとめたモジュール。
//! ここはブラウザ境界だから、要素が見つからなくてもパニックせず
//! 警告ログを出して続行するよ。ゲームロジックは DOM がなくても回る！

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement};

use crate::config::assets;

/// document を取得する小さなヘルパー。
fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// セレクタで HtmlElement を引いてくる。見つからなければ警告だけ。
fn html_element(selector: &str) -> Option<HtmlElement> {
    let element = document()?.query_selector(selector).ok().flatten();
    match element {
        Some(el) => el.dyn_into::<HtmlElement>().ok(),
        None => {
            warn!("dom: element not found for selector '{}'", selector);
            None
        }
    }
}

/// 要素のテキストを書き換えるよ。
fn set_text(selector: &str, text: &str) {
    if let Some(el) = html_element(selector) {
        el.set_inner_text(text);
    }
}

/// 要素の display スタイルを切り替えるよ。
fn set_display(selector: &str, value: &str) {
    if let Some(el) = html_element(selector) {
        let _ = el.style().set_property("display", value);
    }
}

/// スコアボードの wins / points 表示を更新するよ。
pub fn update_scoreboard(wins: u32, score: u32) {
    set_text(assets::WINS_SELECTOR, &wins.to_string());
    set_text(assets::POINTS_SELECTOR, &score.to_string());
}

/// ゲーム開始！説明文を隠してスコアボードを出すよ。
pub fn show_scoreboard() {
    set_display(assets::SCOREBOARD_SELECTOR, "block");
    set_display(assets::INSTRUCTIONS_SELECTOR, "none");
}

/// キャラ選択画面に戻る時。スコアボードを隠して説明文を出すよ。
pub fn show_instructions() {
    set_display(assets::SCOREBOARD_SELECTOR, "none");
    set_display(assets::INSTRUCTIONS_SELECTOR, "block");
}

/// リザルトダイアログに合計を書き込んで表示するよ。🏁
pub fn show_results(wins: u32, score: u32) {
    set_text(assets::TOTAL_WINS_SELECTOR, &wins.to_string());
    set_text(assets::TOTAL_SCORE_SELECTOR, &score.to_string());
    set_display(assets::RESULTS_SELECTOR, "block");
}

/// リザルトダイアログを閉じるよ。
pub fn hide_results() {
    set_display(assets::RESULTS_SELECTOR, "none");
}
