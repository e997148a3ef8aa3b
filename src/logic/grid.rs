// src/logic/grid.rs
//! マス目の上の移動ルールだよ！
//! プレイヤーの一歩、グリッドへのクランプ、ゴール判定、カーソル移動。

use crate::config::layout;

/// 矢印キー1回ぶんの移動方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

/// 座標に移動を1歩ぶん適用するよ（クランプはまだしない）。
/// 左右は1マス (101px)、上下は1行 (80px)。
pub fn step(x: f64, y: f64, mv: Move) -> (f64, f64) {
    match mv {
        Move::Left => (x - layout::COLUMN_WIDTH, y),
        Move::Right => (x + layout::COLUMN_WIDTH, y),
        Move::Up => (x, y - layout::ROW_STEP),
        Move::Down => (x, y + layout::ROW_STEP),
    }
}

/// はみ出した座標をグリッドの中に押し戻すよ。
/// 端から1歩はみ出したぶんをそのまま1歩ぶん戻す方式！
/// （1歩ずつしか動けないから、これで必ずグリッド内に収まる）
pub fn clamp_to_grid(x: f64, y: f64) -> (f64, f64) {
    let clamped_x = if x < layout::MIN_X {
        x + layout::COLUMN_WIDTH
    } else if x > layout::MAX_X {
        x - layout::COLUMN_WIDTH
    } else {
        x
    };
    let clamped_y = if y < layout::GOAL_Y {
        y + layout::ROW_STEP
    } else if y > layout::START_Y {
        y - layout::ROW_STEP
    } else {
        y
    };
    (clamped_x, clamped_y)
}

/// 移動してからクランプする、プレイヤー移動の本体！🚶
pub fn apply_move(x: f64, y: f64, mv: Move) -> (f64, f64) {
    let (nx, ny) = step(x, y, mv);
    clamp_to_grid(nx, ny)
}

/// 水際（ゴール行）に着いたかどうか。🏁
pub fn is_goal_row(y: f64) -> bool {
    y == layout::GOAL_Y
}

/// キャラ選択カーソルを1つ動かすよ。左右の端ではそれ以上動かない！
/// 上下やその他のキーでは動かない。
pub fn selector_step(index: usize, mv: Move) -> usize {
    match mv {
        Move::Left => index.saturating_sub(1),
        Move::Right => (index + 1).min(layout::NUM_COLUMNS - 1),
        _ => index,
    }
}

/// カーソルの index に対応する x 座標。不変条件 `x == index * 101` はここで守る！
pub fn selector_x(index: usize) -> f64 {
    index as f64 * layout::COLUMN_WIDTH
}
