// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! マス目のサイズ、レーンの座標、当たり判定の幅など。

// --- キャンバスとマス目 ---
pub const CANVAS_WIDTH: f64 = 505.0; // キャンバスの幅（101 × 5列）
pub const CANVAS_HEIGHT: f64 = 606.0; // キャンバスの高さ
pub const COLUMN_WIDTH: f64 = 101.0; // 1マスの幅。左右移動はこの単位！
pub const ROW_STEP: f64 = 80.0; // プレイヤーの上下移動の単位
pub const NUM_COLUMNS: usize = 5; // 列の数

// --- プレイヤーの可動範囲 ---
pub const MIN_X: f64 = 0.0; // いちばん左の列
pub const MAX_X: f64 = 404.0; // いちばん右の列 (101 × 4)
pub const GOAL_Y: f64 = -20.0; // 水際（ゴール）の行。ここに着いたら勝ち！🏁
pub const START_Y: f64 = 380.0; // いちばん下の行（スタート行）

// --- プレイヤーの初期位置 ---
pub const PLAYER_START_X: f64 = 202.0; // 真ん中の列
pub const PLAYER_START_Y: f64 = START_Y;

// --- 敵の虫 ---
pub const ENEMY_LANES: [f64; 3] = [60.0, 140.0, 220.0]; // 石畳のレーンの y 座標
pub const ENEMY_RESET_X: f64 = 0.0; // 画面端に消えた虫が戻ってくる x 座標
pub const ENEMY_OFFSCREEN_X: f64 = 505.0; // これを超えたら画面外とみなしてリセット
pub const ENEMY_SPEED_MIN: f64 = 150.0; // 虫のスピードの下限 (px/s)
pub const ENEMY_SPEED_MAX: f64 = 404.0; // 虫のスピードの上限 (px/s)
pub const ENEMY_COUNT: usize = 3; // 同時に走る虫の数

// --- 当たり判定 ---
// 虫の先頭 50px ぶんがプレイヤーのマス (幅101px) に重なったらヒット！💥
pub const ENEMY_HIT_FRONT: f64 = 50.0;
pub const PLAYER_HIT_WIDTH: f64 = COLUMN_WIDTH;

// --- 宝石 ---
pub const GEM_COLUMNS: [f64; 5] = [0.0, 101.0, 202.0, 303.0, 404.0]; // 宝石が置かれうる列
pub const GEM_RESPAWN_DELAY: f64 = 3.0; // 拾われてから次の宝石が出るまでの秒数

// --- その他の画面要素 ---
pub const SELECT_ROW_Y: f64 = 83.0; // キャラ選択画面でキャラとカーソルを並べる行
pub const HEART_ROW_Y: f64 = 505.0; // 残りライフ（ハート）を並べる行
pub const GOAL_RESET_DELAY: f64 = 1.0; // ゴール到達からスタート地点に戻るまでの秒数
