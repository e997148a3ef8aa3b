// src/logic/collision.rs
//! 当たり判定のルールだよ！💥
//! 敵の虫は横に滑らかに動くから軸平行の範囲判定 (AABB)、
//! 宝石はマス目にぴったり置かれるから完全一致判定。

use crate::config::layout;

/// 敵の虫がプレイヤーに当たったかどうか。
///
/// 同じレーン (y が完全一致) にいて、かつ虫の先頭 50px が
/// プレイヤーのマス（幅101px）に重なっていたらヒット！
/// 座標は全部マス目か定数レーン由来だから、y の `==` 比較は安全だよ。
pub fn enemy_hits_player(enemy_x: f64, enemy_y: f64, player_x: f64, player_y: f64) -> bool {
    enemy_y == player_y
        && enemy_x + layout::ENEMY_HIT_FRONT >= player_x
        && enemy_x <= player_x + layout::PLAYER_HIT_WIDTH
}

/// 宝石を拾えるかどうか。プレイヤーと宝石が同じマスに居たら拾える！💎
pub fn gem_on_player(gem_x: f64, gem_y: f64, player_x: f64, player_y: f64) -> bool {
    gem_x == player_x && gem_y == player_y
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_hits_player_on_same_lane() {
        // 虫がプレイヤーのマスに突っ込んできた！
        assert!(enemy_hits_player(180.0, 140.0, 202.0, 140.0));
        // 虫がプレイヤーのマスの上を通過中
        assert!(enemy_hits_player(250.0, 140.0, 202.0, 140.0));

        println!("同一レーン衝突テスト、成功！🎉");
    }

    #[test]
    fn enemy_misses_player_on_other_lane() {
        // x は重なってるけどレーンが違うのでセーフ！
        assert!(!enemy_hits_player(202.0, 60.0, 202.0, 140.0));
        // プレイヤーが草の上 (380) にいる時は絶対当たらない
        assert!(!enemy_hits_player(202.0, 140.0, 202.0, 380.0));

        println!("別レーン安全テスト、成功！🎉");
    }

    #[test]
    fn enemy_hit_boundaries_are_exact() {
        let player_x = 202.0;
        let lane = 60.0;

        // 虫の先頭 (x + 50) がちょうどプレイヤーの左端に触れた瞬間はヒット
        assert!(enemy_hits_player(player_x - 50.0, lane, player_x, lane));
        // その1px手前はセーフ
        assert!(!enemy_hits_player(player_x - 51.0, lane, player_x, lane));

        // 虫の後端がプレイヤーの右端 (x + 101) にいる間はヒット
        assert!(enemy_hits_player(player_x + 101.0, lane, player_x, lane));
        // 右端を抜けたらセーフ
        assert!(!enemy_hits_player(player_x + 102.0, lane, player_x, lane));

        println!("衝突境界値テスト、成功！🎉");
    }

    #[test]
    fn gem_pickup_requires_exact_cell_match() {
        // 同じマス → 拾える！
        assert!(gem_on_player(303.0, 220.0, 303.0, 220.0));
        // 隣の列 → 拾えない
        assert!(!gem_on_player(202.0, 220.0, 303.0, 220.0));
        // 同じ列でも行が違う → 拾えない
        assert!(!gem_on_player(303.0, 140.0, 303.0, 220.0));

        println!("宝石マス一致テスト、成功！🎉");
    }
}
