// src/logic/spawn.rs
//! ランダムな配置を決めるルールだよ！🎲
//! 虫のレーンとスピード、宝石の置き場所と種類。
//! `Rng` をジェネリックに受け取るから、テストではシード固定の
//! `StdRng` を渡して再現可能にできるんだ！🧪

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::layout;
use crate::config::assets;

/// 敵のレーン (石畳の行) をランダムに1つ選ぶよ。
pub fn random_lane<R: Rng>(rng: &mut R) -> f64 {
    *layout::ENEMY_LANES
        .choose(rng)
        .expect("ENEMY_LANES is never empty")
}

/// 敵のスピードを [150, 404) の範囲でランダムに決めるよ。💨
pub fn random_speed<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(layout::ENEMY_SPEED_MIN..layout::ENEMY_SPEED_MAX)
}

/// 宝石を置く列をランダムに1つ選ぶよ。
pub fn random_column<R: Rng>(rng: &mut R) -> f64 {
    *layout::GEM_COLUMNS
        .choose(rng)
        .expect("GEM_COLUMNS is never empty")
}

/// 宝石の種類（スプライトとポイント）をランダムに1つ選ぶよ。💎
pub fn random_gem_kind<R: Rng>(rng: &mut R) -> (&'static str, u32) {
    *assets::GEM_KINDS
        .choose(rng)
        .expect("GEM_KINDS is never empty")
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_lane_always_picks_a_stone_row() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let lane = random_lane(&mut rng);
            assert!(
                layout::ENEMY_LANES.contains(&lane),
                "レーン {} は石畳の行じゃない！😱",
                lane
            );
        }
        println!("レーン抽選テスト、成功！🎉");
    }

    #[test]
    fn random_speed_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let speed = random_speed(&mut rng);
            assert!(speed >= layout::ENEMY_SPEED_MIN);
            assert!(speed < layout::ENEMY_SPEED_MAX);
        }
        println!("スピード範囲テスト、成功！🎉");
    }

    #[test]
    fn random_column_is_grid_aligned() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let column = random_column(&mut rng);
            assert!(layout::GEM_COLUMNS.contains(&column));
            // 101 の倍数になってるかも念押しでチェック！
            assert_eq!(column % layout::COLUMN_WIDTH, 0.0);
        }
        println!("宝石の列抽選テスト、成功！🎉");
    }

    #[test]
    fn random_gem_kind_comes_from_the_table() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let (sprite, points) = random_gem_kind(&mut rng);
            assert!(assets::GEM_KINDS.contains(&(sprite, points)));
            assert!(matches!(points, 10 | 30 | 60));
        }
        println!("宝石の種類抽選テスト、成功！🎉");
    }

    #[test]
    fn seeded_rng_makes_spawns_reproducible() {
        // 同じシードなら同じ結果になるはず！再現性バッチリ！✨
        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        for _ in 0..10 {
            assert_eq!(random_lane(&mut rng_a), random_lane(&mut rng_b));
            assert_eq!(random_speed(&mut rng_a), random_speed(&mut rng_b));
        }
        println!("シード再現性テスト、成功！🎉");
    }
}
