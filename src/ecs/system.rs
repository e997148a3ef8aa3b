// src/ecs/system.rs

// これまで作った World を使うからインポートするよ。
use crate::ecs::world::World;

/// System（システム）トレイトだよ！
///
/// システムは、ゲームのロジック（ルールや振る舞い）を実行する役割を持つんだ。
/// このゲームだと「敵の虫を走らせるシステム」「当たり判定システム」
/// 「ゴール到達システム」「宝石の出現システム」みたいに、
/// 特定の関心事に特化したロジックをカプセル化（ひとまとめに）するんだよ。💊
///
/// `run` メソッドは、ブラウザの requestAnimationFrame から毎フレーム呼び出されて、
/// World の中のデータ（コンポーネント）を読み取ったり、変更したりするんだ。
///
/// `dt` は前のフレームからの経過秒数！
/// 移動量に dt を掛けることで、どのPCでも同じ速さでゲームが進むようになるよ。⏱️
pub trait System {
    /// このシステムを1フレームぶん実行するよ！
    ///
    /// # 引数
    /// - `world`: ゲーム世界のデータ（エンティティとコンポーネント）を保持する World への可変参照。
    /// - `dt`: 前フレームからの経過時間（秒）。
    fn run(&mut self, world: &mut World, dt: f64);
}

// --- 簡単な System のテスト ---
// System トレイトだけだとテストしにくいから、簡単なダミーシステムを作って、
// それが World と連携できるか軽く見てみよう！ (本格的なテストは各 System 実装時に！)
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::component::Component;
    use crate::ecs::entity::Entity;
    use crate::ecs::world::World;

    // --- テスト用のダミーコンポーネント ---
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Position {
        x: f64,
        y: f64,
    }
    impl Component for Position {}

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Velocity {
        speed: f64,
    }
    impl Component for Velocity {}

    // --- テスト用のダミーシステム ---
    // Velocity を持つ全エンティティの Position.x を speed * dt だけ進めるシステム。
    // 本物の敵移動システムのミニチュア版だね！🐞
    struct ScrollSystem;

    impl System for ScrollSystem {
        fn run(&mut self, world: &mut World, dt: f64) {
            // 借用エラーを避けるため、先に Velocity を集めてから Position を更新！
            let movers: Vec<(Entity, f64)> = world
                .get_all_entities_with_component::<Velocity>()
                .into_iter()
                .filter_map(|entity| {
                    world
                        .get_component::<Velocity>(entity)
                        .map(|vel| (entity, vel.speed))
                })
                .collect();

            for (entity, speed) in movers {
                if let Some(pos) = world.get_component_mut::<Position>(entity) {
                    pos.x += speed * dt;
                }
            }
        }
    }

    #[test]
    fn dummy_system_runs_and_modifies_world() {
        let mut world = World::new();
        let mut scroll_system = ScrollSystem;

        world.register_component::<Position>();
        world.register_component::<Velocity>();

        let runner = world.create_entity();
        world.add_component(runner, Position { x: 0.0, y: 60.0 });
        world.add_component(runner, Velocity { speed: 100.0 });

        let bystander = world.create_entity();
        world.add_component(bystander, Position { x: 10.0, y: 140.0 });
        // bystander には Velocity は付けない

        // 0.5秒ぶん実行！
        scroll_system.run(&mut world, 0.5);

        // runner は 100 * 0.5 = 50 進んでいるはず
        assert_eq!(
            world.get_component::<Position>(runner).unwrap(),
            &Position { x: 50.0, y: 60.0 }
        );
        // bystander は Velocity がないので動かないはず
        assert_eq!(
            world.get_component::<Position>(bystander).unwrap(),
            &Position { x: 10.0, y: 140.0 }
        );

        // もう1フレーム実行したらさらに進む！
        scroll_system.run(&mut world, 0.5);
        assert_eq!(
            world.get_component::<Position>(runner).unwrap().x,
            100.0
        );

        println!("ダミーシステムのテスト、成功！🎉");
    }
}
