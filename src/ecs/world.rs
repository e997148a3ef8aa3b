// src/ecs/world.rs

// Any / TypeId: 実行時に型情報を扱うための道具。コンポーネントストレージを
// 型に関係なくひとつの HashMap にまとめて保持するために使うよ。
use std::any::{Any, TypeId};
// HashMap: TypeId をキーにして、その型のコンポーネントストレージを値として持つ。
// HashSet: 現在生存しているエンティティIDの管理に使う。
use std::collections::{HashMap, HashSet};

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// コンポーネントストレージとその操作をまとめた内部的な構造体だよ！✨
/// `World` の `component_stores` で型情報を隠蔽しつつも、
/// 型ごとの操作（特に削除！）を安全に行えるようにするんだ。
struct ComponentStoreEntry {
    /// 実際のコンポーネントデータ (`HashMap<Entity, T>`) を保持するストレージ。
    /// `Box<dyn Any>` で型消去してるから、いろんな型のストレージを
    /// 一つの HashMap でまとめて管理できる！
    storage: Box<dyn Any>,

    /// 指定されたエンティティのコンポーネントを `storage` から削除する関数ポインタ。🧹
    /// これのおかげで `destroy_entity` は `storage` の具体的な型 `T` を
    /// 知らなくても、各ストレージのお掃除処理を呼び出せるんだ！
    remover: fn(&mut Box<dyn Any>, Entity),
}

/// ゲーム世界の全てのエンティティとコンポーネントを管理する中心的な構造体 (自作ECSのコア！)。
/// エンティティの生存管理、コンポーネントの型ごとの保存とアクセス機能を提供するよ。
///
/// プレイヤーも敵の虫も宝石もカーソルも、ぜんぶこの中に住んでいる！🏠
pub struct World {
    /// 現在生存しているエンティティIDのセット。
    entities: HashSet<Entity>,
    /// 次に生成するエンティティに割り当てるID。作成のたびにインクリメント。
    next_entity_id: usize,
    /// コンポーネントの種類 (TypeId) ごとのストレージと削除操作。
    component_stores: HashMap<TypeId, ComponentStoreEntry>,
}

impl World {
    /// 新しい空の World を作成するコンストラクタ。
    pub fn new() -> Self {
        World {
            entities: HashSet::new(),
            next_entity_id: 0,
            component_stores: HashMap::new(),
        }
    }

    /// 新しいエンティティを生成し、その Entity を返す。
    /// IDは 0 から始まる連番だよ！0, 1, 2, 3... って感じ！🔢
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(entity);
        entity
    }

    /// 指定されたエンティティが存在するかどうかを確認する。
    pub fn is_entity_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// 指定されたエンティティを削除 (破棄) する。 ✨超重要メソッド！✨
    /// このエンティティに紐づけられている全てのコンポーネントも **自動的に削除される** よ！🧹
    /// 宝石を拾った時とか、ゲームオーバー後にプレイヤーを片付ける時とかに使う。
    ///
    /// # 戻り値
    /// エンティティが存在し、正常に削除された場合は `true`。
    /// エンティティが存在しなかった場合は `false`。
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if self.entities.remove(&entity) {
            // エンティティにくっついてたコンポーネントたちを全種類お掃除！🧹💨
            // 各ストレージに登録済みの remover 関数に任せるよ。
            for entry in self.component_stores.values_mut() {
                (entry.remover)(&mut entry.storage, entity);
            }
            true
        } else {
            false
        }
    }

    /// 新しい型のコンポーネントを World に登録する。
    /// これにより、その型のコンポーネントをエンティティに追加できるようになる。
    /// 内部的には、その型用のストレージ (`HashMap<Entity, T>`) と、
    /// その型のコンポーネントを削除するための **お掃除関数🧹** を初期化して登録する！
    ///
    /// 通常はゲーム初期化時（`init_handler`）に一度だけ呼ぶ。
    pub fn register_component<T: Component + Any + 'static>(&mut self) {
        let type_id = TypeId::of::<T>();

        // 型 T 専用の削除関数。downcast_mut で安全に HashMap<Entity, T> に戻してから remove！
        let remover_fn: fn(&mut Box<dyn Any>, Entity) = |storage_any, entity| {
            if let Some(storage) = storage_any.downcast_mut::<HashMap<Entity, T>>() {
                let _removed = storage.remove(&entity);
            } else {
                // register_component で正しい型の remover を登録してるはずだから、
                // ここに来ることは通常ありえないはず…もし来たら、プログラムのどこかがおかしい！😱
                eprintln!(
                    "FATAL ERROR in remover for type {}: storage downcast failed!",
                    std::any::type_name::<T>()
                );
            }
        };

        let new_storage: HashMap<Entity, T> = HashMap::new();
        self.component_stores.insert(
            type_id,
            ComponentStoreEntry {
                storage: Box::new(new_storage),
                remover: remover_fn,
            },
        );
    }

    /// エンティティにコンポーネントを追加（または上書き）する。
    ///
    /// 対象の型が未登録だったり、エンティティが生存していなかったりした場合は
    /// 何もしない（デバッグ出力のみ）。パニックはさせないよ！
    pub fn add_component<T: Component + Any + 'static>(&mut self, entity: Entity, component: T) {
        if !self.is_entity_alive(entity) {
            eprintln!(
                "World: add_component called for dead entity {:?} ({})",
                entity,
                std::any::type_name::<T>()
            );
            return;
        }
        match self.storage_mut::<T>() {
            Some(storage) => {
                storage.insert(entity, component);
            }
            None => {
                eprintln!(
                    "World: component type {} not registered, add_component ignored",
                    std::any::type_name::<T>()
                );
            }
        }
    }

    /// エンティティからコンポーネントを取り外す。外した値を返すよ。
    pub fn remove_component<T: Component + Any + 'static>(&mut self, entity: Entity) -> Option<T> {
        self.storage_mut::<T>()?.remove(&entity)
    }

    /// エンティティのコンポーネントへの不変参照を取得する。
    pub fn get_component<T: Component + Any + 'static>(&self, entity: Entity) -> Option<&T> {
        self.storage::<T>()?.get(&entity)
    }

    /// エンティティのコンポーネントへの可変参照を取得する。
    /// System が Position や Player を書き換える時の主役！✏️
    pub fn get_component_mut<T: Component + Any + 'static>(
        &mut self,
        entity: Entity,
    ) -> Option<&mut T> {
        self.storage_mut::<T>()?.get_mut(&entity)
    }

    /// 指定された型のコンポーネントを持つ、生存中のエンティティを全部集めて返す。
    /// 順序は不定だから、描画みたいに順序が大事な場面では呼び出し側でソートしてね！
    pub fn get_all_entities_with_component<T: Component + Any + 'static>(&self) -> Vec<Entity> {
        match self.storage::<T>() {
            Some(storage) => storage
                .keys()
                .copied()
                .filter(|entity| self.is_entity_alive(*entity))
                .collect(),
            None => Vec::new(),
        }
    }

    // --- 内部ヘルパー: 型 T のストレージへのアクセス ---

    fn storage<T: Component + Any + 'static>(&self) -> Option<&HashMap<Entity, T>> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_ref::<HashMap<Entity, T>>())
    }

    fn storage_mut<T: Component + Any + 'static>(&mut self) -> Option<&mut HashMap<Entity, T>> {
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_mut::<HashMap<Entity, T>>())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

// テストコードは world_tests.rs に移動 (ecs/mod.rs から宣言されてるよ)
