//src/items/src/factory.rs
//! 物品工厂：按分类注册目录条目并实例化物品。

use std::collections::HashMap;

use crate::catalog::{CatalogEntry, CatalogFile};
use crate::{InstanceId, Item, ItemCategory};

/// 物品工厂（每个分类至多一个已注册条目）
///
/// 分类重复注册时先到者生效，后到者被忽略并记录警告；
/// 未注册分类的实例化请求返回 None，视作"无物可生成"而非错误。
#[derive(Clone, Debug)]
pub struct ItemFactory {
    entries: HashMap<ItemCategory, CatalogEntry>,
    next_instance: u64, // 实例标识计数，进程内不复用
}

impl ItemFactory {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_instance: 1,
        }
    }

    /// 从目录文件构建，按文件顺序注册
    pub fn from_catalog(catalog: CatalogFile) -> Self {
        let mut factory = Self::new();
        for entry in catalog.entries {
            factory.register(entry);
        }
        factory
    }

    /// 注册条目；同分类已有条目时保留先到者并返回 false
    pub fn register(&mut self, entry: CatalogEntry) -> bool {
        if let Some(existing) = self.entries.get(&entry.category) {
            tracing::warn!(
                "分类 {} 已注册条目 {}，忽略后来的 {}",
                entry.category,
                existing.name,
                entry.name
            );
            return false;
        }
        self.entries.insert(entry.category, entry);
        true
    }

    /// 实例化物品；分类未注册时返回 None 并记录警告
    pub fn create_item(&mut self, category: ItemCategory) -> Option<Item> {
        let Some(entry) = self.entries.get(&category) else {
            tracing::warn!("分类 {} 没有已注册的目录条目，无法生成物品", category);
            return None;
        };
        let instance = InstanceId(self.next_instance);
        self.next_instance += 1;
        Some(Item::from_entry(entry, instance))
    }

    /// 查询分类对应的条目
    pub fn entry(&self, category: ItemCategory) -> Option<&CatalogEntry> {
        self.entries.get(&category)
    }

    /// 调整分类的堆叠开关（关闭时上限同步为1）
    pub fn reconfigure_stackable(&mut self, category: ItemCategory, stackable: bool) -> bool {
        match self.entries.get_mut(&category) {
            Some(entry) => {
                entry.configure_stackable(stackable);
                true
            }
            None => {
                tracing::warn!("分类 {} 没有条目，无法调整堆叠开关", category);
                false
            }
        }
    }

    /// 调整分类的堆叠上限（最低为1）
    pub fn reconfigure_max_stack(&mut self, category: ItemCategory, max_stack: u32) -> bool {
        match self.entries.get_mut(&category) {
            Some(entry) => {
                entry.configure_max_stack(max_stack);
                true
            }
            None => {
                tracing::warn!("分类 {} 没有条目，无法调整堆叠上限", category);
                false
            }
        }
    }

    /// 已注册条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ItemFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, category: ItemCategory) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            icon: String::new(),
            category,
            max_stack: 10,
            stackable: true,
            world_prefab: String::new(),
            use_strategy: None,
        }
    }

    #[test]
    fn first_registration_wins() {
        let mut factory = ItemFactory::new();
        assert!(factory.register(entry("回复药水", ItemCategory::Potion)));
        assert!(!factory.register(entry("魔力药水", ItemCategory::Potion)));

        let item = factory.create_item(ItemCategory::Potion).unwrap();
        assert_eq!(item.name, "回复药水");
    }

    #[test]
    fn unregistered_category_yields_none() {
        let mut factory = ItemFactory::new();
        factory.register(entry("木剑", ItemCategory::Weapon));

        assert!(factory.create_item(ItemCategory::Coin).is_none());
    }

    #[test]
    fn instances_get_distinct_ids() {
        let mut factory = ItemFactory::new();
        factory.register(entry("回复药水", ItemCategory::Potion));

        let a = factory.create_item(ItemCategory::Potion).unwrap();
        let b = factory.create_item(ItemCategory::Potion).unwrap();
        assert_ne!(a.instance, b.instance);
    }

    #[test]
    fn reconfigure_updates_entry() {
        let mut factory = ItemFactory::new();
        factory.register(entry("回复药水", ItemCategory::Potion));

        assert!(factory.reconfigure_max_stack(ItemCategory::Potion, 5));
        assert_eq!(factory.entry(ItemCategory::Potion).unwrap().max_stack, 5);

        assert!(factory.reconfigure_stackable(ItemCategory::Potion, false));
        let entry = factory.entry(ItemCategory::Potion).unwrap();
        assert!(!entry.stackable);
        assert_eq!(entry.max_stack, 1);

        assert!(!factory.reconfigure_max_stack(ItemCategory::Coin, 3));
    }
}
