//src/items/src/lib.rs
//! 物品数据模型：分类、实例、目录条目与使用行为。

use std::fmt;
use std::hash::Hasher;

use bincode::encode_to_vec;
use bincode::{Decode, Encode};
use seahash::SeaHasher;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

pub use crate::catalog::{CatalogEntry, CatalogFile};
pub use crate::factory::ItemFactory;
pub use crate::usage::{UseOutcome, UseStrategy, UseTarget};

pub mod catalog;
pub mod factory;
pub mod usage;

/// bincode 统一配置（堆叠键哈希与数据编码共用）
pub const BINCODE_CONFIG: bincode::config::Configuration = bincode::config::standard();

/// 物品分类（决定装备槽位与使用行为的分发）
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    Encode,
    Decode,
    Serialize,
    Deserialize,
)]
pub enum ItemCategory {
    None,   // 未分类
    Weapon, // 武器
    Armor,  // 护甲
    Potion, // 药水
    Coin,   // 金币
}

impl ItemCategory {
    /// 拥有固定装备槽的分类（装备栏按此构造槽位）
    pub fn equippable() -> impl Iterator<Item = ItemCategory> {
        Self::iter().filter(|category| matches!(category, Self::Weapon | Self::Armor))
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemCategory::None => "无",
            ItemCategory::Weapon => "武器",
            ItemCategory::Armor => "护甲",
            ItemCategory::Potion => "药水",
            ItemCategory::Coin => "金币",
        };
        write!(f, "{}", name)
    }
}

/// 物品实例标识（由工厂铸造；克隆保持同一身份）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Encode, Decode, Serialize, Deserialize,
)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 物品实例（目录条目的运行期拷贝加上实例身份）
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct Item {
    pub name: String,                      // 目录名称（堆叠匹配键）
    pub icon: String,                      // 图标资源键
    pub category: ItemCategory,            // 分类
    pub max_stack: u32,                    // 单槽堆叠上限
    pub stackable: bool,                   // 是否可堆叠
    pub world_prefab: String,              // 场景预制体资源键
    pub use_strategy: Option<UseStrategy>, // 使用行为
    pub instance: InstanceId,              // 实例标识
}

impl Item {
    /// 由目录条目实例化（拷贝全部描述字段并绑定使用行为）
    pub fn from_entry(entry: &CatalogEntry, instance: InstanceId) -> Self {
        Self {
            name: entry.name.clone(),
            icon: entry.icon.clone(),
            category: entry.category,
            max_stack: entry.max_stack,
            stackable: entry.stackable,
            world_prefab: entry.world_prefab.clone(),
            use_strategy: entry.use_strategy,
            instance,
        }
    }

    /// 目录条目变更后同步描述字段（实例身份不变）
    pub fn refresh_from(&mut self, entry: &CatalogEntry) {
        self.name = entry.name.clone();
        self.icon = entry.icon.clone();
        self.category = entry.category;
        self.max_stack = entry.max_stack;
        self.stackable = entry.stackable;
        self.world_prefab = entry.world_prefab.clone();
        self.use_strategy = entry.use_strategy;
    }

    /// 使用物品；未绑定行为时记录警告并报告无效果
    pub fn use_on(&self, target: &mut dyn UseTarget) -> UseOutcome {
        match &self.use_strategy {
            Some(strategy) => strategy.apply(self, target),
            None => {
                tracing::warn!("{} 没有绑定使用行为", self.name);
                UseOutcome::NoEffect
            }
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// 物品特性约束
pub trait ItemTrait: PartialEq + Clone + std::fmt::Debug {
    /// 堆叠匹配键（仅由目录名称决定）
    fn stacking_id(&self) -> u64;

    /// 是否可堆叠（不可堆叠物品不会开启新堆叠合并）
    fn is_stackable(&self) -> bool;

    /// 单槽最大堆叠数量
    fn max_stack(&self) -> u32;

    /// 实例身份（用于按引用移除）
    fn instance_id(&self) -> InstanceId;

    /// 显示名称（用于UI渲染）
    fn display_name(&self) -> String;

    /// 物品分类（用于装备与整理）
    fn category(&self) -> ItemCategory;
}

impl ItemTrait for Item {
    /// 生成堆叠标识
    ///
    /// 刻意只对目录名称哈希：两个同名条目即使配置不同也会合并堆叠，
    /// 与原始行为保持一致（大小写敏感）。
    fn stacking_id(&self) -> u64 {
        let mut hasher = SeaHasher::new();
        let bytes = encode_to_vec(&self.name, BINCODE_CONFIG).unwrap();
        hasher.write(&bytes);
        hasher.finish()
    }

    fn is_stackable(&self) -> bool {
        self.stackable
    }

    fn max_stack(&self) -> u32 {
        self.max_stack
    }

    fn instance_id(&self) -> InstanceId {
        self.instance
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn category(&self) -> ItemCategory {
        self.category
    }
}
