//src/bag/src/events.rs
//! 背包与装备的变更事件载荷。
//!
//! 载荷只描述"发生了什么"，视图收到通知后通过查询接口重新读取
//! 槽位状态，而不是依赖载荷还原现场。

use items::ItemCategory;

/// 背包变更事件
#[derive(Clone, Debug, PartialEq)]
pub enum InventoryEvent {
    /// 放入物品：stored 为入槽数量，dropped 为溢出落地数量
    Added {
        name: String,
        stored: u32,
        dropped: u32,
    },
    /// 按实例移除物品
    Removed { name: String, count: u32 },
    /// 指定分类整理完毕
    Reorganized { category: ItemCategory },
    /// 外部直接改动槽位后的强制刷新
    Refreshed,
}

/// 装备变更事件
#[derive(Clone, Debug, PartialEq)]
pub enum EquipmentEvent {
    /// 装上装备（替换旧装备时旧件已送回背包）
    Equipped {
        category: ItemCategory,
        name: String,
    },
    /// 卸下装备
    Unequipped {
        category: ItemCategory,
        name: String,
    },
}
