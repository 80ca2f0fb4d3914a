//src/items/src/usage.rs
//! 物品使用行为：随目录条目绑定的标签变体，通过单一入口分发。
//!
//! 效果只由变体及其参数决定；行为自身报告是否消耗了一层堆叠，
//! 调用方不得按分类去推断扣除。

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::Item;

/// 使用行为（按目录条目配置，绑定到每个物品实例）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub enum UseStrategy {
    /// 恢复固定生命值
    Potion { heal: u32 },
    /// 使用即请求装备到武器槽
    Weapon,
    /// 使用即请求装备到护甲槽
    Armor,
}

/// 使用行为作用的角色钩子
pub trait UseTarget {
    /// 恢复生命值，返回实际恢复量（内部按上限截断）
    fn restore_health(&mut self, amount: u32) -> u32;
}

/// 使用结果，由行为自身报告
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseOutcome {
    /// 消耗了一层堆叠，调用方应从来源扣除1个
    Consumed,
    /// 请求装备该物品，由会话执行装备流程
    RequestEquip,
    /// 没有发生任何效果
    NoEffect,
}

impl UseOutcome {
    /// 行为是否实际执行（"使用是否成功"的布尔视图）
    pub fn used(&self) -> bool {
        !matches!(self, UseOutcome::NoEffect)
    }
}

impl UseStrategy {
    /// 分发使用行为
    pub fn apply(&self, item: &Item, target: &mut dyn UseTarget) -> UseOutcome {
        match self {
            UseStrategy::Potion { heal } => {
                let restored = target.restore_health(*heal);
                tracing::debug!("使用 {} 恢复 {} 点生命", item.name, restored);
                UseOutcome::Consumed
            }
            UseStrategy::Weapon | UseStrategy::Armor => UseOutcome::RequestEquip,
        }
    }
}
