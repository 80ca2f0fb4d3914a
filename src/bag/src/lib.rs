//src/bag/src/lib.rs
//! 背包与装备存储引擎。
//!
//! 单线程同步模型：所有变更都是直接调用，变更通知在调用返回前
//! 按登记顺序同步派发完毕。

// 存储模块
pub mod equipment;
pub mod inventory;

// 通知模块
pub mod events;
pub mod notify;

pub use crate::equipment::{EquipError, Equipment, EquipmentSlot};
pub use crate::events::{EquipmentEvent, InventoryEvent};
pub use crate::inventory::{Inventory, InventorySlot, WorldDrop};
pub use crate::notify::{ChangeNotifier, ListenerId};
