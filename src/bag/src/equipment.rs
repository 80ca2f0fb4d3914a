//src/bag/src/equipment.rs
//! 装备系统：按分类约束的装备槽与装备栏。

use thiserror::Error;

use items::{ItemCategory, ItemTrait};

use crate::events::EquipmentEvent;
use crate::inventory::{Inventory, WorldDrop};
use crate::notify::{ChangeNotifier, ListenerId};

/// 装备系统错误类型
#[derive(Debug, Error, PartialEq)]
pub enum EquipError {
    #[error("物品分类与槽位不符")]
    CategoryMismatch,
    #[error("没有该分类的装备槽")]
    NoSuchSlot,
}

/// 装备槽（固定分类，至多一件）
///
/// 不变量：槽内物品的分类恒等于槽位分类。
#[derive(Clone, Debug, PartialEq)]
pub struct EquipmentSlot<T: ItemTrait> {
    category: ItemCategory,
    item: Option<T>,
}

impl<T: ItemTrait> EquipmentSlot<T> {
    pub fn new(category: ItemCategory) -> Self {
        Self {
            category,
            item: None,
        }
    }

    /// 装上物品（存入克隆），返回被替换下来的旧装备
    ///
    /// 分类不符时槽位保持原状。旧装备交还调用方送回背包，装备
    /// 流程永远不会悄悄丢弃已装备的物品。
    pub fn equip(&mut self, item: &T) -> Result<Option<T>, EquipError> {
        if item.category() != self.category {
            return Err(EquipError::CategoryMismatch);
        }
        let old = self.item.take();
        self.item = Some(item.clone());
        Ok(old)
    }

    /// 卸下并返回当前装备；空槽返回 None
    pub fn unequip(&mut self) -> Option<T> {
        self.item.take()
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    /// 可变访问槽内装备（目录热更新后刷新描述字段用）
    ///
    /// 调用方负责维持槽内物品分类与槽位分类一致的不变量。
    pub fn item_mut(&mut self) -> Option<&mut T> {
        self.item.as_mut()
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}

/// 装备栏（分类到槽位的固定映射）
///
/// 槽位在构造时按支持的分类一次建好，运行期不增删。
#[derive(Debug)]
pub struct Equipment<T: ItemTrait> {
    slots: Vec<EquipmentSlot<T>>,
    notifier: ChangeNotifier<EquipmentEvent>,
}

impl<T: ItemTrait> Equipment<T> {
    /// 创建装备栏，按可装备分类预建全部槽位
    pub fn new() -> Self {
        Self {
            slots: ItemCategory::equippable().map(EquipmentSlot::new).collect(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// 装备物品
    ///
    /// 成功时被替换的旧装备（如有）送回背包（数量1，溢出照常落
    /// 地），随后发出一次装备变更通知；失败时不发任何通知。分类
    /// 没有对应槽位视作缺失配置：记录警告后返回 false。
    pub fn equip_item(
        &mut self,
        item: &T,
        bag: &mut Inventory<T>,
        ground: &mut dyn WorldDrop<T>,
    ) -> bool {
        let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| slot.category() == item.category())
        else {
            tracing::warn!("分类 {} 没有对应的装备槽", item.category());
            return false;
        };
        match slot.equip(item) {
            Ok(old) => {
                if let Some(old) = old {
                    bag.add_item(&old, 1, ground);
                }
                self.notifier.notify(&EquipmentEvent::Equipped {
                    category: item.category(),
                    name: item.display_name(),
                });
                true
            }
            Err(_) => false,
        }
    }

    /// 卸下指定分类的装备；确有物品卸下时才发出通知
    pub fn unequip_item(&mut self, category: ItemCategory) -> Option<T> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.category() == category)?;
        let removed = slot.unequip();
        if let Some(item) = &removed {
            self.notifier.notify(&EquipmentEvent::Unequipped {
                category,
                name: item.display_name(),
            });
        }
        removed
    }

    /// 查询分类对应的槽位（纯查询，无副作用）
    pub fn slot(&self, category: ItemCategory) -> Option<&EquipmentSlot<T>> {
        self.slots.iter().find(|slot| slot.category() == category)
    }

    /// 可变查询分类对应的槽位（目录热更新刷新装备时使用）
    pub fn slot_mut(&mut self, category: ItemCategory) -> Option<&mut EquipmentSlot<T>> {
        self.slots.iter_mut().find(|slot| slot.category() == category)
    }

    /// 全部槽位（按构造顺序，供视图遍历）
    pub fn slots(&self) -> &[EquipmentSlot<T>] {
        &self.slots
    }

    /// 订阅装备变更通知，登记顺序即派发顺序
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&EquipmentEvent) + 'static,
    {
        self.notifier.subscribe(listener)
    }

    /// 退订通知
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

impl<T: ItemTrait> Default for Equipment<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use items::InstanceId;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    struct TestItem {
        name: String,
        category: ItemCategory,
        instance: InstanceId,
    }

    impl TestItem {
        fn new(name: &str, category: ItemCategory, instance: u64) -> Self {
            Self {
                name: name.to_string(),
                category,
                instance: InstanceId(instance),
            }
        }
    }

    impl ItemTrait for TestItem {
        fn stacking_id(&self) -> u64 {
            seahash::hash(self.name.as_bytes())
        }
        fn is_stackable(&self) -> bool {
            false
        }
        fn max_stack(&self) -> u32 {
            1
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

    #[derive(Default)]
    struct TestGround {
        drops: Vec<(TestItem, u32)>,
    }

    impl WorldDrop<TestItem> for TestGround {
        fn drop_on_ground(&mut self, item: TestItem, count: u32) {
            self.drops.push((item, count));
        }
    }

    #[test]
    fn slot_rejects_wrong_category() {
        let mut slot = EquipmentSlot::new(ItemCategory::Weapon);
        let potion = TestItem::new("回复药水", ItemCategory::Potion, 1);

        assert_eq!(slot.equip(&potion), Err(EquipError::CategoryMismatch));
        assert!(slot.is_empty()); // 失败后槽位原状
    }

    #[test]
    fn equip_returns_displaced_item() {
        let mut slot = EquipmentSlot::new(ItemCategory::Weapon);
        let sword = TestItem::new("木剑", ItemCategory::Weapon, 1);
        let axe = TestItem::new("战斧", ItemCategory::Weapon, 2);

        assert_eq!(slot.equip(&sword), Ok(None));
        assert_eq!(slot.equip(&axe), Ok(Some(sword)));
        assert_eq!(slot.item().map(|item| item.name.as_str()), Some("战斧"));
    }

    #[test]
    fn unequip_empty_slot_is_noop() {
        let mut slot: EquipmentSlot<TestItem> = EquipmentSlot::new(ItemCategory::Armor);
        assert!(slot.unequip().is_none());
    }

    #[test]
    fn replaced_weapon_goes_back_to_bag() {
        let mut equipment = Equipment::new();
        let mut bag = Inventory::new(4);
        let mut ground = TestGround::default();
        let sword = TestItem::new("木剑", ItemCategory::Weapon, 1);
        let axe = TestItem::new("战斧", ItemCategory::Weapon, 2);

        assert!(equipment.equip_item(&sword, &mut bag, &mut ground));
        assert!(equipment.equip_item(&axe, &mut bag, &mut ground));

        assert_eq!(bag.total_of(&sword), 1); // 旧装备回包，数量1
        assert_eq!(
            equipment
                .slot(ItemCategory::Weapon)
                .and_then(|slot| slot.item())
                .map(|item| item.name.as_str()),
            Some("战斧")
        );
    }

    #[test]
    fn missing_slot_category_fails_silently_for_state() {
        let mut equipment = Equipment::new();
        let mut bag = Inventory::new(4);
        let mut ground = TestGround::default();
        let potion = TestItem::new("回复药水", ItemCategory::Potion, 1);

        let fired = Arc::new(Mutex::new(0u32));
        let capture = Arc::clone(&fired);
        equipment.subscribe(move |_| *capture.lock().unwrap() += 1);

        assert!(!equipment.equip_item(&potion, &mut bag, &mut ground));
        assert_eq!(*fired.lock().unwrap(), 0); // 失败不发通知
    }

    #[test]
    fn notifications_fire_per_successful_mutation() {
        let mut equipment = Equipment::new();
        let mut bag = Inventory::new(4);
        let mut ground = TestGround::default();
        let sword = TestItem::new("木剑", ItemCategory::Weapon, 1);

        let events = Arc::new(Mutex::new(Vec::new()));
        let capture = Arc::clone(&events);
        equipment.subscribe(move |event| capture.lock().unwrap().push(event.clone()));

        equipment.equip_item(&sword, &mut bag, &mut ground);
        equipment.unequip_item(ItemCategory::Weapon);
        equipment.unequip_item(ItemCategory::Weapon); // 空槽卸下不发通知

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                EquipmentEvent::Equipped {
                    category: ItemCategory::Weapon,
                    name: "木剑".to_string(),
                },
                EquipmentEvent::Unequipped {
                    category: ItemCategory::Weapon,
                    name: "木剑".to_string(),
                },
            ]
        );
    }

    #[test]
    fn slot_lookup_is_pure() {
        let equipment: Equipment<TestItem> = Equipment::new();

        assert!(equipment.slot(ItemCategory::Weapon).is_some());
        assert!(equipment.slot(ItemCategory::Armor).is_some());
        assert!(equipment.slot(ItemCategory::Coin).is_none());
    }
}
