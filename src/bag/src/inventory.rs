//src/bag/src/inventory.rs
//! 库存系统：固定槽位、两段式堆叠放入、按实例移除与分类整理。

use items::{ItemCategory, ItemTrait};

use crate::events::InventoryEvent;
use crate::notify::{ChangeNotifier, ListenerId};

/// 世界掉落协作方
///
/// 背包溢出与丢弃流程的单向出口：调用方交出物品后不再关心
/// 世界如何呈现它。
pub trait WorldDrop<T> {
    /// 将 count 个 item 放到角色脚下
    fn drop_on_ground(&mut self, item: T, count: u32);
}

/// 库存槽位（物品引用加数量）
///
/// 不变量：count == 0 当且仅当 item 为 None；有物品时 count 不超过
/// 该物品的堆叠上限。
#[derive(Clone, Debug, PartialEq)]
pub struct InventorySlot<T: ItemTrait> {
    item: Option<T>,
    count: u32,
}

impl<T: ItemTrait> InventorySlot<T> {
    pub fn new() -> Self {
        Self {
            item: None,
            count: 0,
        }
    }

    /// 尝试放入物品，返回实际放入数量
    ///
    /// 空槽直接收下（至多堆叠上限）；同名堆叠补足余量；其他物品
    /// 一律收0。容量不足不报错，由返回值小于请求数量体现。
    pub fn add(&mut self, item: &T, requested: u32) -> u32 {
        if requested == 0 {
            return 0;
        }
        match &self.item {
            None => {
                let admitted = requested.min(item.max_stack());
                self.item = Some(item.clone());
                self.count = admitted;
                admitted
            }
            Some(stored) if stored.stacking_id() == item.stacking_id() => {
                // 余量按槽内物品的上限计算，目录热更新后以槽内为准
                let space = stored.max_stack().saturating_sub(self.count);
                let admitted = requested.min(space);
                self.count += admitted;
                admitted
            }
            Some(_) => 0,
        }
    }

    /// 取出至多 requested 个，返回实际取出数量
    ///
    /// 数量归零时清空物品引用：槽位回到真正的空状态，后续按名
    /// 堆叠判断不会撞上残留引用。
    pub fn remove(&mut self, requested: u32) -> u32 {
        let removed = requested.min(self.count);
        self.count -= removed;
        if self.count == 0 {
            self.item = None;
        }
        removed
    }

    /// 槽位是否为空（无物品或数量为0）
    pub fn is_empty(&self) -> bool {
        self.item.is_none() || self.count == 0
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    /// 可变访问槽内物品（目录热更新后刷新描述字段用）
    ///
    /// 属于绕过通知的直接修改路径，调用方改完后负责调用
    /// `force_update` 补发刷新通知。
    pub fn item_mut(&mut self) -> Option<&mut T> {
        self.item.as_mut()
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl<T: ItemTrait> Default for InventorySlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 库存（固定槽位数，槽位顺序即显示顺序）
#[derive(Debug)]
pub struct Inventory<T: ItemTrait> {
    slots: Vec<InventorySlot<T>>,
    capacity: usize,
    notifier: ChangeNotifier<InventoryEvent>,
}

impl<T: ItemTrait> Inventory<T> {
    /// 创建库存并预建全部空槽
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| InventorySlot::new()).collect(),
            capacity,
            notifier: ChangeNotifier::new(),
        }
    }

    /// 放入物品（两段式），溢出交给世界掉落协作方
    ///
    /// 第一段补足既有同名堆叠，第二段按顺序占用空槽；仍有剩余时
    /// 全部落地。返回值是"没有剩余即成功"的谓词，落地分支把剩余
    /// 清零，因此接入掉落协作方后恒为真。这是刻意保留的策略，实
    /// 际入包量与落地量由事件载荷携带。每次调用只发一次通知。
    pub fn add_item(&mut self, item: &T, count: u32, ground: &mut dyn WorldDrop<T>) -> bool {
        let (stored, dropped) = self.place(item, count, ground);
        self.notifier.notify(&InventoryEvent::Added {
            name: item.display_name(),
            stored,
            dropped,
        });
        stored + dropped == count
    }

    /// 按实例身份移除至多 count 个，返回实际移除数量
    ///
    /// 身份匹配使用 InstanceId 而非名称，只影响持有同一逻辑实例的
    /// 槽位。无论触及多少槽位，每次调用只发一次通知。
    pub fn remove_item(&mut self, item: &T, count: u32) -> u32 {
        let mut removed = 0;
        for slot in &mut self.slots {
            if removed == count {
                break;
            }
            let same = slot
                .item()
                .is_some_and(|stored| stored.instance_id() == item.instance_id());
            if same {
                removed += slot.remove(count - removed);
            }
        }
        self.notifier.notify(&InventoryEvent::Removed {
            name: item.display_name(),
            count: removed,
        });
        removed
    }

    /// 整理指定分类：取出全部 (物品, 数量) 对后按原顺序重新放入
    ///
    /// 用于目录堆叠规则变更后的重新合并。总量保持不变（重新放入
    /// 时的溢出落地除外），结束时只发一次通知。
    pub fn reorganize(&mut self, category: ItemCategory, ground: &mut dyn WorldDrop<T>) {
        let mut pulled: Vec<(T, u32)> = Vec::new();
        for slot in &mut self.slots {
            let matched = slot
                .item()
                .is_some_and(|stored| stored.category() == category);
            if !matched {
                continue;
            }
            if let Some(item) = slot.item().cloned() {
                let quantity = slot.count();
                slot.remove(quantity);
                pulled.push((item, quantity));
            }
        }
        for (item, quantity) in &pulled {
            self.place(item, *quantity, ground);
        }
        self.notifier.notify(&InventoryEvent::Reorganized { category });
    }

    /// 不改动状态，仅触发一次刷新通知
    ///
    /// 外部通过 slots_mut 直接改动槽位会绕过通知，改动方必须随后
    /// 调用本方法让视图重新同步。
    pub fn force_update(&mut self) {
        self.notifier.notify(&InventoryEvent::Refreshed);
    }

    /// 槽位只读视图（顺序即显示顺序）
    pub fn slots(&self) -> &[InventorySlot<T>] {
        &self.slots
    }

    /// 槽位可写视图；绕过通知，改动后必须调用 force_update
    pub fn slots_mut(&mut self) -> &mut [InventorySlot<T>] {
        &mut self.slots
    }

    /// 非空槽位的 (物品, 数量) 列表（供UI渲染）
    pub fn items(&self) -> Vec<(&T, u32)> {
        self.slots
            .iter()
            .filter(|slot| !slot.is_empty())
            .filter_map(|slot| slot.item().map(|item| (item, slot.count())))
            .collect()
    }

    /// 与给定物品同名堆叠的总数量
    pub fn total_of(&self, item: &T) -> u32 {
        self.slots
            .iter()
            .filter(|slot| {
                slot.item()
                    .is_some_and(|stored| stored.stacking_id() == item.stacking_id())
            })
            .map(|slot| slot.count())
            .sum()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 订阅背包变更通知，登记顺序即派发顺序
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&InventoryEvent) + 'static,
    {
        self.notifier.subscribe(listener)
    }

    /// 退订通知
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// 两段式放入，返回 (入槽数量, 落地数量)；不触发通知
    fn place(&mut self, item: &T, count: u32, ground: &mut dyn WorldDrop<T>) -> (u32, u32) {
        let mut remaining = count;
        // 不可堆叠物品跳过合并段
        if item.is_stackable() {
            remaining = self.top_up_existing(item, remaining);
        }
        if remaining > 0 {
            remaining = self.fill_empty(item, remaining);
        }
        let mut dropped = 0;
        if remaining > 0 {
            ground.drop_on_ground(item.clone(), remaining);
            dropped = remaining;
        }
        (count - dropped, dropped)
    }

    /// 第一段：按槽位顺序补足既有同名堆叠，返回剩余数量
    fn top_up_existing(&mut self, item: &T, mut remaining: u32) -> u32 {
        for slot in &mut self.slots {
            if remaining == 0 {
                break;
            }
            let same = slot
                .item()
                .is_some_and(|stored| stored.stacking_id() == item.stacking_id());
            if same {
                remaining -= slot.add(item, remaining);
            }
        }
        remaining
    }

    /// 第二段：按槽位顺序占用空槽，返回剩余数量
    fn fill_empty(&mut self, item: &T, mut remaining: u32) -> u32 {
        for slot in &mut self.slots {
            if remaining == 0 {
                break;
            }
            if slot.is_empty() {
                remaining -= slot.add(item, remaining);
            }
        }
        remaining
    }
}
