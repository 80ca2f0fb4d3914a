//src/game.rs
//! 游戏会话：把角色、背包、装备、生成器与地面装配起来的聚合根。
//!
//! 组件之间没有全局单例，协作对象全部由会话显式持有；需要掉落
//! 协作的操作把地面以 `&mut` 参数传入背包，而不是存引用。

use bag::{Equipment, Inventory, WorldDrop};
use items::{Item, ItemCategory, ItemFactory, ItemTrait, UseOutcome};

use crate::character::Character;
use crate::spawner::ItemSpawner;
use crate::world::Ground;

/// 会话操作的结果（面向界面的成功标志与消息文本）
#[derive(Clone, Debug, PartialEq)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// 游戏会话
#[derive(Debug)]
pub struct GameSession {
    character: Character,
    inventory: Inventory<Item>,
    equipment: Equipment<Item>,
    spawner: ItemSpawner,
    ground: Ground,
}

impl GameSession {
    /// 创建会话；背包容量在此定死，掉落点对齐角色初始位置
    pub fn new(name: &str, factory: ItemFactory, capacity: usize) -> Self {
        let character = Character::new(name);
        let mut ground = Ground::new();
        ground.set_drop_point(character.x, character.y);
        Self {
            character,
            inventory: Inventory::new(capacity),
            equipment: Equipment::new(),
            spawner: ItemSpawner::new(factory),
            ground,
        }
    }

    /// 移动角色并同步地面掉落点
    pub fn move_character(&mut self, x: i32, y: i32) {
        self.character.move_to(x, y);
        self.ground.set_drop_point(x, y);
    }

    /// 在角色脚下生成一个拾取物
    pub fn spawn_drop(&mut self, category: ItemCategory, quantity: u32) -> ActionResult {
        let (x, y) = (self.character.x, self.character.y);
        match self.spawner.spawn(category, quantity, x, y) {
            Some(pickup) => {
                let message = format!(
                    "在 ({}, {}) 生成了 {} x{}",
                    x, y, pickup.item.name, pickup.quantity
                );
                self.ground.place(pickup);
                ActionResult::ok(message)
            }
            None => ActionResult::fail(format!("分类 {} 没有可生成的物品", category)),
        }
    }

    /// 拾取地面物品
    ///
    /// 背包放不下的部分由放入逻辑重新落地，拾取动作本身总会成交，
    /// 所以两种结局都算成功。
    pub fn pickup(&mut self, index: usize) -> ActionResult {
        let Some(pickup) = self.ground.take(index) else {
            return ActionResult::fail("没有这个拾取物");
        };
        let all_stored = self
            .inventory
            .add_item(&pickup.item, pickup.quantity, &mut self.ground);
        if all_stored {
            ActionResult::ok(format!("拾取了 {} x{}", pickup.item.name, pickup.quantity))
        } else {
            ActionResult::ok(format!("拾取了 {}，放不下的部分留在了地上", pickup.item.name))
        }
    }

    /// 使用槽位上的物品
    ///
    /// 结果由物品的使用行为报告：消耗型扣减1个，装备型转入装备
    /// 流程，无效果则原样保留。
    pub fn use_slot(&mut self, index: usize) -> ActionResult {
        let Some(slot) = self.inventory.slots().get(index) else {
            return ActionResult::fail("槽位下标越界");
        };
        let Some(item) = slot.item().cloned() else {
            return ActionResult::fail("槽位是空的");
        };
        let before = self.character.health;
        match item.use_on(&mut self.character) {
            UseOutcome::Consumed => {
                self.inventory.remove_item(&item, 1);
                let healed = self.character.health - before;
                ActionResult::ok(format!("使用了 {}，恢复了 {} 点生命", item.name, healed))
            }
            UseOutcome::RequestEquip => self.equip_slot(index),
            UseOutcome::NoEffect => ActionResult::fail(format!("{} 没有任何效果", item.name)),
        }
    }

    /// 把槽位上的物品装进装备栏
    ///
    /// 装备成功后从来源槽位扣减1个；被替换的旧装备由装备栏送回
    /// 背包。分类不符时双方都不动。
    pub fn equip_slot(&mut self, index: usize) -> ActionResult {
        let Some(slot) = self.inventory.slots().get(index) else {
            return ActionResult::fail("槽位下标越界");
        };
        let Some(item) = slot.item().cloned() else {
            return ActionResult::fail("槽位是空的");
        };
        if self
            .equipment
            .equip_item(&item, &mut self.inventory, &mut self.ground)
        {
            self.inventory.remove_item(&item, 1);
            ActionResult::ok(format!("装备了 {}", item.name))
        } else {
            ActionResult::fail(format!("无法装备 {}", item.name))
        }
    }

    /// 卸下某分类的装备并放回背包
    pub fn unequip(&mut self, category: ItemCategory) -> ActionResult {
        match self.equipment.unequip_item(category) {
            Some(item) => {
                self.inventory.add_item(&item, 1, &mut self.ground);
                ActionResult::ok(format!("卸下了 {}", item.name))
            }
            None => ActionResult::fail("没有可卸下的装备"),
        }
    }

    /// 槽位间拖动：移入空槽、同名合并（装满为止）或互换
    ///
    /// 走槽位直改路径，结束时统一补发一次刷新通知。
    pub fn move_stack(&mut self, from: usize, to: usize) -> ActionResult {
        let capacity = self.inventory.capacity();
        if from >= capacity || to >= capacity {
            return ActionResult::fail("槽位下标越界");
        }
        if from == to {
            return ActionResult::fail("起点与终点是同一槽位");
        }
        let slots = self.inventory.slots_mut();
        let Some(moving) = slots[from].item().cloned() else {
            return ActionResult::fail("起始槽位是空的");
        };
        let count = slots[from].count();

        let mergeable = slots[to].is_empty()
            || slots[to]
                .item()
                .is_some_and(|stored| stored.stacking_id() == moving.stacking_id());
        let result = if mergeable {
            let moved = slots[to].add(&moving, count);
            slots[from].remove(moved);
            if moved == 0 {
                ActionResult::fail("目标槽位已满")
            } else {
                ActionResult::ok(format!("移动了 {} x{}", moving.name, moved))
            }
        } else {
            slots.swap(from, to);
            ActionResult::ok("交换了两个槽位的物品")
        };
        self.inventory.force_update();
        result
    }

    /// 从槽位丢弃至多 count 个到地面
    pub fn discard_slot(&mut self, index: usize, count: u32) -> ActionResult {
        if count == 0 {
            return ActionResult::fail("丢弃数量为 0");
        }
        let Some(slot) = self.inventory.slots_mut().get_mut(index) else {
            return ActionResult::fail("槽位下标越界");
        };
        let Some(item) = slot.item().cloned() else {
            return ActionResult::fail("槽位是空的");
        };
        let removed = slot.remove(count);
        let message = format!("丢弃了 {} x{}", item.name, removed);
        self.ground.drop_on_ground(item, removed);
        self.inventory.force_update();
        ActionResult::ok(message)
    }

    /// 整理某分类的堆叠
    pub fn reorganize(&mut self, category: ItemCategory) -> ActionResult {
        self.inventory.reorganize(category, &mut self.ground);
        ActionResult::ok(format!("整理了 {} 类物品", category))
    }

    /// 目录条目变更后同步所有存活实例
    ///
    /// 背包槽、装备槽、地面拾取物逐一从当前条目刷新描述字段，随
    /// 后整理该分类，让堆叠在新上限下重新合并。
    pub fn apply_catalog_update(&mut self, category: ItemCategory) -> ActionResult {
        let Some(entry) = self.spawner.factory().entry(category).cloned() else {
            return ActionResult::fail(format!("分类 {} 没有目录条目", category));
        };
        for slot in self.inventory.slots_mut() {
            if let Some(item) = slot.item_mut() {
                if item.category == category {
                    item.refresh_from(&entry);
                }
            }
        }
        if let Some(item) = self
            .equipment
            .slot_mut(category)
            .and_then(|slot| slot.item_mut())
        {
            item.refresh_from(&entry);
        }
        for pickup in self.ground.pickups_mut() {
            if pickup.item.category == category {
                pickup.item.refresh_from(&entry);
            }
        }
        self.inventory.reorganize(category, &mut self.ground);
        ActionResult::ok(format!("{} 的目录变更已同步", category))
    }

    // ===== 只读与订阅入口 =====

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn inventory(&self) -> &Inventory<Item> {
        &self.inventory
    }

    /// 可变背包入口（订阅通知、直接操作槽位）
    pub fn inventory_mut(&mut self) -> &mut Inventory<Item> {
        &mut self.inventory
    }

    pub fn equipment(&self) -> &Equipment<Item> {
        &self.equipment
    }

    /// 可变装备栏入口（订阅通知）
    pub fn equipment_mut(&mut self) -> &mut Equipment<Item> {
        &mut self.equipment
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    /// 可变工厂入口（运行期重新配置目录条目）
    pub fn factory_mut(&mut self) -> &mut ItemFactory {
        self.spawner.factory_mut()
    }
}
