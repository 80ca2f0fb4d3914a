//src/world.rs
//! 世界侧物品模型：地面拾取物与掉落点。

use bag::WorldDrop;
use items::Item;

/// 等待拾取的地面物品
#[derive(Clone, Debug, PartialEq)]
pub struct Pickup {
    pub item: Item,
    pub quantity: u32,
    pub x: i32,
    pub y: i32,
}

/// 地面：掉落物的落点与存放处
///
/// 掉落点由会话随角色移动同步，背包放不下的物品在此生成拾取物。
#[derive(Debug, Default)]
pub struct Ground {
    drop_point: (i32, i32),
    pickups: Vec<Pickup>,
}

impl Ground {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同步掉落点（通常为角色当前位置）
    pub fn set_drop_point(&mut self, x: i32, y: i32) {
        self.drop_point = (x, y);
    }

    pub fn drop_point(&self) -> (i32, i32) {
        self.drop_point
    }

    /// 放置一个拾取物
    pub fn place(&mut self, pickup: Pickup) {
        self.pickups.push(pickup);
    }

    /// 取走指定下标的拾取物；下标越界返回 None
    pub fn take(&mut self, index: usize) -> Option<Pickup> {
        (index < self.pickups.len()).then(|| self.pickups.remove(index))
    }

    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    /// 可变遍历拾取物（目录热更新后刷新描述字段用）
    pub fn pickups_mut(&mut self) -> &mut [Pickup] {
        &mut self.pickups
    }

    pub fn len(&self) -> usize {
        self.pickups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickups.is_empty()
    }
}

impl WorldDrop<Item> for Ground {
    /// 背包溢出的物品落在当前掉落点
    fn drop_on_ground(&mut self, item: Item, count: u32) {
        let (x, y) = self.drop_point;
        tracing::debug!("{} x{} 掉落在 ({}, {})", item.name, count, x, y);
        self.pickups.push(Pickup {
            item,
            quantity: count,
            x,
            y,
        });
    }
}
