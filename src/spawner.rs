//src/spawner.rs
//! 物品生成器：实例统一从工厂铸造后投放到世界。

use items::{ItemCategory, ItemFactory};

use crate::world::Pickup;

/// 物品生成器（持有工厂，是会话中唯一的实例铸造入口）
#[derive(Debug)]
pub struct ItemSpawner {
    factory: ItemFactory,
}

impl ItemSpawner {
    pub fn new(factory: ItemFactory) -> Self {
        Self { factory }
    }

    /// 在指定位置生成拾取物
    ///
    /// 分类没有注册目录条目时返回 None（工厂已记录警告），调用方
    /// 把它当作"无物可生成"处理，不是致命错误。
    pub fn spawn(
        &mut self,
        category: ItemCategory,
        quantity: u32,
        x: i32,
        y: i32,
    ) -> Option<Pickup> {
        let item = self.factory.create_item(category)?;
        Some(Pickup {
            item,
            quantity,
            x,
            y,
        })
    }

    pub fn factory(&self) -> &ItemFactory {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut ItemFactory {
        &mut self.factory
    }
}
