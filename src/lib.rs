//src/lib.rs
//! satchel：槽位制背包与装备引擎。
//!
//! 分层结构：`items` 定义目录、工厂与物品实例，`bag` 提供背包与
//! 装备栏的存储引擎，本 crate 在外层补上角色、地面世界模型与把
//! 一切装配起来的游戏会话。

pub mod character;
pub mod game;
pub mod spawner;
pub mod world;

// 重新导出主要类型
pub use self::{
    character::Character,
    game::{ActionResult, GameSession},
    spawner::ItemSpawner,
    world::{Ground, Pickup},
};
