//src/main.rs
//! 演示程序：走一遍拾取、使用、装备、丢弃与目录热更新流程。

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use items::{CatalogFile, ItemCategory, ItemFactory};
use satchel::{ActionResult, GameSession};

// 内嵌演示目录；重复分类的条目用于展示先注册者生效的策略
const DEMO_CATALOG: &str = r#"{
  "entries": [
    {
      "name": "回复药水",
      "icon": "icons/potion_red",
      "category": "Potion",
      "max_stack": 15,
      "world_prefab": "prefabs/potion",
      "use_strategy": { "Potion": { "heal": 20 } }
    },
    {
      "name": "力量药水",
      "icon": "icons/potion_blue",
      "category": "Potion",
      "max_stack": 15,
      "use_strategy": { "Potion": { "heal": 5 } }
    },
    {
      "name": "木剑",
      "icon": "icons/sword_wood",
      "category": "Weapon",
      "stackable": false,
      "world_prefab": "prefabs/sword",
      "use_strategy": "Weapon"
    },
    {
      "name": "皮甲",
      "icon": "icons/armor_leather",
      "category": "Armor",
      "stackable": false,
      "use_strategy": "Armor"
    },
    {
      "name": "金币",
      "icon": "icons/coin",
      "category": "Coin",
      "max_stack": 99
    }
  ]
}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "satchel=info,bag=info".into()),
        )
        .with_target(false)
        .init();

    let catalog = CatalogFile::from_json(DEMO_CATALOG).context("演示目录解析失败")?;
    let factory = ItemFactory::from_catalog(catalog);
    let mut session = GameSession::new("冒险者", factory, 6);

    // 界面侧的订阅：这里仅把事件写进日志
    session.inventory_mut().subscribe(|event| {
        tracing::info!("背包变更: {:?}", event);
    });
    session.equipment_mut().subscribe(|event| {
        tracing::info!("装备变更: {:?}", event);
    });

    // 备货：药水、武器、护甲、一堆金币
    report(session.spawn_drop(ItemCategory::Potion, 12));
    report(session.pickup(0));
    report(session.spawn_drop(ItemCategory::Weapon, 1));
    report(session.pickup(0));
    report(session.spawn_drop(ItemCategory::Armor, 1));
    report(session.pickup(0));
    report(session.spawn_drop(ItemCategory::Coin, 30));
    report(session.pickup(0));

    // 使用与装备：药水直接消耗，武器经由使用请求转入装备流程
    report(session.use_slot(0));
    report(session.use_slot(1));
    report(session.equip_slot(2));

    // 第二把木剑：装备时旧剑回到背包
    report(session.spawn_drop(ItemCategory::Weapon, 1));
    report(session.pickup(0));
    report(session.equip_slot(1));
    report(session.unequip(ItemCategory::Armor));

    // 丢弃与拖动
    report(session.discard_slot(0, 3));
    report(session.move_stack(0, 4));

    // 目录热更新：药水上限降到5，存量堆叠按新上限重新整理
    session.factory_mut().reconfigure_max_stack(ItemCategory::Potion, 5);
    report(session.apply_catalog_update(ItemCategory::Potion));

    // 换个位置再生成，掉落点跟着角色走
    session.move_character(3, 7);
    report(session.spawn_drop(ItemCategory::Potion, 2));

    print_summary(&session);
    Ok(())
}

fn report(result: ActionResult) {
    let tag = if result.success { "成功" } else { "失败" };
    println!("[{tag}] {}", result.message);
}

fn print_summary(session: &GameSession) {
    let hero = session.character();
    println!();
    println!(
        "🎒 {}：{}/{} 生命，位于 ({}, {})",
        hero.name, hero.health, hero.max_health, hero.x, hero.y
    );

    println!("背包：");
    for (index, slot) in session.inventory().slots().iter().enumerate() {
        match slot.item() {
            Some(item) => println!("  [{index}] {} x{}", item, slot.count()),
            None => println!("  [{index}] （空）"),
        }
    }

    println!("装备：");
    for slot in session.equipment().slots() {
        match slot.item() {
            Some(item) => println!("  {}：{}", slot.category(), item),
            None => println!("  {}：（空）", slot.category()),
        }
    }

    println!("地面：");
    for pickup in session.ground().pickups() {
        println!(
            "  {} x{} 位于 ({}, {})",
            pickup.item, pickup.quantity, pickup.x, pickup.y
        );
    }
}
