// tests/helpers/mod.rs
#![allow(dead_code)]

//! Shared catalog and factory builders for integration tests.
//!
//! Every test mints items through a real `ItemFactory` so instance
//! identities behave exactly as they do in the game session.

use items::{CatalogEntry, ItemCategory, ItemFactory, UseStrategy};

/// Stackable healing potion, 15 per slot, restores 20 health.
pub fn potion_entry() -> CatalogEntry {
    CatalogEntry {
        name: "回复药水".to_string(),
        icon: "icons/potion_red".to_string(),
        category: ItemCategory::Potion,
        max_stack: 15,
        stackable: true,
        world_prefab: "prefabs/potion".to_string(),
        use_strategy: Some(UseStrategy::Potion { heal: 20 }),
    }
}

/// Non-stackable weapon that requests equipping when used.
pub fn weapon_entry() -> CatalogEntry {
    CatalogEntry {
        name: "木剑".to_string(),
        icon: "icons/sword_wood".to_string(),
        category: ItemCategory::Weapon,
        max_stack: 1,
        stackable: false,
        world_prefab: "prefabs/sword".to_string(),
        use_strategy: Some(UseStrategy::Weapon),
    }
}

/// Non-stackable armor piece.
pub fn armor_entry() -> CatalogEntry {
    CatalogEntry {
        name: "皮甲".to_string(),
        icon: "icons/armor_leather".to_string(),
        category: ItemCategory::Armor,
        max_stack: 1,
        stackable: false,
        world_prefab: "prefabs/armor".to_string(),
        use_strategy: Some(UseStrategy::Armor),
    }
}

/// Item with no use strategy bound, for no-effect paths.
pub fn coin_entry() -> CatalogEntry {
    CatalogEntry {
        name: "金币".to_string(),
        icon: "icons/coin".to_string(),
        category: ItemCategory::Coin,
        max_stack: 99,
        stackable: true,
        world_prefab: "prefabs/coin".to_string(),
        use_strategy: None,
    }
}

/// Factory stocked with potion, weapon and armor entries.
/// Coin is deliberately left unregistered so tests can exercise
/// the missing-entry path.
pub fn demo_factory() -> ItemFactory {
    let mut factory = ItemFactory::new();
    factory.register(potion_entry());
    factory.register(weapon_entry());
    factory.register(armor_entry());
    factory
}
