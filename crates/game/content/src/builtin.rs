//! Content compiled into the binary, used when no data directory is given.
use std::sync::Arc;

use game_core::{
    CatalogError, GameConfig, ImageHandle, Inventory, InventoryEntry, InventoryError, ItemCatalog,
    ItemDefinition, ItemId,
};

pub const GOLD: ItemId = ItemId(1001);
pub const SWORD_XIN_SHOU: ItemId = ItemId(1002);
pub const SWORD_1: ItemId = ItemId(1003);

/// Item images share their item's numeric id.
const fn icon(id: ItemId) -> ImageHandle {
    ImageHandle(id.0)
}

pub fn builtin_definitions() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition::new(GOLD, "Gold", icon(GOLD)),
        ItemDefinition::new(SWORD_XIN_SHOU, "SwordXinShou", icon(SWORD_XIN_SHOU)),
        ItemDefinition::new(SWORD_1, "Sword1", icon(SWORD_1)),
    ]
}

pub fn builtin_catalog() -> Result<ItemCatalog, CatalogError> {
    ItemCatalog::new(builtin_definitions())
}

pub fn starting_entries() -> Vec<InventoryEntry> {
    vec![
        InventoryEntry::new(GOLD, 50_000),
        InventoryEntry::new(SWORD_XIN_SHOU, 1_000),
        InventoryEntry::new(SWORD_1, 1),
    ]
}

/// The starting inventory: capacity 5 holding gold and two swords.
pub fn starting_inventory(catalog: Arc<ItemCatalog>) -> Result<Inventory, InventoryError> {
    Inventory::new(
        catalog,
        GameConfig::DEFAULT_INVENTORY_CAPACITY,
        starting_entries(),
    )
}
