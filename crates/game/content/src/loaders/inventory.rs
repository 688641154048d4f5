//! Starting inventory loader.

use std::path::Path;
use std::sync::Arc;

use game_core::{Inventory, InventoryEntry, ItemCatalog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Starting inventory structure for RON files.
///
/// ```ron
/// (
///     capacity: 5,
///     entries: [(item: 1001, count: 50000)],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySpec {
    pub capacity: usize,
    #[serde(default)]
    pub entries: Vec<InventoryEntry>,
}

impl InventorySpec {
    /// Resolves the spec against a catalog. Unknown item ids and a zero
    /// capacity are errors.
    pub fn build(self, catalog: Arc<ItemCatalog>) -> LoadResult<Inventory> {
        Inventory::new(catalog, self.capacity, self.entries)
            .map_err(|e| anyhow::anyhow!("Invalid starting inventory: {}", e))
    }
}

/// Loader for starting inventories from RON files.
pub struct InventoryLoader;

impl InventoryLoader {
    pub fn load(path: &Path) -> LoadResult<InventorySpec> {
        let content = read_file(path)?;
        let spec: InventorySpec = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse inventory RON: {}", e))?;

        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use game_core::ItemId;

    use super::*;
    use crate::builtin::builtin_catalog;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_and_builds_against_catalog() {
        let file = write_temp(
            r#"(
                capacity: 8,
                entries: [
                    (item: 1003, count: 2),
                    (item: 1001, count: 0),
                ],
            )"#,
        );

        let spec = InventoryLoader::load(file.path()).unwrap();
        assert_eq!(spec.capacity, 8);

        let inventory = spec.build(Arc::new(builtin_catalog().unwrap())).unwrap();
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.entry(0).unwrap().item, ItemId(1003));
        assert_eq!(inventory.entry(1).unwrap().count, 0);
    }

    #[test]
    fn entries_default_to_empty() {
        let file = write_temp("(capacity: 3)");
        let spec = InventoryLoader::load(file.path()).unwrap();
        assert!(spec.entries.is_empty());
    }

    #[test]
    fn zero_capacity_fails_to_build() {
        let file = write_temp("(capacity: 0)");
        let spec = InventoryLoader::load(file.path()).unwrap();

        let err = spec.build(Arc::new(builtin_catalog().unwrap())).unwrap_err();
        assert!(err.to_string().contains("capacity must be positive"));
    }

    #[test]
    fn unknown_item_fails_to_build() {
        let spec = InventorySpec {
            capacity: 5,
            entries: vec![InventoryEntry::new(ItemId(42), 1)],
        };
        let err = spec.build(Arc::new(builtin_catalog().unwrap())).unwrap_err();
        assert!(err.to_string().contains("42"));
    }
}
