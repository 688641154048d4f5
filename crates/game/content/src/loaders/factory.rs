//! Content factory that assembles startup content from a data directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use game_core::{GameConfig, Inventory, ItemCatalog};

use crate::builtin;
use crate::loaders::{ConfigLoader, InventoryLoader, ItemLoader, LoadResult};

/// Everything the game needs at startup.
#[derive(Debug, Clone)]
pub struct Content {
    pub config: GameConfig,
    pub inventory: Inventory,
}

/// Loads game content from an optional data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── inventory.ron
/// ```
///
/// Each file is optional. A missing file falls back to the built-in content;
/// a present but invalid file is an error.
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Factory that only serves built-in content.
    pub fn builtin() -> Self {
        Self { data_dir: None }
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn existing(&self, name: &str) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(name))
            .filter(|path| path.is_file())
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.existing("config.toml") {
            Some(path) => ConfigLoader::load(&path),
            None => Ok(GameConfig::default()),
        }
    }

    /// Load item catalog from `items.ron`.
    pub fn load_catalog(&self) -> LoadResult<ItemCatalog> {
        match self.existing("items.ron") {
            Some(path) => ItemLoader::load_catalog(&path),
            None => Ok(builtin::builtin_catalog()?),
        }
    }

    /// Load the starting inventory from `inventory.ron`.
    pub fn load_inventory(&self, catalog: Arc<ItemCatalog>) -> LoadResult<Inventory> {
        match self.existing("inventory.ron") {
            Some(path) => InventoryLoader::load(&path)?.build(catalog),
            None => Ok(builtin::starting_inventory(catalog)?),
        }
    }

    pub fn load(&self) -> LoadResult<Content> {
        let config = self.load_config()?;
        let catalog = Arc::new(self.load_catalog()?);
        let inventory = self.load_inventory(catalog)?;
        Ok(Content { config, inventory })
    }
}
