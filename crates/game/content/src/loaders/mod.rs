//! Content loaders for reading game data from files.
//!
//! Item catalogs and starting inventories are RON, the game configuration is
//! TOML. All loaders deserialize straight into `game-core` types.

pub mod config;
pub mod factory;
pub mod inventory;
pub mod item;

pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory};
pub use inventory::{InventoryLoader, InventorySpec};
pub use item::ItemLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
