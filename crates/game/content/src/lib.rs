//! Static game content and data-file loaders.
//!
//! - Built-in item catalog and starting inventory ([`builtin`])
//! - Item catalogs and starting inventories (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is handed to `game-core` once at startup and never reloaded.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{builtin_catalog, starting_inventory};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, Content, ContentFactory, InventoryLoader, InventorySpec, ItemLoader,
};
