//! Deterministic game logic shared by every frontend.
//!
//! `game-core` owns the screen state machine, player movement, the inventory
//! model and its layout, and the scene description drawn through a
//! [`render::Canvas`]. It never reads the clock or a device: frontends feed one
//! [`FrameInput`] per frame into [`Game::advance`] and then call
//! [`render::render_game`].
pub mod catalog;
pub mod config;
pub mod geometry;
pub mod input;
pub mod inventory;
pub mod layout;
pub mod menu;
pub mod movement;
pub mod play;
pub mod render;
pub mod screen;

pub use catalog::{CatalogError, ImageHandle, ItemCatalog, ItemDefinition, ItemId};
pub use config::{GameConfig, InventoryLayoutConfig, MenuConfig, PlayerConfig};
pub use geometry::{Point, Rect, Size};
pub use input::{ActionSet, EdgeTracker, InputAction, InputSnapshot, RawInput};
pub use inventory::{Inventory, InventoryEntry, InventoryError};
pub use layout::{CellPlacement, InventoryLayout, PanelControl};
pub use menu::{ButtonVisual, MenuScreen};
pub use movement::{Direction, MovementIntegrator, PlayerPosition};
pub use play::{PlayChanges, PlayScreen};
pub use render::{Canvas, Color, FRect, ImageTransform};
pub use screen::{FrameInput, FrameOutcome, Game, ScreenMode};
