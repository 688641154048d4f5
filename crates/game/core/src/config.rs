//! Game configuration constants and tunable parameters.
//!
//! Every geometric constant used by the layout engine, the menu and the
//! movement integrator lives here so the same numbers are used wherever a
//! value (for example `items_per_page`) has to be recomputed.
use crate::geometry::{Rect, Size};

/// Top-level tunables for one game instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Logical viewport; independent of the real window or terminal size.
    pub viewport: Size,
    pub player: PlayerConfig,
    /// Spacing of the background tile grid.
    pub grid_size: i32,
    pub menu: MenuConfig,
    pub inventory: InventoryLayoutConfig,
}

impl GameConfig {
    // ===== reference constants =====
    pub const VIEWPORT_WIDTH: i32 = 800;
    pub const VIEWPORT_HEIGHT: i32 = 600;
    pub const GRID_SIZE: i32 = 32;
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 5;

    pub fn new() -> Self {
        Self {
            viewport: Size::new(Self::VIEWPORT_WIDTH, Self::VIEWPORT_HEIGHT),
            player: PlayerConfig::default(),
            grid_size: Self::GRID_SIZE,
            menu: MenuConfig::default(),
            inventory: InventoryLayoutConfig::default(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Controllable entity parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    /// Square sprite size; also the amount subtracted from the clamp bounds.
    pub size: i32,
    /// Units per second.
    pub speed: f64,
    pub start_x: f64,
    pub start_y: f64,
}

impl PlayerConfig {
    pub const DEFAULT_SIZE: i32 = 32;
    pub const DEFAULT_SPEED: f64 = 96.0;
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            speed: Self::DEFAULT_SPEED,
            start_x: 0.0,
            start_y: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    pub start_button: Rect,
    pub start_label: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            start_button: Rect::new(220, 200, 200, 50),
            start_label: "START_THE_GAME".to_string(),
        }
    }
}

/// Geometry of the inventory overlay.
///
/// Offsets are relative to the panel rectangle, which is centered in the
/// viewport. `items_per_row` and `items_per_page` are derived, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventoryLayoutConfig {
    pub panel_width: i32,
    pub panel_height: i32,
    /// Horizontal inset of the item grid on both sides.
    pub margin: i32,
    pub cell_size: i32,
    pub spacing: i32,
    /// Fixed row budget per page.
    pub rows: i32,
    /// Distance from the panel top to the title baseline.
    pub title_offset: i32,
    /// Distance from the title to the first row of cells.
    pub content_offset: i32,
    pub nav_button_width: i32,
    pub nav_button_height: i32,
    /// Distance from the panel bottom to the top of the page buttons.
    pub nav_button_bottom_offset: i32,
    /// Distance from the panel bottom to the page/capacity readout line.
    pub info_bottom_offset: i32,
    pub close_button_size: i32,
    /// Inset of the close button from the panel's top-right corner.
    pub close_button_offset: i32,
}

impl Default for InventoryLayoutConfig {
    fn default() -> Self {
        Self {
            panel_width: 300,
            panel_height: 400,
            margin: 20,
            cell_size: 48,
            spacing: 15,
            rows: 5,
            title_offset: 15,
            content_offset: 40,
            nav_button_width: 60,
            nav_button_height: 20,
            nav_button_bottom_offset: 30,
            info_bottom_offset: 50,
            close_button_size: 20,
            close_button_offset: 10,
        }
    }
}

impl InventoryLayoutConfig {
    /// `floor((panel_width - 2*margin) / (cell_size + spacing))`, at least 1.
    ///
    /// The lower bound keeps pagination well defined for degenerate
    /// constants; cells that do not fit are clipped by the layout engine.
    pub fn items_per_row(&self) -> usize {
        let pitch = self.cell_size + self.spacing;
        if pitch <= 0 {
            return 1;
        }
        let usable = self.panel_width - 2 * self.margin;
        (usable / pitch).max(1) as usize
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_row() * self.rows.max(1) as usize
    }

    /// Distance between neighbouring cell origins.
    pub const fn pitch(&self) -> i32 {
        self.cell_size + self.spacing
    }
}
