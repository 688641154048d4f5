//! Inventory layout engine.
//!
//! Maps the layout constants, the viewport and the inventory's current page
//! to screen geometry: the panel, one cell per visible entry and the
//! hit-regions of the page and close controls. The same computation feeds
//! both the interaction router and the renderer, so a click always lands on
//! the control that is drawn.
use crate::config::InventoryLayoutConfig;
use crate::geometry::{Point, Rect, Size};
use crate::inventory::Inventory;

/// Screen placement of one visible inventory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellPlacement {
    /// Index into the inventory's entry list (not the on-page slot).
    pub index: usize,
    pub rect: Rect,
}

/// Interactive controls of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PanelControl {
    PrevPage,
    NextPage,
    Close,
}

/// Geometry of the inventory panel for one viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryLayout {
    pub panel: Rect,
    /// Top of the title text.
    pub title_y: i32,
    /// Top-left corner of the first cell.
    pub content_origin: Point,
    pub cell_size: i32,
    pub pitch: i32,
    pub items_per_row: usize,
    pub items_per_page: usize,
    /// Cells whose right edge passes this x are clipped.
    pub inner_right: i32,
    pub prev_button: Rect,
    pub next_button: Rect,
    pub close_button: Rect,
    /// Origin of the "Page p/n" and capacity readouts.
    pub info_y: i32,
}

impl InventoryLayout {
    pub fn compute(config: &InventoryLayoutConfig, viewport: Size) -> Self {
        let panel = Rect::centered_in(viewport, config.panel_width, config.panel_height);
        let title_y = panel.y + config.title_offset;
        let content_origin = Point::new(panel.x + config.margin, title_y + config.content_offset);

        let nav_y = panel.bottom() - config.nav_button_bottom_offset;
        let prev_button = Rect::new(
            panel.x + config.margin,
            nav_y,
            config.nav_button_width,
            config.nav_button_height,
        );
        let next_button = Rect::new(
            panel.right() - config.margin - config.nav_button_width,
            nav_y,
            config.nav_button_width,
            config.nav_button_height,
        );
        let close_button = Rect::new(
            panel.right() - config.close_button_size - config.close_button_offset,
            panel.y + config.close_button_offset,
            config.close_button_size,
            config.close_button_size,
        );

        Self {
            panel,
            title_y,
            content_origin,
            cell_size: config.cell_size,
            pitch: config.pitch(),
            items_per_row: config.items_per_row(),
            items_per_page: config.items_per_page(),
            inner_right: panel.right() - config.margin,
            prev_button,
            next_button,
            close_button,
            info_y: panel.bottom() - config.info_bottom_offset,
        }
    }

    /// Half-open range of entry indices that belong to `page`, bounded by `len`.
    pub fn page_range(&self, page: usize, len: usize) -> core::ops::Range<usize> {
        let start = page.saturating_mul(self.items_per_page);
        let end = start.saturating_add(self.items_per_page).min(len);
        start.min(end)..end
    }

    /// Cell rectangle for the `slot`-th position on a page, or `None` when the
    /// cell would extend past the panel's inner right boundary.
    pub fn slot_rect(&self, slot: usize) -> Option<Rect> {
        let row = (slot / self.items_per_row) as i32;
        let col = (slot % self.items_per_row) as i32;
        let rect = Rect::new(
            self.content_origin.x + col * self.pitch,
            self.content_origin.y + row * self.pitch,
            self.cell_size,
            self.cell_size,
        );
        (rect.right() <= self.inner_right).then_some(rect)
    }

    /// Cells for every entry on the inventory's current page.
    pub fn visible_cells(&self, inventory: &Inventory) -> Vec<CellPlacement> {
        let range = self.page_range(inventory.current_page(), inventory.len());
        let start = range.start;
        range
            .filter_map(|index| {
                self.slot_rect(index - start)
                    .map(|rect| CellPlacement { index, rect })
            })
            .collect()
    }

    /// Entry under the pointer, if any.
    pub fn hovered(&self, inventory: &Inventory, pointer: Point) -> Option<usize> {
        self.visible_cells(inventory)
            .into_iter()
            .find(|cell| cell.rect.contains(pointer))
            .map(|cell| cell.index)
    }

    pub fn control_rect(&self, control: PanelControl) -> Rect {
        match control {
            PanelControl::PrevPage => self.prev_button,
            PanelControl::NextPage => self.next_button,
            PanelControl::Close => self.close_button,
        }
    }

    /// Control under `pointer`. Checked in declaration order; the default
    /// geometry has no overlaps.
    pub fn control_at(&self, pointer: Point) -> Option<PanelControl> {
        use strum::IntoEnumIterator;
        PanelControl::iter().find(|control| self.control_rect(*control).contains(pointer))
    }
}
