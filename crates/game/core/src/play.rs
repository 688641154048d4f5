//! Play screen: movement, inventory toggle and inventory interaction.
use bitflags::bitflags;

use crate::config::{GameConfig, InventoryLayoutConfig};
use crate::input::InputAction;
use crate::inventory::Inventory;
use crate::layout::{InventoryLayout, PanelControl};
use crate::movement::{MovementIntegrator, PlayerPosition};
use crate::screen::FrameInput;

bitflags! {
    /// What a single play update changed. Consumers use it for logging and
    /// redraw decisions; the screen itself never reads it back.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PlayChanges: u8 {
        const MOVED            = 1 << 0;
        const INVENTORY_OPENED = 1 << 1;
        const INVENTORY_CLOSED = 1 << 2;
        const SELECTION        = 1 << 3;
        const PAGE             = 1 << 4;
        const HOVER            = 1 << 5;
    }
}

#[derive(Clone, Debug)]
pub struct PlayScreen {
    movement: MovementIntegrator,
    inventory: Inventory,
    inventory_open: bool,
    layout_config: InventoryLayoutConfig,
    grid_size: i32,
    hovered: Option<usize>,
}

impl PlayScreen {
    pub fn new(config: &GameConfig, inventory: Inventory) -> Self {
        Self {
            movement: MovementIntegrator::new(&config.player, config.viewport),
            inventory,
            inventory_open: false,
            layout_config: config.inventory.clone(),
            grid_size: config.grid_size,
            hovered: None,
        }
    }

    /// Runs the play-mode slice of the interaction router for one frame.
    ///
    /// Order: movement from held keys, the toggle edge, keyboard selection
    /// (when open after the toggle), then pointer controls. Pointer controls
    /// only react when the panel was open before this frame's toggle, so a
    /// click in the same frame as the opening key press cannot close it.
    pub fn update(&mut self, frame: &FrameInput) -> PlayChanges {
        let input = &frame.input;
        let mut changes = PlayChanges::empty();

        self.movement.set_viewport(frame.viewport);
        let before = self.movement.position();
        for (action, direction) in InputAction::MOVEMENT {
            if input.is_held(action) {
                self.movement.step(direction, frame.elapsed_seconds);
            }
        }
        if self.movement.position() != before {
            changes |= PlayChanges::MOVED;
        }

        let was_open = self.inventory_open;
        if input.is_just_pressed(InputAction::ToggleInventory) {
            self.inventory_open = !self.inventory_open;
            changes |= if self.inventory_open {
                PlayChanges::INVENTORY_OPENED
            } else {
                PlayChanges::INVENTORY_CLOSED
            };
        }

        if !self.inventory_open {
            if self.hovered.take().is_some() {
                changes |= PlayChanges::HOVER;
            }
            return changes;
        }

        if input.is_just_pressed(InputAction::SelectPrev) && self.inventory.select_prev() {
            changes |= PlayChanges::SELECTION;
        }
        if input.is_just_pressed(InputAction::SelectNext) && self.inventory.select_next() {
            changes |= PlayChanges::SELECTION;
        }

        let layout = self.layout(frame);
        self.inventory.clamp_page(layout.items_per_page);

        if was_open && input.pointer_just_pressed {
            match layout.control_at(input.pointer) {
                Some(PanelControl::PrevPage) => {
                    if self.inventory.prev_page() {
                        changes |= PlayChanges::PAGE;
                    }
                }
                Some(PanelControl::NextPage) => {
                    if self.inventory.next_page(layout.items_per_page) {
                        changes |= PlayChanges::PAGE;
                    }
                }
                Some(PanelControl::Close) => {
                    self.inventory_open = false;
                    changes |= PlayChanges::INVENTORY_CLOSED;
                }
                None => {}
            }
        }

        let hovered = if self.inventory_open {
            layout.hovered(&self.inventory, input.pointer)
        } else {
            None
        };
        if hovered != self.hovered {
            self.hovered = hovered;
            changes |= PlayChanges::HOVER;
        }

        changes
    }

    fn layout(&self, frame: &FrameInput) -> InventoryLayout {
        InventoryLayout::compute(&self.layout_config, frame.viewport)
    }

    /// Layout for the viewport the player is currently clamped to.
    pub fn current_layout(&self) -> InventoryLayout {
        InventoryLayout::compute(&self.layout_config, self.movement.viewport())
    }

    pub fn player_position(&self) -> PlayerPosition {
        self.movement.position()
    }

    pub fn player_size(&self) -> i32 {
        self.movement.entity_size()
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    pub fn is_inventory_open(&self) -> bool {
        self.inventory_open
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Entry whose cell is under the pointer; drives the name tooltip only.
    pub fn hovered_entry(&self) -> Option<usize> {
        self.hovered
    }
}
