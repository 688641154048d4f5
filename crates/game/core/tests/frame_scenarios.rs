use std::sync::Arc;

use game_core::{
    ActionSet, EdgeTracker, FrameInput, FrameOutcome, Game, GameConfig, ImageHandle, InputAction,
    Inventory, InventoryEntry, InventoryLayout, ItemCatalog, ItemDefinition, ItemId, PlayChanges,
    Point, RawInput, Rect, ScreenMode, Size,
};

const VIEWPORT: Size = Size::new(800, 600);
const DT: f64 = 1.0 / 60.0;

fn catalog() -> Arc<ItemCatalog> {
    Arc::new(
        ItemCatalog::new([
            ItemDefinition::new(ItemId(1001), "Gold", ImageHandle(1001)),
            ItemDefinition::new(ItemId(1002), "SwordXinShou", ImageHandle(1002)),
            ItemDefinition::new(ItemId(1003), "Sword1", ImageHandle(1003)),
        ])
        .unwrap(),
    )
}

fn inventory(len: usize) -> Inventory {
    let entries = (0..len)
        .map(|i| InventoryEntry::new(ItemId(1001 + (i % 3) as u32), 1 + i as u64))
        .collect();
    Inventory::new(catalog(), len.max(5), entries).unwrap()
}

/// Drives a [`Game`] from raw device samples, the way a frontend does.
struct Harness {
    game: Game,
    edges: EdgeTracker,
    pointer: Point,
}

impl Harness {
    fn new(len: usize) -> Self {
        Self {
            game: Game::new(&GameConfig::default(), inventory(len)),
            edges: EdgeTracker::new(),
            pointer: Point::ORIGIN,
        }
    }

    fn frame(&mut self, raw: RawInput) -> FrameOutcome {
        self.pointer = raw.pointer;
        let input = self.edges.sample(raw);
        self.game.advance(&FrameInput::new(input, DT, VIEWPORT))
    }

    fn idle(&mut self) -> FrameOutcome {
        self.frame(RawInput {
            pointer: self.pointer,
            ..RawInput::default()
        })
    }

    fn keys(&mut self, down: ActionSet) -> FrameOutcome {
        self.frame(RawInput {
            pointer: self.pointer,
            down,
            ..RawInput::default()
        })
    }

    fn tap(&mut self, action: InputAction) -> FrameOutcome {
        let outcome = self.keys(action.flag());
        self.idle();
        outcome
    }

    fn click(&mut self, at: Point) -> FrameOutcome {
        let outcome = self.frame(RawInput {
            pointer: at,
            pointer_down: true,
            ..RawInput::default()
        });
        self.idle();
        outcome
    }

    fn enter_play(&mut self) {
        self.click(Point::new(300, 220));
        assert_eq!(self.game.mode(), ScreenMode::Play);
    }

    fn layout(&self) -> InventoryLayout {
        self.game.play().current_layout()
    }
}

fn center(rect: Rect) -> Point {
    Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
}

#[test]
fn reference_layout_has_four_columns_and_twenty_per_page() {
    let mut h = Harness::new(0);
    h.enter_play();
    let layout = h.layout();
    assert_eq!(layout.items_per_row, 4);
    assert_eq!(layout.items_per_page, 20);
}

#[test]
fn selection_cycles_through_three_entries() {
    let mut h = Harness::new(3);
    h.enter_play();
    h.tap(InputAction::ToggleInventory);

    let mut seen = Vec::new();
    for _ in 0..3 {
        h.tap(InputAction::SelectNext);
        seen.push(h.game.play().inventory().selected_index());
    }
    assert_eq!(seen, [Some(1), Some(2), Some(0)]);

    h.tap(InputAction::SelectPrev);
    assert_eq!(h.game.play().inventory().selected_index(), Some(2));
}

#[test]
fn empty_inventory_keeps_page_zero() {
    let mut h = Harness::new(0);
    h.enter_play();
    h.tap(InputAction::ToggleInventory);

    let layout = h.layout();
    h.click(center(layout.next_button));
    h.click(center(layout.prev_button));
    h.tap(InputAction::SelectNext);

    let inventory = h.game.play().inventory();
    assert_eq!(inventory.current_page(), 0);
    assert_eq!(inventory.selected_index(), None);
    assert_eq!(inventory.total_pages(layout.items_per_page), 1);
}

#[test]
fn click_on_opening_frame_does_not_close_but_next_click_does() {
    let mut h = Harness::new(3);
    h.enter_play();
    let close = center(h.layout().close_button);

    let outcome = h.frame(RawInput {
        pointer: close,
        pointer_down: true,
        down: InputAction::ToggleInventory.flag(),
        ..RawInput::default()
    });
    h.idle();
    assert_eq!(outcome, FrameOutcome::Play(PlayChanges::INVENTORY_OPENED));
    assert!(h.game.play().is_inventory_open());

    let outcome = h.click(close);
    assert!(matches!(outcome, FrameOutcome::Play(c) if c.contains(PlayChanges::INVENTORY_CLOSED)));
    assert!(!h.game.play().is_inventory_open());
}

#[test]
fn next_page_is_a_no_op_on_the_last_page() {
    let mut h = Harness::new(25);
    h.enter_play();
    h.tap(InputAction::ToggleInventory);
    let next = center(h.layout().next_button);

    h.click(next);
    assert_eq!(h.game.play().inventory().current_page(), 1);
    let outcome = h.click(next);
    assert_eq!(h.game.play().inventory().current_page(), 1);
    assert!(matches!(outcome, FrameOutcome::Play(c) if !c.contains(PlayChanges::PAGE)));
}

#[test]
fn menu_activation_is_permanent() {
    let mut h = Harness::new(1);
    assert_eq!(h.idle(), FrameOutcome::Menu);
    assert_eq!(h.click(Point::new(220, 200)), FrameOutcome::EnteredPlay);

    for _ in 0..10 {
        h.click(Point::new(5, 5));
        h.tap(InputAction::ToggleInventory);
        assert_eq!(h.game.mode(), ScreenMode::Play);
    }
}

#[test]
fn held_movement_stays_inside_viewport() {
    let mut h = Harness::new(0);
    h.enter_play();

    let down_right = InputAction::MoveRight.flag() | InputAction::MoveDown.flag();
    for _ in 0..2_000 {
        h.keys(down_right);
    }
    let pos = h.game.play().player_position();
    assert_eq!(pos.x, f64::from(800 - 32));
    assert_eq!(pos.y, f64::from(600 - 32));

    for _ in 0..2_000 {
        h.keys(InputAction::MoveLeft.flag() | InputAction::MoveUp.flag());
    }
    let pos = h.game.play().player_position();
    assert_eq!((pos.x, pos.y), (0.0, 0.0));
}

#[test]
fn held_toggle_fires_once() {
    let mut h = Harness::new(2);
    h.enter_play();
    for _ in 0..5 {
        h.keys(InputAction::ToggleInventory.flag());
    }
    assert!(h.game.play().is_inventory_open());
}
