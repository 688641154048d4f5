//! Per-frame input snapshot.
//!
//! Frontends sample their devices once at the start of a frame and hand the
//! result to the core as an [`InputSnapshot`]. Nothing in the core polls a
//! device, so just-pressed edges are seen exactly once per physical press.
use bitflags::bitflags;

use crate::geometry::Point;
use crate::movement::Direction;

/// Logical actions the core reacts to. Key bindings live in the frontend.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToggleInventory,
    SelectPrev,
    SelectNext,
}

impl InputAction {
    pub const MOVEMENT: [(InputAction, Direction); 4] = [
        (InputAction::MoveLeft, Direction::Left),
        (InputAction::MoveRight, Direction::Right),
        (InputAction::MoveUp, Direction::Up),
        (InputAction::MoveDown, Direction::Down),
    ];

    pub const fn flag(self) -> ActionSet {
        match self {
            InputAction::MoveUp => ActionSet::MOVE_UP,
            InputAction::MoveDown => ActionSet::MOVE_DOWN,
            InputAction::MoveLeft => ActionSet::MOVE_LEFT,
            InputAction::MoveRight => ActionSet::MOVE_RIGHT,
            InputAction::ToggleInventory => ActionSet::TOGGLE_INVENTORY,
            InputAction::SelectPrev => ActionSet::SELECT_PREV,
            InputAction::SelectNext => ActionSet::SELECT_NEXT,
        }
    }
}

bitflags! {
    /// Set of logical actions, one bit per [`InputAction`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ActionSet: u8 {
        const MOVE_UP          = 1 << 0;
        const MOVE_DOWN        = 1 << 1;
        const MOVE_LEFT        = 1 << 2;
        const MOVE_RIGHT       = 1 << 3;
        const TOGGLE_INVENTORY = 1 << 4;
        const SELECT_PREV      = 1 << 5;
        const SELECT_NEXT      = 1 << 6;
    }
}

impl From<InputAction> for ActionSet {
    fn from(action: InputAction) -> Self {
        action.flag()
    }
}

/// Instantaneous view of all inputs for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Pointer position in logical viewport coordinates.
    pub pointer: Point,
    pub pointer_held: bool,
    pub pointer_just_pressed: bool,
    pub held: ActionSet,
    pub just_pressed: ActionSet,
}

impl InputSnapshot {
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(action.flag())
    }

    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(action.flag())
    }

    // ===== builders (used by frontends and tests) =====

    #[must_use]
    pub fn with_pointer(mut self, pointer: Point) -> Self {
        self.pointer = pointer;
        self
    }

    /// Pointer pressed this frame (implies held).
    #[must_use]
    pub fn with_click(mut self) -> Self {
        self.pointer_held = true;
        self.pointer_just_pressed = true;
        self
    }

    #[must_use]
    pub fn with_held(mut self, action: InputAction) -> Self {
        self.held |= action.flag();
        self
    }

    /// Action pressed this frame (implies held).
    #[must_use]
    pub fn with_pressed(mut self, action: InputAction) -> Self {
        self.held |= action.flag();
        self.just_pressed |= action.flag();
        self
    }
}

/// Raw device state for a frame, before edge detection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawInput {
    pub pointer: Point,
    pub pointer_down: bool,
    pub down: ActionSet,
    /// Physical presses seen since the last sample. Each one is an edge,
    /// whether or not the action is still down or was already down.
    pub tapped: ActionSet,
    pub pointer_tapped: bool,
}

/// Derives just-pressed edges from consecutive raw samples.
///
/// An edge fires on the first frame an action is down after a frame where
/// it was up, or when the device reported a fresh press in between. A held
/// key never re-fires on its own.
#[derive(Clone, Debug, Default)]
pub struct EdgeTracker {
    previous: ActionSet,
    pointer_previous: bool,
}

impl EdgeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, raw: RawInput) -> InputSnapshot {
        let rising = raw.down.difference(self.previous);
        let pointer_rising = raw.pointer_down && !self.pointer_previous;

        self.previous = raw.down;
        self.pointer_previous = raw.pointer_down;

        InputSnapshot {
            pointer: raw.pointer,
            pointer_held: raw.pointer_down,
            pointer_just_pressed: pointer_rising || raw.pointer_tapped,
            held: raw.down,
            just_pressed: rising | raw.tapped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_action_has_a_distinct_flag() {
        let mut seen = ActionSet::empty();
        for action in InputAction::iter() {
            assert!(!seen.intersects(action.flag()), "{action} reuses a bit");
            seen |= action.flag();
        }
        assert_eq!(seen, ActionSet::all());
    }

    #[test]
    fn held_key_fires_edge_once() {
        let mut tracker = EdgeTracker::new();
        let raw = RawInput {
            down: ActionSet::TOGGLE_INVENTORY,
            ..RawInput::default()
        };

        let first = tracker.sample(raw);
        assert!(first.is_just_pressed(InputAction::ToggleInventory));

        let second = tracker.sample(raw);
        assert!(second.is_held(InputAction::ToggleInventory));
        assert!(!second.is_just_pressed(InputAction::ToggleInventory));

        tracker.sample(RawInput::default());
        let again = tracker.sample(raw);
        assert!(again.is_just_pressed(InputAction::ToggleInventory));
    }

    #[test]
    fn tap_between_samples_yields_single_edge() {
        let mut tracker = EdgeTracker::new();
        let snapshot = tracker.sample(RawInput {
            tapped: ActionSet::SELECT_NEXT,
            pointer_tapped: true,
            ..RawInput::default()
        });
        assert!(snapshot.is_just_pressed(InputAction::SelectNext));
        assert!(!snapshot.is_held(InputAction::SelectNext));
        assert!(snapshot.pointer_just_pressed);

        let next = tracker.sample(RawInput::default());
        assert!(!next.is_just_pressed(InputAction::SelectNext));
        assert!(!next.pointer_just_pressed);
    }

    #[test]
    fn fresh_press_while_still_down_is_an_edge() {
        let mut tracker = EdgeTracker::new();
        let pressed = RawInput {
            down: ActionSet::SELECT_NEXT,
            tapped: ActionSet::SELECT_NEXT,
            pointer_down: true,
            pointer_tapped: true,
            ..RawInput::default()
        };
        assert!(tracker.sample(pressed).is_just_pressed(InputAction::SelectNext));

        let second = tracker.sample(pressed);
        assert!(second.is_just_pressed(InputAction::SelectNext));
        assert!(second.pointer_just_pressed);
    }

    #[test]
    fn pointer_edge_requires_release() {
        let mut tracker = EdgeTracker::new();
        let down = RawInput {
            pointer_down: true,
            ..RawInput::default()
        };
        assert!(tracker.sample(down).pointer_just_pressed);
        assert!(!tracker.sample(down).pointer_just_pressed);
    }
}
