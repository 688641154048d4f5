//! Folds crossterm events into one [`InputSnapshot`] per frame.
//!
//! Terminals that support the kitty keyboard protocol report key releases,
//! so held state is exact. Everywhere else a key counts as held until
//! `hold` has passed since its last press or auto-repeat.
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use game_core::{ActionSet, EdgeTracker, InputAction, InputSnapshot, Point, RawInput};

use super::{KeyAction, KeyMap};
use crate::presentation::canvas::ViewportMapping;

pub struct InputSampler {
    keymap: KeyMap,
    hold: Duration,
    releases_reported: bool,
    last_seen: HashMap<InputAction, Instant>,
    pressed_since_sample: ActionSet,
    pointer: Point,
    pointer_down: bool,
    pointer_pressed_since_sample: bool,
    edges: EdgeTracker,
}

impl InputSampler {
    pub fn new(keymap: KeyMap, hold: Duration, releases_reported: bool) -> Self {
        Self {
            keymap,
            hold,
            releases_reported,
            last_seen: HashMap::new(),
            pressed_since_sample: ActionSet::empty(),
            pointer: Point::ORIGIN,
            pointer_down: false,
            pointer_pressed_since_sample: false,
            edges: EdgeTracker::new(),
        }
    }

    /// Applies one terminal event. Returns [`KeyAction::Quit`] when a quit
    /// key was pressed.
    pub fn handle_event(
        &mut self,
        event: &Event,
        mapping: &ViewportMapping,
        now: Instant,
    ) -> KeyAction {
        match event {
            Event::Key(key) => {
                let action = self.keymap.translate(key);
                match (action, key.kind) {
                    (KeyAction::Quit, KeyEventKind::Press) => KeyAction::Quit,
                    (KeyAction::Game(game), KeyEventKind::Press | KeyEventKind::Repeat) => {
                        if key.kind == KeyEventKind::Press || !self.last_seen.contains_key(&game) {
                            self.pressed_since_sample |= game.flag();
                        }
                        self.last_seen.insert(game, now);
                        action
                    }
                    (KeyAction::Game(game), KeyEventKind::Release) => {
                        self.last_seen.remove(&game);
                        KeyAction::None
                    }
                    _ => KeyAction::None,
                }
            }
            Event::Mouse(mouse) => {
                self.pointer = mapping.cell_to_logical(mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        self.pointer_down = true;
                        self.pointer_pressed_since_sample = true;
                    }
                    MouseEventKind::Up(MouseButton::Left) => self.pointer_down = false,
                    _ => {}
                }
                KeyAction::None
            }
            Event::FocusLost => {
                self.last_seen.clear();
                self.pointer_down = false;
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }

    /// Produces the snapshot for the frame starting at `now`.
    pub fn sample(&mut self, now: Instant) -> InputSnapshot {
        if !self.releases_reported {
            let hold = self.hold;
            self.last_seen
                .retain(|_, seen| now.saturating_duration_since(*seen) <= hold);
        }

        let down = self
            .last_seen
            .keys()
            .fold(ActionSet::empty(), |set, action| set | action.flag());

        let raw = RawInput {
            pointer: self.pointer,
            pointer_down: self.pointer_down,
            down,
            tapped: self.pressed_since_sample,
            pointer_tapped: self.pointer_pressed_since_sample,
        };
        self.pressed_since_sample = ActionSet::empty();
        self.pointer_pressed_since_sample = false;

        self.edges.sample(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseEvent,
    };
    use game_core::Size;

    const HOLD: Duration = Duration::from_millis(150);

    fn key(ch: char, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::empty(),
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    fn mapping() -> ViewportMapping {
        ViewportMapping::new(Size::new(800, 600), 80, 30)
    }

    #[test]
    fn press_without_release_expires_after_hold() {
        let mut sampler = InputSampler::new(KeyMap::default(), HOLD, false);
        let t0 = Instant::now();
        sampler.handle_event(&key('l', KeyEventKind::Press), &mapping(), t0);

        let first = sampler.sample(t0);
        assert!(first.is_just_pressed(InputAction::MoveRight));
        assert!(first.is_held(InputAction::MoveRight));

        let second = sampler.sample(t0 + Duration::from_millis(100));
        assert!(second.is_held(InputAction::MoveRight));
        assert!(!second.is_just_pressed(InputAction::MoveRight));

        let third = sampler.sample(t0 + Duration::from_millis(200));
        assert!(!third.is_held(InputAction::MoveRight));
    }

    #[test]
    fn repeats_keep_key_held_without_new_edges() {
        let mut sampler = InputSampler::new(KeyMap::default(), HOLD, false);
        let t0 = Instant::now();
        sampler.handle_event(&key('f', KeyEventKind::Press), &mapping(), t0);
        assert!(sampler.sample(t0).is_just_pressed(InputAction::ToggleInventory));

        for i in 1..10u64 {
            let now = t0 + Duration::from_millis(i * 50);
            sampler.handle_event(&key('f', KeyEventKind::Repeat), &mapping(), now);
            let snapshot = sampler.sample(now);
            assert!(snapshot.is_held(InputAction::ToggleInventory));
            assert!(!snapshot.is_just_pressed(InputAction::ToggleInventory));
        }
    }

    #[test]
    fn second_press_inside_hold_window_is_a_new_edge() {
        let mut sampler = InputSampler::new(KeyMap::default(), HOLD, false);
        let t0 = Instant::now();
        sampler.handle_event(&key('s', KeyEventKind::Press), &mapping(), t0);
        assert!(sampler
            .sample(t0 + Duration::from_millis(16))
            .is_just_pressed(InputAction::SelectNext));

        sampler.handle_event(&key('s', KeyEventKind::Press), &mapping(), t0 + Duration::from_millis(100));
        let second = sampler.sample(t0 + Duration::from_millis(116));
        assert!(second.is_held(InputAction::SelectNext));
        assert!(second.is_just_pressed(InputAction::SelectNext));

        let idle = sampler.sample(t0 + Duration::from_millis(132));
        assert!(!idle.is_just_pressed(InputAction::SelectNext));
    }

    #[test]
    fn pointer_repress_between_samples_is_a_new_edge() {
        let mut sampler = InputSampler::new(KeyMap::default(), HOLD, false);
        let t0 = Instant::now();
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 30, 11);
        sampler.handle_event(&down, &mapping(), t0);
        assert!(sampler.sample(t0).pointer_just_pressed);

        sampler.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 30, 11), &mapping(), t0);
        sampler.handle_event(&down, &mapping(), t0);
        let snapshot = sampler.sample(t0);
        assert!(snapshot.pointer_held);
        assert!(snapshot.pointer_just_pressed);
    }

    #[test]
    fn press_and_release_between_samples_is_one_edge() {
        let mut sampler = InputSampler::new(KeyMap::default(), HOLD, true);
        let t0 = Instant::now();
        sampler.handle_event(&key('s', KeyEventKind::Press), &mapping(), t0);
        sampler.handle_event(&key('s', KeyEventKind::Release), &mapping(), t0);

        let snapshot = sampler.sample(t0);
        assert!(snapshot.is_just_pressed(InputAction::SelectNext));
        assert!(!snapshot.is_held(InputAction::SelectNext));
        assert!(!sampler.sample(t0).is_just_pressed(InputAction::SelectNext));
    }

    #[test]
    fn releases_end_hold_immediately_when_reported() {
        let mut sampler = InputSampler::new(KeyMap::default(), HOLD, true);
        let t0 = Instant::now();
        sampler.handle_event(&key('i', KeyEventKind::Press), &mapping(), t0);
        assert!(sampler.sample(t0 + Duration::from_secs(5)).is_held(InputAction::MoveUp));

        sampler.handle_event(&key('i', KeyEventKind::Release), &mapping(), t0);
        assert!(!sampler.sample(t0).is_held(InputAction::MoveUp));
    }

    #[test]
    fn mouse_click_maps_into_logical_viewport() {
        let mut sampler = InputSampler::new(KeyMap::default(), HOLD, false);
        let t0 = Instant::now();
        // cell (30, 11) on an 80x30 grid covers x 300..310, y 220..240
        sampler.handle_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), 30, 11),
            &mapping(),
            t0,
        );
        sampler.handle_event(
            &mouse(MouseEventKind::Up(MouseButton::Left), 30, 11),
            &mapping(),
            t0,
        );

        let snapshot = sampler.sample(t0);
        assert_eq!(snapshot.pointer, Point::new(305, 230));
        assert!(snapshot.pointer_just_pressed);
        assert!(!snapshot.pointer_held);
        assert!(!sampler.sample(t0).pointer_just_pressed);
    }

    #[test]
    fn quit_is_reported_on_press() {
        let mut sampler = InputSampler::new(KeyMap::default(), HOLD, false);
        let action = sampler.handle_event(&key('q', KeyEventKind::Press), &mapping(), Instant::now());
        assert_eq!(action, KeyAction::Quit);
    }
}
