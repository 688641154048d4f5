//! Top-level screen state machine.
//!
//! ```text
//!   Menu ──(start activated)──▶ Play
//! ```
//!
//! Play has no outgoing edge. A mode switch is observable only through
//! [`Game::mode`] and through which screen updates and renders next.
use crate::config::GameConfig;
use crate::geometry::Size;
use crate::input::InputSnapshot;
use crate::inventory::Inventory;
use crate::menu::MenuScreen;
use crate::play::{PlayChanges, PlayScreen};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ScreenMode {
    #[default]
    Menu,
    Play,
}

/// Everything the core consumes for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub input: InputSnapshot,
    /// Seconds represented by this frame, derived from the measured tick rate.
    pub elapsed_seconds: f64,
    pub viewport: Size,
}

impl FrameInput {
    pub const fn new(input: InputSnapshot, elapsed_seconds: f64, viewport: Size) -> Self {
        Self {
            input,
            elapsed_seconds,
            viewport,
        }
    }
}

/// Result of one [`Game::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The menu handled the frame and is still active.
    Menu,
    /// The menu was activated this frame; Play runs from the next frame on.
    EnteredPlay,
    Play(PlayChanges),
}

#[derive(Clone, Debug)]
pub struct Game {
    mode: ScreenMode,
    viewport: Size,
    menu: MenuScreen,
    play: PlayScreen,
}

impl Game {
    pub fn new(config: &GameConfig, inventory: Inventory) -> Self {
        Self {
            mode: ScreenMode::Menu,
            viewport: config.viewport,
            menu: MenuScreen::new(&config.menu),
            play: PlayScreen::new(config, inventory),
        }
    }

    /// Routes one frame to the active screen and applies the Menu→Play edge.
    pub fn advance(&mut self, frame: &FrameInput) -> FrameOutcome {
        self.viewport = frame.viewport;
        match self.mode {
            ScreenMode::Menu => {
                if self.menu.update(&frame.input) {
                    self.mode = ScreenMode::Play;
                    FrameOutcome::EnteredPlay
                } else {
                    FrameOutcome::Menu
                }
            }
            ScreenMode::Play => FrameOutcome::Play(self.play.update(frame)),
        }
    }

    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    /// Viewport of the most recent frame.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn menu(&self) -> &MenuScreen {
        &self.menu
    }

    pub fn play(&self) -> &PlayScreen {
        &self.play
    }
}
