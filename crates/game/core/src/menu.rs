//! Start menu: a single "start" control with a permanent activation latch.
use crate::config::MenuConfig;
use crate::geometry::Rect;
use crate::input::InputSnapshot;

/// Feedback state of the start button. Affects rendering only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ButtonVisual {
    #[default]
    Idle,
    Hover,
    Pressed,
}

impl ButtonVisual {
    pub const fn scale(self) -> f32 {
        match self {
            ButtonVisual::Idle => 1.0,
            ButtonVisual::Hover => 1.05,
            ButtonVisual::Pressed => 0.95,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MenuScreen {
    start_button: Rect,
    label: String,
    activated: bool,
    visual: ButtonVisual,
}

impl MenuScreen {
    pub fn new(config: &MenuConfig) -> Self {
        Self {
            start_button: config.start_button,
            label: config.start_label.clone(),
            activated: false,
            visual: ButtonVisual::Idle,
        }
    }

    /// Processes one frame and reports whether the menu has been activated.
    ///
    /// Activation needs a press edge with the pointer inside the start
    /// button on the same frame. Once set it stays set.
    pub fn update(&mut self, input: &InputSnapshot) -> bool {
        let hovering = self.start_button.contains(input.pointer);

        if hovering && input.pointer_just_pressed {
            self.activated = true;
        }

        self.visual = match (hovering, input.pointer_held) {
            (false, _) => ButtonVisual::Idle,
            (true, true) => ButtonVisual::Pressed,
            (true, false) => ButtonVisual::Hover,
        };

        self.activated
    }

    pub fn visual(&self) -> ButtonVisual {
        self.visual
    }

    pub fn start_button(&self) -> Rect {
        self.start_button
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
