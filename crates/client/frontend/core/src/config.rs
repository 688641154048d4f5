//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Nominal update rate in ticks per second.
    pub tick_rate: u32,
    /// Draw the measured rate in the top-left corner.
    pub show_fps: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            tick_rate: Self::DEFAULT_TICK_RATE,
            show_fps: true,
        }
    }
}

impl FrontendConfig {
    pub const DEFAULT_TICK_RATE: u32 = 60;

    pub const fn new(tick_rate: u32, show_fps: bool) -> Self {
        Self {
            tick_rate,
            show_fps,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SATCHEL_TICK_RATE` - Nominal ticks per second (default: 60, min: 1)
    /// - `SATCHEL_SHOW_FPS` - Draw the FPS readout (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(rate) = parse::<u32>(lookup("SATCHEL_TICK_RATE")) {
            config.tick_rate = rate.max(1);
        }
        if let Some(show) = parse_bool(lookup("SATCHEL_SHOW_FPS")) {
            config.show_fps = show;
        }

        config
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

fn parse_bool(value: Option<String>) -> Option<bool> {
    match value?.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
