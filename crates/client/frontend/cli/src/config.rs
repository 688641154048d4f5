//! CLI-specific configuration for terminal UI.
use std::env;
use std::time::Duration;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// How long a key counts as held after its last press or repeat, when the
    /// terminal cannot report key releases.
    pub key_hold_ms: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self { key_hold_ms: 150 }
    }
}

impl CliConfig {
    pub const MIN_KEY_HOLD_MS: u64 = 16;

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_KEY_HOLD_MS` - Key hold timeout in milliseconds (default: 150, min: 16)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("CLI_KEY_HOLD_MS") {
            config.key_hold_ms = ms.max(Self::MIN_KEY_HOLD_MS);
        }

        config
    }

    pub fn key_hold(&self) -> Duration {
        Duration::from_millis(self.key_hold_ms)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
