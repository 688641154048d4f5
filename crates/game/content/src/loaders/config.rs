//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Every table and key is optional; anything missing keeps its default.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use game_core::{Rect, Size};

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
grid_size = 16

[player]
speed = 120.0

[inventory]
rows = 3

[menu.start_button]
x = 10
y = 20
width = 100
height = 30
"#
        )
        .unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.player.speed, 120.0);
        assert_eq!(config.player.size, 32);
        assert_eq!(config.inventory.rows, 3);
        assert_eq!(config.inventory.items_per_page(), 12);
        assert_eq!(config.menu.start_button, Rect::new(10, 20, 100, 30));
        assert_eq!(config.menu.start_label, "START_THE_GAME");
        assert_eq!(config.viewport, Size::new(800, 600));
    }

    #[test]
    fn empty_file_is_the_default_config() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(ConfigLoader::load(file.path()).unwrap(), GameConfig::default());
    }

    #[test]
    fn wrong_type_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "grid_size = \"large\"").unwrap();
        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("config TOML"));
    }
}
