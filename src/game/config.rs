use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::grid::{Cell, Grid};
use crate::error::ConfigError;

/// Largest grid side accepted by [`GameConfig::validate`]
pub const MAX_GRID_SIDE: i32 = 1024;

/// An RGB colour triple
pub type Rgb = [u8; 3];

/// Colours used when drawing the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub head: Rgb,
    pub body: Rgb,
    pub food: Rgb,
    pub border: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            head: [0, 255, 0],
            body: [0, 200, 0],
            food: [255, 0, 0],
            border: [93, 216, 228],
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: i32,
    /// Height of the game grid in cells
    pub grid_height: i32,
    /// Side of one cell in pixels, for pixel-space renderers
    pub cell_size: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            cell_size: 20,
            tick_rate: 20,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < 2 || self.grid_height < 2 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 2x2, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(ConfigError::Invalid(format!(
                "grid sides must be at most {MAX_GRID_SIDE}, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".into()));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be positive".into()));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    /// Cell the snake starts on and returns to after a reset
    pub fn start_cell(&self) -> Cell {
        self.grid().center()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.tick_rate, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_start_cell_is_screen_centre() {
        let config = GameConfig::default();
        assert_eq!(config.start_cell(), Cell::new(16, 12));
        assert_eq!(config.start_cell().to_pixels(config.cell_size), (320, 240));
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.tick_rate, 20);
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(GameConfig::default().tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            GameConfig::new(1, 10).validate(),
            Err(ConfigError::Invalid(_))
        ));
        assert!(GameConfig::new(10, 0).validate().is_err());
        assert!(matches!(
            GameConfig::new(50_000, 50_000).validate(),
            Err(ConfigError::Invalid(_))
        ));
        assert!(GameConfig::new(MAX_GRID_SIDE + 1, 10).validate().is_err());
        assert!(GameConfig::new(MAX_GRID_SIDE, MAX_GRID_SIDE).validate().is_ok());

        let config = GameConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            cell_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"grid_width": 40, "palette": {{"food": [1, 2, 3]}}}}"#).unwrap();

        let config = GameConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.palette.food, [1, 2, 3]);
        assert_eq!(config.palette.head, Palette::default().head);
    }

    #[test]
    fn test_load_errors() {
        let missing = GameConfig::from_json_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let bad = GameConfig::from_json_file(file.path());
        assert!(matches!(bad, Err(ConfigError::Parse { .. })));
    }
}
