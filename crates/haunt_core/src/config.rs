//! Board configuration loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a board configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Sizing of the tile board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Edge length of one tile in world units
    pub tile_size: f32,
    /// Backing array size [width, height]; the active region never leaves it
    pub capacity: [u32; 2],
    pub min_width: u32,
    pub min_height: u32,
    /// Active region size applied when the board is created
    pub initial_size: [u32; 2],
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tile_size: 32.0,
            capacity: [48, 48],
            min_width: 3,
            min_height: 3,
            initial_size: [16, 12],
        }
    }
}

impl BoardConfig {
    /// Parse and validate a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size.is_nan() || self.tile_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.min_width < 3 || self.min_height < 3 {
            return Err(ConfigError::Invalid(format!(
                "minimum size {}x{} leaves no room inside the border ring",
                self.min_width, self.min_height
            )));
        }
        let [width, height] = self.capacity;
        if self.min_width > width || self.min_height > height {
            return Err(ConfigError::Invalid(format!(
                "minimum size {}x{} exceeds capacity {}x{}",
                self.min_width, self.min_height, width, height
            )));
        }
        // Cell indices are computed as `y * width + x` in i32
        if u64::from(width) * u64::from(height) > i32::MAX as u64 {
            return Err(ConfigError::Invalid(format!(
                "capacity {}x{} has too many cells",
                width, height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(BoardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = BoardConfig::from_toml_str(
            r#"
tile_size = 16.0
capacity = [20, 10]
"#,
        )
        .unwrap();
        assert_eq!(config.tile_size, 16.0);
        assert_eq!(config.capacity, [20, 10]);
        assert_eq!(config.min_width, 3);
        assert_eq!(config.initial_size, [16, 12]);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            BoardConfig::from_toml_str("tile_size = 0.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BoardConfig::from_toml_str("min_width = 2"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BoardConfig::from_toml_str("capacity = [4, 4]\nmin_width = 5"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BoardConfig::from_toml_str("tile_size = \"big\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_capacity_area_must_fit() {
        let huge = BoardConfig {
            capacity: [50_000, 50_000],
            ..BoardConfig::default()
        };
        assert!(matches!(huge.validate(), Err(ConfigError::Invalid(_))));

        let wide = BoardConfig {
            capacity: [u32::MAX, 3],
            ..BoardConfig::default()
        };
        assert!(matches!(wide.validate(), Err(ConfigError::Invalid(_))));

        let large = BoardConfig {
            capacity: [40_000, 40_000],
            ..BoardConfig::default()
        };
        assert!(large.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_width = 5\nmin_height = 4").unwrap();
        let config = BoardConfig::load(file.path()).unwrap();
        assert_eq!(config.min_width, 5);
        assert_eq!(config.min_height, 4);

        let missing = BoardConfig::load(Path::new("/nonexistent/board.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
