//! Configuration system
//!
//! The raycaster's per-frame parameters (tilemap, textures, camera, light,
//! fog, billboards) are passed explicitly to `render` and are not
//! configuration in this sense; `RaycasterConfig` covers the handful of
//! renderer-construction-time settings that are sensible to load from a
//! file instead of hardcoding.

pub use serde::{Deserialize, Serialize};

/// Configuration trait: load/save to TOML or RON based on the file extension.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Renderer-construction-time settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaycasterConfig {
    /// RGBA written by `clear(color)`. Defaults to fully transparent black.
    pub clear_color: [u8; 4],
}

impl Default for RaycasterConfig {
    fn default() -> Self {
        Self {
            clear_color: [0, 0, 0, 0],
        }
    }
}

impl Config for RaycasterConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_clear_color_is_transparent_black() {
        assert_eq!(RaycasterConfig::default().clear_color, [0, 0, 0, 0]);
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = RaycasterConfig {
            clear_color: [10, 20, 30, 255],
        };
        let serialized = toml::to_string_pretty(&cfg).unwrap();
        let deserialized: RaycasterConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.clear_color, cfg.clear_color);
    }

    #[test]
    fn round_trips_through_ron() {
        let cfg = RaycasterConfig {
            clear_color: [10, 20, 30, 255],
        };
        let serialized = ron::ser::to_string_pretty(&cfg, Default::default()).unwrap();
        let deserialized: RaycasterConfig = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized.clear_color, cfg.clear_color);
    }
}
