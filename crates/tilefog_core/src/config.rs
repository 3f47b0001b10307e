//! World configuration, loaded from TOML.
//!
//! ```toml
//! [world]
//! width = 10
//! height = 10
//! seed = 42
//! river_chance = 0.5
//!
//! [explorer]
//! start_x = 0
//! start_y = 0
//! movement_points = 200
//! image_name = "player"
//! ```

use crate::{ConfigError, TilePos};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for building a world
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldConfig {
    #[serde(default)]
    pub world: WorldGenConfig,
    #[serde(default)]
    pub explorer: ExplorerConfig,
}

/// Parameters for random world generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    pub width: u32,
    pub height: u32,
    /// Fixed RNG seed; `None` seeds from entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Probability that any given tile is river
    pub river_chance: f64,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            seed: None,
            river_chance: 0.5,
        }
    }
}

/// Where the explorer starts and how far it can walk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub start_x: i32,
    pub start_y: i32,
    pub movement_points: u32,
    pub image_name: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            start_x: 0,
            start_y: 0,
            movement_points: 200,
            image_name: "player".to_string(),
        }
    }
}

impl ExplorerConfig {
    pub fn start(&self) -> TilePos {
        TilePos::new(self.start_x, self.start_y)
    }
}

impl WorldConfig {
    /// Parse and validate a config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        if world.width == 0 || world.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "world size must be non-zero, got {}x{}",
                world.width, world.height
            )));
        }
        if !(0.0..=1.0).contains(&world.river_chance) {
            return Err(ConfigError::Invalid(format!(
                "river_chance must be within 0.0..=1.0, got {}",
                world.river_chance
            )));
        }
        let start = self.explorer.start();
        if start.x < 0
            || start.y < 0
            || start.x as u32 >= world.width
            || start.y as u32 >= world.height
        {
            return Err(ConfigError::Invalid(format!(
                "explorer start ({}, {}) is outside the {}x{} world",
                start.x, start.y, world.width, world.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let config = WorldConfig::from_toml_str("").unwrap();
        assert_eq!(config.world.width, 10);
        assert_eq!(config.world.height, 10);
        assert_eq!(config.world.seed, None);
        assert_eq!(config.explorer.movement_points, 200);
        assert_eq!(config.explorer.image_name, "player");
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[world]
width = 7
height = 5
seed = 42
river_chance = 0.25

[explorer]
start_x = 3
start_y = 2
movement_points = 20
image_name = "elephant"
"#;
        let config = WorldConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.world.width, 7);
        assert_eq!(config.world.seed, Some(42));
        assert_eq!(config.world.river_chance, 0.25);
        assert_eq!(config.explorer.start(), TilePos::new(3, 2));
        assert_eq!(config.explorer.image_name, "elephant");
    }

    #[test]
    fn reject_invalid_values() {
        for toml_str in [
            "[world]\nwidth = 0",
            "[world]\nriver_chance = 1.5",
            "[explorer]\nstart_x = 10",
            "[explorer]\nstart_y = -1",
        ] {
            let result = WorldConfig::from_toml_str(toml_str);
            assert!(
                matches!(result, Err(ConfigError::Invalid(_))),
                "expected invalid for {toml_str:?}"
            );
        }
    }

    #[test]
    fn reject_malformed_toml() {
        let result = WorldConfig::from_toml_str("[world\nwidth = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.toml");
        std::fs::write(&path, "[world]\nwidth = 4\nheight = 4\n").unwrap();
        let config = WorldConfig::load(&path).unwrap();
        assert_eq!(config.world.width, 4);

        let missing = WorldConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
