//! Error types for the world model

use crate::TilePos;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while building, loading or mutating a [`WorldMap`](crate::WorldMap)
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map is {width}x{height} but has {actual} tiles")]
    SizeMismatch { width: u32, height: u32, actual: usize },
    #[error("map size {width}x{height} is too large")]
    TooLarge { width: u32, height: u32 },
    #[error("tile {index} claims position ({}, {}) but belongs at ({}, {})", .found.x, .found.y, .expected.x, .expected.y)]
    TilePositionMismatch {
        index: usize,
        expected: TilePos,
        found: TilePos,
    },
    #[error("position ({}, {}) is outside the map", .0.x, .0.y)]
    OutOfBounds(TilePos),
    #[error("content {id} is not on tile ({}, {})", .pos.x, .pos.y)]
    ContentNotFound { id: Uuid, pos: TilePos },
    #[error("invalid map text: {0}")]
    InvalidText(String),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading a [`WorldConfig`](crate::WorldConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
