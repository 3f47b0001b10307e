//! Core world model for tilefog
//!
//! This crate provides the plain-data types for a fog-of-war tile world:
//! - `WorldMap` - A row-major grid of tiles with bounds-checked access
//! - `Tile` - Category, discovery state and occupants of a single cell
//! - `TileCategory` - The closed set of ground types (grass, river)
//! - `Explorer` - A walker that uncovers tiles as it moves
//! - `WorldConfig` - TOML configuration for generation and the explorer
//!
//! It has no rendering dependency; autotiling lives in `tilefog_autotile`.

mod category;
mod config;
mod error;
mod explorer;
mod generate;
mod map;
mod position;
mod tile;

pub use category::TileCategory;
pub use config::{ExplorerConfig, WorldConfig, WorldGenConfig};
pub use error::{ConfigError, MapError};
pub use explorer::{random_movement_cost, Explorer, WalkOutcome};
pub use generate::{generate_world, world_rng};
pub use map::WorldMap;
pub use position::{Direction, TilePos};
pub use tile::{Tile, TileContent};

/// Build a world and its explorer from a config
pub fn create_world(config: &WorldConfig) -> Result<(WorldMap, Explorer), MapError> {
    let mut rng = world_rng(&config.world);
    let mut map = generate_world(&config.world, &mut rng)?;
    let explorer = Explorer::spawn(
        &mut map,
        TileContent::new(config.explorer.image_name.clone()),
        config.explorer.start(),
        config.explorer.movement_points,
    )?;
    Ok((map, explorer))
}
