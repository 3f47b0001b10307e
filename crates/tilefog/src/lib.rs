//! Fog-of-war tile worlds with four-neighbor autotiling
//!
//! This crate bundles the tilefog crates behind a single dependency:
//! - [`tilefog_core`] - world map, tiles, discovery, exploration and config
//! - [`tilefog_autotile`] - pattern decoding, rule table and tile classification
//! - [`Session`] - a generated world with its explorer and rule table
//!
//! With the `bevy` feature, [`plugin::TilefogPlugin`] registers the rule table
//! as a resource and keeps per-tile sprite keys up to date.
//!
//! # Example
//!
//! ```rust,ignore
//! use tilefog::prelude::*;
//!
//! let config = WorldConfig::load("world.toml".as_ref())?;
//! let mut session = Session::new(&config)?;
//! session.walk(Direction::East)?;
//! for key in session.sprite_keys() {
//!     // look up and draw the sprite
//! }
//! ```

mod session;

#[cfg(feature = "bevy")]
pub mod plugin;

pub use session::Session;

pub use tilefog_autotile;
pub use tilefog_core;

use thiserror::Error;

/// Any error a [`Session`] can produce
#[derive(Debug, Error)]
pub enum TilefogError {
    #[error(transparent)]
    Map(#[from] tilefog_core::MapError),
    #[error(transparent)]
    Config(#[from] tilefog_core::ConfigError),
    #[error(transparent)]
    Autotile(#[from] tilefog_autotile::AutotileError),
}

/// Commonly used types
pub mod prelude {
    pub use crate::{Session, TilefogError};
    pub use tilefog_autotile::{
        classify, classify_at, init_rule_table, Classification, DirectionalSignature,
        NeighborMark, RuleTable, TileSprite,
    };
    pub use tilefog_core::{
        Direction, Explorer, Tile, TileCategory, TileContent, TilePos, WalkOutcome, WorldConfig,
        WorldMap,
    };

    #[cfg(feature = "bevy")]
    pub use crate::plugin::{AutotileRules, TileSprites, TilefogPlugin, WorldMapResource};
}
