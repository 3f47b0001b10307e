//! Four-neighbor autotiling for tilefog maps
//!
//! Each tile is compared with its north, east, south and west neighbors.
//! The resulting Match/NoMatch signature selects one of 16 named sprite
//! variants from a fixed rule table.
//!
//! # Example
//!
//! ```rust,ignore
//! use tilefog_autotile::{classify_at, init_rule_table, Classification};
//! use tilefog_core::{TilePos, WorldMap};
//!
//! // Build once at startup and keep it around
//! let rules = init_rule_table()?;
//!
//! let map = WorldMap::from_rows(&["rrr", "rgr", "rrr"])?;
//! let variant = classify_at(TilePos::new(1, 1), &map, &rules);
//! assert_eq!(variant, Some(Classification::Variant("i")));
//! ```

mod classify;
mod pattern;
mod resolve;
mod rules;
mod signature;
mod sprite;

pub use classify::{classify, classify_at, classify_map, Classification};
pub use pattern::{decode_pattern, OCCUPIED, ROW_SEPARATOR};
pub use resolve::{resolve_at, resolve_signature};
pub use rules::{init_rule_table, AutotileRule, RuleTable, RuleTableIssue, STANDARD_PATTERNS};
pub use signature::{bits, DirectionalSignature, NeighborMark};
pub use sprite::{asset_keys, sprite_keys, tile_sprite, TileSprite, FOG_KEY};

// Re-export tilefog_core
pub use tilefog_core;

use thiserror::Error;

/// Errors produced while building or querying a [`RuleTable`]
#[derive(Debug, Error)]
pub enum AutotileError {
    /// A rule pattern is not 3 rows of 3 cells. Fatal at startup.
    #[error("malformed autotile pattern {pattern:?}: {reason}")]
    MalformedPattern { pattern: String, reason: String },
    /// A signature matched zero or several rules
    #[error("signature [{signature}] matched {candidates} rules, expected exactly 1")]
    AmbiguousOrMissingRule {
        signature: DirectionalSignature,
        candidates: usize,
    },
}
