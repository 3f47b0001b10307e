//! Tile classification: resolve a tile's signature and look up its variant

use crate::{resolve_signature, RuleTable};
use tilefog_core::{Tile, TilePos, WorldMap};

/// Which sprite variant a tile should use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Name of the matching rule (e.g. "nw", "c")
    Variant(&'a str),
    /// No single rule matched; draw the base sprite
    Unmatched,
}

impl<'a> Classification<'a> {
    pub fn variant(&self) -> Option<&'a str> {
        match *self {
            Classification::Variant(name) => Some(name),
            Classification::Unmatched => None,
        }
    }
}

/// Classify `tile` against `rules`.
///
/// A table defect (zero or several matching rules) is logged and degrades to
/// [`Classification::Unmatched`] so a draw loop never stops over it.
pub fn classify<'r>(tile: &Tile, map: &WorldMap, rules: &'r RuleTable) -> Classification<'r> {
    let signature = resolve_signature(tile, map);
    match rules.match_signature(signature) {
        Ok(name) => Classification::Variant(name),
        Err(e) => {
            tracing::warn!(
                x = tile.position.x,
                y = tile.position.y,
                "autotile classification failed: {}",
                e
            );
            Classification::Unmatched
        }
    }
}

/// Classify the tile at `pos`, or `None` if `pos` is outside the map
pub fn classify_at<'r>(
    pos: TilePos,
    map: &WorldMap,
    rules: &'r RuleTable,
) -> Option<Classification<'r>> {
    map.tile_at(pos).map(|tile| classify(tile, map, rules))
}

/// Classify every tile, in map index order
pub fn classify_map<'r>(map: &WorldMap, rules: &'r RuleTable) -> Vec<Classification<'r>> {
    map.tiles()
        .iter()
        .map(|tile| classify(tile, map, rules))
        .collect()
}
