//! Computing a tile's actual neighbor signature from the map

use crate::{DirectionalSignature, NeighborMark};
use tilefog_core::{Direction, Tile, TilePos, WorldMap};

/// Signature of `tile` within `map`.
///
/// A direction is `Match` when the neighbor there exists and has the same
/// category. Out-of-bounds neighbors never match. Discovery state is not
/// consulted. Nothing is cached, so terrain edits show up on the next call.
pub fn resolve_signature(tile: &Tile, map: &WorldMap) -> DirectionalSignature {
    let mark = |direction: Direction| {
        NeighborMark::from_bool(
            map.neighbor(tile.position, direction)
                .is_some_and(|n| n.category == tile.category),
        )
    };
    DirectionalSignature::new(
        mark(Direction::North),
        mark(Direction::East),
        mark(Direction::South),
        mark(Direction::West),
    )
}

/// Signature of the tile at `pos`, or `None` if `pos` is outside the map
pub fn resolve_at(pos: TilePos, map: &WorldMap) -> Option<DirectionalSignature> {
    map.tile_at(pos).map(|tile| resolve_signature(tile, map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use NeighborMark::{Match, NoMatch};

    fn map() -> WorldMap {
        WorldMap::from_rows(&["ggr", "grr", "ggg"]).unwrap()
    }

    #[test]
    fn test_corner_gets_no_match_outside() {
        let map = WorldMap::new(3, 3, tilefog_core::TileCategory::Grass).unwrap();
        let sig = resolve_at(TilePos::new(0, 0), &map).unwrap();
        assert_eq!(sig, DirectionalSignature::new(NoMatch, Match, Match, NoMatch));
        let sig = resolve_at(TilePos::new(2, 2), &map).unwrap();
        assert_eq!(sig, DirectionalSignature::new(Match, NoMatch, NoMatch, Match));
        let sig = resolve_at(TilePos::new(1, 1), &map).unwrap();
        assert_eq!(sig, DirectionalSignature::SURROUNDED);
    }

    #[test]
    fn test_single_tile_map_is_isolated() {
        let map = WorldMap::from_rows(&["r"]).unwrap();
        assert_eq!(
            resolve_at(TilePos::new(0, 0), &map),
            Some(DirectionalSignature::ISOLATED)
        );
    }

    #[test]
    fn test_no_wrap_between_rows() {
        // index 3 is (0,1); a wrapping lookup would read it as east of (2,0)
        let map = WorldMap::from_rows(&["rrr", "rrr"]).unwrap();
        let sig = resolve_at(TilePos::new(2, 0), &map).unwrap();
        assert_eq!(sig.east, NoMatch);
    }

    #[test]
    fn test_category_equality() {
        let map = map();
        // (1,1) is river: east river, others grass
        let sig = resolve_at(TilePos::new(1, 1), &map).unwrap();
        assert_eq!(sig, DirectionalSignature::new(NoMatch, Match, NoMatch, NoMatch));
    }

    #[test]
    fn test_discovery_does_not_matter() {
        let mut map = map();
        let before = resolve_at(TilePos::new(0, 1), &map);
        map.reveal_all();
        assert_eq!(resolve_at(TilePos::new(0, 1), &map), before);
    }

    #[test]
    fn test_symmetry() {
        let map = map();
        for tile in map.tiles() {
            let sig = resolve_signature(tile, &map);
            for dir in Direction::ALL {
                if let Some(neighbor) = map.neighbor(tile.position, dir) {
                    let back = resolve_signature(neighbor, &map);
                    assert_eq!(sig.get(dir), back.get(dir.opposite()));
                } else {
                    assert_eq!(sig.get(dir), NoMatch);
                }
            }
        }
    }

    #[test]
    fn test_terrain_edit_is_seen_immediately() {
        let mut map = map();
        let pos = TilePos::new(1, 1);
        map.set_category(pos, tilefog_core::TileCategory::Grass).unwrap();
        // east neighbor (2,1) is still river
        let sig = resolve_at(pos, &map).unwrap();
        assert_eq!(sig, DirectionalSignature::new(Match, NoMatch, Match, Match));
    }

    #[test]
    fn test_outside_position() {
        assert_eq!(resolve_at(TilePos::new(3, 0), &map()), None);
    }
}
