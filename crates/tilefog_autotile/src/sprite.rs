//! Mapping classifications to sprite asset keys

use crate::{classify, Classification, RuleTable};
use tilefog_core::{Tile, TileCategory, WorldMap};

/// Key drawn for tiles that have not been discovered
pub const FOG_KEY: &str = "fog";

/// What the renderer should draw for a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSprite<'a> {
    /// Hidden tile
    Fog,
    /// Plain category sprite (non-autotiled category or unmatched signature)
    Base(TileCategory),
    /// Edge/corner variant of an autotiled category
    Variant(TileCategory, &'a str),
}

impl TileSprite<'_> {
    /// Asset lookup key, e.g. `"grass_nw"`, `"river"` or `"fog"`
    pub fn key(&self) -> String {
        match self {
            TileSprite::Fog => FOG_KEY.to_string(),
            TileSprite::Base(category) => category.name().to_string(),
            TileSprite::Variant(category, name) => format!("{}_{}", category.name(), name),
        }
    }
}

/// Pick the sprite for a tile given its classification
pub fn tile_sprite<'a>(tile: &Tile, classification: Classification<'a>) -> TileSprite<'a> {
    if !tile.is_discovered() {
        return TileSprite::Fog;
    }
    match classification {
        Classification::Variant(name) if tile.category.is_autotiled() => {
            TileSprite::Variant(tile.category, name)
        }
        _ => TileSprite::Base(tile.category),
    }
}

/// Sprite keys for every tile, in map index order
pub fn sprite_keys(map: &WorldMap, rules: &RuleTable) -> Vec<String> {
    map.tiles()
        .iter()
        .map(|tile| {
            let classification = if tile.is_discovered() && tile.category.is_autotiled() {
                classify(tile, map, rules)
            } else {
                Classification::Unmatched
            };
            tile_sprite(tile, classification).key()
        })
        .collect()
}

/// Every key a renderer needs to preload for `category`
pub fn asset_keys(category: TileCategory, rules: &RuleTable) -> Vec<String> {
    let mut keys = vec![TileSprite::Base(category).key()];
    if category.is_autotiled() {
        keys.extend(
            rules
                .rules()
                .iter()
                .map(|r| TileSprite::Variant(category, &r.name).key()),
        );
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilefog_core::TilePos;

    #[test]
    fn test_keys() {
        assert_eq!(TileSprite::Fog.key(), "fog");
        assert_eq!(TileSprite::Base(TileCategory::River).key(), "river");
        assert_eq!(
            TileSprite::Variant(TileCategory::Grass, "nw").key(),
            "grass_nw"
        );
    }

    #[test]
    fn test_hidden_tiles_are_fog() {
        let map = WorldMap::from_rows(&["gg"]).unwrap();
        let rules = RuleTable::standard().unwrap();
        assert_eq!(sprite_keys(&map, &rules), vec!["fog", "fog"]);
    }

    #[test]
    fn test_discovered_tiles() {
        let mut map = WorldMap::from_rows(&["ggr"]).unwrap();
        map.reveal_all();
        let rules = RuleTable::standard().unwrap();
        // (0,0): grass east only -> wf; (1,0): grass west only -> ef; river is not autotiled
        assert_eq!(
            sprite_keys(&map, &rules),
            vec!["grass_wf", "grass_ef", "river"]
        );
    }

    #[test]
    fn test_unmatched_falls_back_to_base() {
        let mut map = WorldMap::from_rows(&["g"]).unwrap();
        map.discover(TilePos::new(0, 0)).unwrap();
        let tile = map.tile_at(TilePos::new(0, 0)).unwrap();
        assert_eq!(
            tile_sprite(tile, Classification::Unmatched),
            TileSprite::Base(TileCategory::Grass)
        );
    }

    #[test]
    fn test_asset_keys() {
        let rules = RuleTable::standard().unwrap();
        let grass = asset_keys(TileCategory::Grass, &rules);
        assert_eq!(grass.len(), 17);
        assert_eq!(grass[0], "grass");
        assert!(grass.contains(&"grass_vf".to_string()));
        assert_eq!(asset_keys(TileCategory::River, &rules), vec!["river"]);
    }
}
