//! Tiles and the things standing on them

use crate::{TileCategory, TilePos};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Something occupying a tile (the explorer, a chest, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileContent {
    /// Unique identifier for this occupant
    pub id: Uuid,
    /// Sprite name used by the renderer (e.g., "player", "chest")
    pub image_name: String,
}

impl TileContent {
    /// Create a new occupant with a fresh id
    pub fn new(image_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_name: image_name.into(),
        }
    }
}

/// A single cell of the world map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub category: TileCategory,
    /// Whether the tile has been seen. Only ever goes from false to true.
    #[serde(default)]
    discovered: bool,
    pub position: TilePos,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<TileContent>,
}

impl Tile {
    /// Create an undiscovered, empty tile
    pub fn new(position: TilePos, category: TileCategory) -> Self {
        Self {
            category,
            discovered: false,
            position,
            contents: Vec::new(),
        }
    }

    pub fn is_discovered(&self) -> bool {
        self.discovered
    }

    /// Mark the tile as discovered. Returns true if it was hidden before.
    pub fn discover(&mut self) -> bool {
        let newly = !self.discovered;
        self.discovered = true;
        newly
    }

    pub fn has_content(&self, id: Uuid) -> bool {
        self.contents.iter().any(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_hidden_and_empty() {
        let tile = Tile::new(TilePos::new(2, 5), TileCategory::River);
        assert!(!tile.is_discovered());
        assert!(tile.contents.is_empty());
        assert_eq!(tile.position, TilePos::new(2, 5));
    }

    #[test]
    fn test_discover_is_monotonic() {
        let mut tile = Tile::new(TilePos::new(0, 0), TileCategory::Grass);
        assert!(tile.discover());
        assert!(!tile.discover());
        assert!(tile.is_discovered());
    }

    #[test]
    fn test_has_content() {
        let mut tile = Tile::new(TilePos::new(0, 0), TileCategory::Grass);
        let chest = TileContent::new("chest");
        assert!(!tile.has_content(chest.id));
        tile.contents.push(chest.clone());
        assert!(tile.has_content(chest.id));
    }
}
