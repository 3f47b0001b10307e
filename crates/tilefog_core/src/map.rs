//! The world map grid

use crate::{Direction, MapError, Tile, TileCategory, TileContent, TilePos};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// A rectangular grid of tiles stored in row-major order.
///
/// The tile at `(x, y)` lives at index `y * width + x` and there are always
/// exactly `width * height` tiles. Deserialization re-checks both invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawWorldMap")]
pub struct WorldMap {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

/// Unvalidated serde shape of a [`WorldMap`]
#[derive(Deserialize)]
struct RawWorldMap {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl TryFrom<RawWorldMap> for WorldMap {
    type Error = MapError;

    fn try_from(raw: RawWorldMap) -> Result<Self, Self::Error> {
        let map = WorldMap {
            width: raw.width,
            height: raw.height,
            tiles: raw.tiles,
        };
        map.validate()?;
        Ok(map)
    }
}

impl WorldMap {
    /// Create a map filled with a single category
    pub fn new(width: u32, height: u32, category: TileCategory) -> Result<Self, MapError> {
        let size = Self::tile_count(width, height)?;
        Ok(Self::build(width, height, std::iter::repeat(category).take(size)))
    }

    /// `width * height`, or [`MapError::TooLarge`] when the tiles could not be
    /// indexed or addressed by `i32` coordinates
    pub(crate) fn tile_count(width: u32, height: u32) -> Result<usize, MapError> {
        let too_large = MapError::TooLarge { width, height };
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(too_large);
        }
        (width as usize).checked_mul(height as usize).ok_or(too_large)
    }

    /// Create a map from row-major categories
    pub fn from_categories(
        width: u32,
        height: u32,
        categories: Vec<TileCategory>,
    ) -> Result<Self, MapError> {
        let expected = Self::tile_count(width, height)?;
        if categories.len() != expected {
            return Err(MapError::SizeMismatch {
                width,
                height,
                actual: categories.len(),
            });
        }
        Ok(Self::build(width, height, categories))
    }

    /// Parse a map from text rows of category codes, top row first.
    ///
    /// Whitespace inside a row is ignored, so `"r g r"` and `"rgr"` are the same row.
    pub fn from_rows(rows: &[&str]) -> Result<Self, MapError> {
        let mut categories = Vec::new();
        let mut width = None;

        for (y, row) in rows.iter().enumerate() {
            let mut row_len = 0;
            for c in row.chars().filter(|c| !c.is_whitespace()) {
                let category = TileCategory::from_code(c).ok_or_else(|| {
                    MapError::InvalidText(format!("unknown category code '{c}' in row {y}"))
                })?;
                categories.push(category);
                row_len += 1;
            }
            match width {
                None => width = Some(row_len),
                Some(w) if w != row_len => {
                    return Err(MapError::InvalidText(format!(
                        "row {y} has {row_len} tiles, expected {w}"
                    )));
                }
                Some(_) => {}
            }
        }

        let width = width.unwrap_or(0) as u32;
        Self::from_categories(width, rows.len() as u32, categories)
    }

    pub(crate) fn build(
        width: u32,
        height: u32,
        categories: impl IntoIterator<Item = TileCategory>,
    ) -> Self {
        let tiles = categories
            .into_iter()
            .enumerate()
            .map(|(i, category)| Tile::new(Self::position_for(width, i), category))
            .collect();
        Self {
            width,
            height,
            tiles,
        }
    }

    fn position_for(width: u32, index: usize) -> TilePos {
        let width = width.max(1) as usize;
        TilePos::new((index % width) as i32, (index / width) as i32)
    }

    fn validate(&self) -> Result<(), MapError> {
        let expected = Self::tile_count(self.width, self.height)?;
        if self.tiles.len() != expected {
            return Err(MapError::SizeMismatch {
                width: self.width,
                height: self.height,
                actual: self.tiles.len(),
            });
        }
        for (index, tile) in self.tiles.iter().enumerate() {
            let expected = Self::position_for(self.width, index);
            if tile.position != expected {
                return Err(MapError::TilePositionMismatch {
                    index,
                    expected,
                    found: tile.position,
                });
            }
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: TilePos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Index of `pos` in [`tiles`](Self::tiles), or `None` if outside the map
    pub fn index_of(&self, pos: TilePos) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn tile_at(&self, pos: TilePos) -> Option<&Tile> {
        self.index_of(pos).map(|idx| &self.tiles[idx])
    }

    pub fn tile_at_mut(&mut self, pos: TilePos) -> Option<&mut Tile> {
        self.index_of(pos).map(move |idx| &mut self.tiles[idx])
    }

    fn require_mut(&mut self, pos: TilePos) -> Result<&mut Tile, MapError> {
        let idx = self.index_of(pos).ok_or(MapError::OutOfBounds(pos))?;
        Ok(&mut self.tiles[idx])
    }

    /// The tile one step from `pos` in `direction`, if inside the map
    pub fn neighbor(&self, pos: TilePos, direction: Direction) -> Option<&Tile> {
        self.tile_at(pos.offset(direction))
    }

    /// In-bounds orthogonal neighbors of `pos`, clockwise from north
    pub fn neighbors(&self, pos: TilePos) -> impl Iterator<Item = (Direction, &Tile)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(pos, dir).map(|tile| (dir, tile)))
    }

    /// Change the category of a tile (terrain edit)
    pub fn set_category(&mut self, pos: TilePos, category: TileCategory) -> Result<(), MapError> {
        self.require_mut(pos)?.category = category;
        Ok(())
    }

    // Discovery

    /// Discover the tile at `pos`. Returns true if it was hidden before.
    pub fn discover(&mut self, pos: TilePos) -> Result<bool, MapError> {
        Ok(self.require_mut(pos)?.discover())
    }

    /// Discover the in-bounds orthogonal neighbors of `pos`.
    /// Returns how many of them were newly discovered.
    pub fn discover_surroundings(&mut self, pos: TilePos) -> Result<usize, MapError> {
        if !self.in_bounds(pos) {
            return Err(MapError::OutOfBounds(pos));
        }
        let mut newly = 0;
        for dir in Direction::ALL {
            if let Some(tile) = self.tile_at_mut(pos.offset(dir)) {
                if tile.discover() {
                    newly += 1;
                }
            }
        }
        Ok(newly)
    }

    /// Discover every tile (debug view)
    pub fn reveal_all(&mut self) {
        for tile in &mut self.tiles {
            tile.discover();
        }
    }

    pub fn discovered_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_discovered()).count()
    }

    // Contents

    pub fn add_content(&mut self, pos: TilePos, content: TileContent) -> Result<(), MapError> {
        self.require_mut(pos)?.contents.push(content);
        Ok(())
    }

    /// Remove the occupant `id` from the tile at `pos`
    pub fn remove_content(&mut self, pos: TilePos, id: Uuid) -> Result<TileContent, MapError> {
        let tile = self.require_mut(pos)?;
        match tile.contents.iter().position(|c| c.id == id) {
            Some(ix) => Ok(tile.contents.remove(ix)),
            None => Err(MapError::ContentNotFound { id, pos }),
        }
    }

    /// Position of the tile holding occupant `id`
    pub fn find_content(&self, id: Uuid) -> Option<TilePos> {
        self.tiles
            .iter()
            .find(|t| t.has_content(id))
            .map(|t| t.position)
    }

    // Persistence

    /// Render the categories back to text rows (inverse of [`from_rows`](Self::from_rows))
    pub fn to_rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(|t| t.category.code()).collect())
            .collect()
    }

    pub fn to_json(&self) -> Result<String, MapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save the map to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), MapError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load and validate a map from a JSON file
    pub fn load(path: &Path) -> Result<Self, MapError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
