//! Ground categories a tile can belong to

use serde::{Deserialize, Serialize};

/// The terrain type of a tile, used as the equality test for neighbor matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TileCategory {
    #[default]
    Grass,
    River,
}

impl TileCategory {
    pub const ALL: [TileCategory; 2] = [TileCategory::Grass, TileCategory::River];

    /// Lower-case name, also used as the sprite key prefix
    pub fn name(&self) -> &'static str {
        match self {
            TileCategory::Grass => "grass",
            TileCategory::River => "river",
        }
    }

    /// Single-character code used in text grids
    pub fn code(&self) -> char {
        match self {
            TileCategory::Grass => 'g',
            TileCategory::River => 'r',
        }
    }

    /// Parse a single-character code (case-insensitive)
    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' => Some(TileCategory::Grass),
            'r' => Some(TileCategory::River),
            _ => None,
        }
    }

    /// Whether this category has edge/corner sprite variants
    pub fn is_autotiled(&self) -> bool {
        matches!(self, TileCategory::Grass)
    }
}

impl std::fmt::Display for TileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
