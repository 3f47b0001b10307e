//! Four-direction neighbor signatures

use serde::{Deserialize, Serialize};
use tilefog_core::Direction;

/// Bit flags used to pack a signature into a lookup index
pub mod bits {
    pub const N: u8 = 0b0001; // North
    pub const E: u8 = 0b0010; // East
    pub const S: u8 = 0b0100; // South
    pub const W: u8 = 0b1000; // West
}

/// Whether the neighbor in one direction shares the tile's category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeighborMark {
    /// "X"
    Match,
    /// "."
    NoMatch,
}

impl NeighborMark {
    pub fn from_bool(matches: bool) -> Self {
        if matches {
            NeighborMark::Match
        } else {
            NeighborMark::NoMatch
        }
    }

    pub fn is_match(self) -> bool {
        self == NeighborMark::Match
    }

    pub fn as_char(self) -> char {
        match self {
            NeighborMark::Match => 'X',
            NeighborMark::NoMatch => '.',
        }
    }
}

/// Match/NoMatch for each orthogonal neighbor of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionalSignature {
    pub north: NeighborMark,
    pub east: NeighborMark,
    pub south: NeighborMark,
    pub west: NeighborMark,
}

impl DirectionalSignature {
    /// Number of distinct signatures
    pub const COUNT: usize = 16;

    pub const ISOLATED: Self = Self::uniform(NeighborMark::NoMatch);
    pub const SURROUNDED: Self = Self::uniform(NeighborMark::Match);

    pub const fn new(
        north: NeighborMark,
        east: NeighborMark,
        south: NeighborMark,
        west: NeighborMark,
    ) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    const fn uniform(mark: NeighborMark) -> Self {
        Self::new(mark, mark, mark, mark)
    }

    pub fn get(&self, direction: Direction) -> NeighborMark {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Copy of this signature with one direction replaced
    pub fn with(mut self, direction: Direction, mark: NeighborMark) -> Self {
        match direction {
            Direction::North => self.north = mark,
            Direction::East => self.east = mark,
            Direction::South => self.south = mark,
            Direction::West => self.west = mark,
        }
        self
    }

    /// Pack into a 4-bit index (see [`bits`])
    pub fn index(&self) -> usize {
        use bits::*;

        let mut packed = 0u8;
        if self.north.is_match() {
            packed |= N;
        }
        if self.east.is_match() {
            packed |= E;
        }
        if self.south.is_match() {
            packed |= S;
        }
        if self.west.is_match() {
            packed |= W;
        }
        packed as usize
    }

    /// Inverse of [`index`](Self::index); only the low 4 bits are read
    pub fn from_index(index: usize) -> Self {
        use bits::*;

        let packed = (index & 0b1111) as u8;
        Self::new(
            NeighborMark::from_bool(packed & N != 0),
            NeighborMark::from_bool(packed & E != 0),
            NeighborMark::from_bool(packed & S != 0),
            NeighborMark::from_bool(packed & W != 0),
        )
    }

    /// Every possible signature, in index order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index)
    }
}

impl std::fmt::Display for DirectionalSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n{} e{} s{} w{}",
            self.north.as_char(),
            self.east.as_char(),
            self.south.as_char(),
            self.west.as_char()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_index_covers_all_sixteen() {
        let all: HashSet<DirectionalSignature> = DirectionalSignature::all().collect();
        assert_eq!(all.len(), 16);
        for (i, sig) in DirectionalSignature::all().enumerate() {
            assert_eq!(sig.index(), i);
        }
    }

    #[test]
    fn test_index_bits_follow_directions() {
        let north_only = DirectionalSignature::ISOLATED.with(Direction::North, NeighborMark::Match);
        assert_eq!(north_only.index(), bits::N as usize);
        let west_only = DirectionalSignature::ISOLATED.with(Direction::West, NeighborMark::Match);
        assert_eq!(west_only.index(), bits::W as usize);
        assert_eq!(DirectionalSignature::SURROUNDED.index(), 15);
    }

    #[test]
    fn test_get_and_with() {
        let sig = DirectionalSignature::ISOLATED.with(Direction::South, NeighborMark::Match);
        assert_eq!(sig.get(Direction::South), NeighborMark::Match);
        for dir in [Direction::North, Direction::East, Direction::West] {
            assert_eq!(sig.get(dir), NeighborMark::NoMatch);
        }
    }

    #[test]
    fn test_display() {
        let sig = DirectionalSignature::ISOLATED.with(Direction::East, NeighborMark::Match);
        assert_eq!(sig.to_string(), "n. eX s. w.");
    }
}
