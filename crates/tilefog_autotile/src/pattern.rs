//! Decoding of 3x3 textual neighbor patterns.
//!
//! A pattern is three rows of three cells separated by `|`, top row first:
//!
//! ```text
//!  X      " X |XXX| . "
//! XXX     north, east and west match; south does not
//!  .
//! ```
//!
//! Only the four mid-edge cells are read. The center and the corners are
//! there so the pattern looks like the tile it describes.

use crate::{AutotileError, DirectionalSignature, NeighborMark};

/// Marker for an occupied (matching) cell
pub const OCCUPIED: char = 'X';
/// Separator between pattern rows
pub const ROW_SEPARATOR: char = '|';

/// Decode a pattern into a [`DirectionalSignature`]
pub fn decode_pattern(pattern: &str) -> Result<DirectionalSignature, AutotileError> {
    let malformed = |reason: String| AutotileError::MalformedPattern {
        pattern: pattern.to_string(),
        reason,
    };

    let rows: Vec<Vec<char>> = pattern
        .split(ROW_SEPARATOR)
        .map(|row| row.chars().collect())
        .collect();
    if rows.len() != 3 {
        return Err(malformed(format!("expected 3 rows, found {}", rows.len())));
    }
    for (y, row) in rows.iter().enumerate() {
        if row.len() != 3 {
            return Err(malformed(format!(
                "row {y} has {} cells, expected 3",
                row.len()
            )));
        }
    }

    let mark = |x: usize, y: usize| NeighborMark::from_bool(rows[y][x] == OCCUPIED);
    Ok(DirectionalSignature::new(
        mark(1, 0),
        mark(2, 1),
        mark(1, 2),
        mark(0, 1),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use NeighborMark::{Match, NoMatch};

    #[test]
    fn test_decode_reads_mid_edges() {
        let sig = decode_pattern(" X |XX.| . ").unwrap();
        assert_eq!(sig, DirectionalSignature::new(Match, NoMatch, NoMatch, Match));
    }

    #[test]
    fn test_decode_ignores_center_and_corners() {
        let plain = decode_pattern(" . |.X.| . ").unwrap();
        let noisy = decode_pattern("X.X|.?.|X.X").unwrap();
        assert_eq!(plain, DirectionalSignature::ISOLATED);
        assert_eq!(noisy, DirectionalSignature::ISOLATED);
    }

    #[test]
    fn test_any_other_char_is_no_match() {
        let sig = decode_pattern("?x?|o#X|? ?").unwrap();
        assert_eq!(sig, DirectionalSignature::new(NoMatch, Match, NoMatch, NoMatch));
    }

    #[test]
    fn test_decode_is_deterministic() {
        let pattern = " X |.XX| X ";
        assert_eq!(decode_pattern(pattern).unwrap(), decode_pattern(pattern).unwrap());
    }

    #[test]
    fn test_malformed_patterns() {
        for pattern in [
            "",
            " X |XXX",
            " X |XXX| X | X ",
            " X |XXXX| X ",
            " X |XX| X ",
            " X XXX  X ",
        ] {
            let result = decode_pattern(pattern);
            assert!(
                matches!(result, Err(AutotileError::MalformedPattern { .. })),
                "expected malformed for {pattern:?}"
            );
        }
    }
}
