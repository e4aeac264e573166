use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a tile in the town tile sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile#{}", self.0)
    }
}

/// Tile layout of a structure, authored the way it looks on screen: the
/// first row is the top of the structure and the last row sits on the
/// anchor row. So
///
/// ```text
/// [1, 2, 3]
/// [4, 5, 6]
/// [7, 8, 9]
/// ```
///
/// places `7, 8, 9` on the anchor row and `1, 2, 3` two rows above it.
///
/// Rows may be ragged. A cell missing from a short row is not part of the
/// structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TileMatrix {
    rows: Vec<Vec<TileId>>,
}

impl TileMatrix {
    pub fn new(rows: Vec<Vec<TileId>>) -> Self {
        Self { rows }
    }

    /// Build from raw tile-sheet indices.
    pub fn from_indices(rows: &[&[u16]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| row.iter().copied().map(TileId).collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> &[Vec<TileId>] {
        &self.rows
    }

    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn width(&self) -> u32 {
        self.rows.iter().map(Vec::len).max().unwrap_or(0) as u32
    }

    /// Tile `dx` columns right of and `dy` rows above the anchor.
    pub fn tile_at_offset(&self, dx: i64, dy: i64) -> Option<TileId> {
        let height = self.rows.len() as i64;
        if dx < 0 || dy < 0 || dy >= height {
            return None;
        }
        let row = &self.rows[(height - 1 - dy) as usize];
        row.get(dx as usize).copied()
    }

    /// Number of authored cells.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TileMatrix {
        TileMatrix::from_indices(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]])
    }

    #[test]
    fn test_last_row_sits_on_anchor() {
        let m = sample();
        assert_eq!(m.tile_at_offset(0, 0), Some(TileId(7)));
        assert_eq!(m.tile_at_offset(2, 0), Some(TileId(9)));
        assert_eq!(m.tile_at_offset(0, 2), Some(TileId(1)));
        assert_eq!(m.tile_at_offset(1, 1), Some(TileId(5)));
    }

    #[test]
    fn test_outside_offsets_are_none() {
        let m = sample();
        assert_eq!(m.tile_at_offset(-1, 0), None);
        assert_eq!(m.tile_at_offset(0, -1), None);
        assert_eq!(m.tile_at_offset(3, 0), None);
        assert_eq!(m.tile_at_offset(0, 3), None);
    }

    #[test]
    fn test_ragged_rows() {
        // Wide top, narrow bottom.
        let m = TileMatrix::from_indices(&[&[1, 2, 3, 4], &[5, 6]]);
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 2);
        assert_eq!(m.cell_count(), 6);
        assert_eq!(m.tile_at_offset(3, 1), Some(TileId(4)));
        assert_eq!(m.tile_at_offset(3, 0), None);
    }

    #[test]
    fn test_empty_matrix() {
        let m = TileMatrix::default();
        assert_eq!(m.width(), 0);
        assert_eq!(m.height(), 0);
        assert_eq!(m.tile_at_offset(0, 0), None);
    }
}
