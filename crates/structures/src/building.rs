//! Footprint capability consumed by the structure registry.
//!
//! A [`Building`] knows its own shape and answers containment queries
//! relative to an anchor. The registry never looks inside a footprint; it
//! only calls [`Building::contains_coordinate`]. New building shapes are
//! added by implementing the trait.

use std::fmt::Debug;

use crate::annotations::StructureAnnotations;
use crate::coords::{TileCoord, TileExtent, TileRect};
use crate::tiles::{TileId, TileMatrix};

/// Shape-bearing footprint of a structure.
///
/// Anchors are the bottom-left tile of the footprint's bounding box.
/// Implementations must be pure: the same `(candidate, anchor)` always gives
/// the same answer, and answering never fails.
pub trait Building: Debug + Send + Sync + 'static {
    /// Human-readable identifier used in logs and error messages.
    fn name(&self) -> &str;

    /// Bounding box of the footprint. Every contained tile lies inside the
    /// box anchored at the structure's anchor.
    fn extent(&self) -> TileExtent;

    /// Whether `candidate` is inside this footprint when anchored at `anchor`.
    fn contains_coordinate(&self, candidate: TileCoord, anchor: TileCoord) -> bool;

    /// Tile drawn at `candidate`, for footprints backed by a tile sheet.
    fn tile_at(&self, _candidate: TileCoord, _anchor: TileCoord) -> Option<TileId> {
        None
    }

    fn annotations(&self) -> StructureAnnotations {
        StructureAnnotations::default()
    }

    /// Bounding rectangle when anchored at `anchor`; `None` for an empty footprint.
    fn bounds(&self, anchor: TileCoord) -> Option<TileRect> {
        TileRect::anchored(anchor, self.extent())
    }
}

/// Offset of `candidate` from `anchor`, widened so no coordinate overflows.
pub(crate) fn offset_from(candidate: TileCoord, anchor: TileCoord) -> (i64, i64) {
    (
        i64::from(candidate.x) - i64::from(anchor.x),
        i64::from(candidate.y) - i64::from(anchor.y),
    )
}

/// One-tile footprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleTile;

impl Building for SingleTile {
    fn name(&self) -> &str {
        "single-tile"
    }

    fn extent(&self) -> TileExtent {
        TileExtent::new(1, 1)
    }

    fn contains_coordinate(&self, candidate: TileCoord, anchor: TileCoord) -> bool {
        candidate == anchor
    }
}

/// Solid rectangle of `width` x `height` tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectFootprint {
    pub width: u32,
    pub height: u32,
}

impl RectFootprint {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Building for RectFootprint {
    fn name(&self) -> &str {
        "rect"
    }

    fn extent(&self) -> TileExtent {
        TileExtent::new(self.width, self.height)
    }

    fn contains_coordinate(&self, candidate: TileCoord, anchor: TileCoord) -> bool {
        let (dx, dy) = offset_from(candidate, anchor);
        (0..i64::from(self.width)).contains(&dx) && (0..i64::from(self.height)).contains(&dy)
    }
}

/// Footprint drawn from a tile matrix. A tile is inside the footprint when
/// the matrix authors a cell for it, so ragged rows give non-rectangular
/// shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiledBuilding {
    name: String,
    matrix: TileMatrix,
    annotations: StructureAnnotations,
}

impl TiledBuilding {
    pub fn new(name: impl Into<String>, matrix: TileMatrix) -> Self {
        Self {
            name: name.into(),
            matrix,
            annotations: StructureAnnotations::default(),
        }
    }

    pub fn with_annotations(mut self, annotations: StructureAnnotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn matrix(&self) -> &TileMatrix {
        &self.matrix
    }
}

impl Building for TiledBuilding {
    fn name(&self) -> &str {
        &self.name
    }

    fn extent(&self) -> TileExtent {
        TileExtent::new(self.matrix.width(), self.matrix.height())
    }

    fn contains_coordinate(&self, candidate: TileCoord, anchor: TileCoord) -> bool {
        self.tile_at(candidate, anchor).is_some()
    }

    fn tile_at(&self, candidate: TileCoord, anchor: TileCoord) -> Option<TileId> {
        let (dx, dy) = offset_from(candidate, anchor);
        self.matrix.tile_at_offset(dx, dy)
    }

    fn annotations(&self) -> StructureAnnotations {
        self.annotations.clone()
    }
}
