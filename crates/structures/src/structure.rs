use std::fmt;
use std::sync::Arc;

use crate::annotations::StructureAnnotation;
use crate::building::Building;
use crate::catalog::BuildingKind;
use crate::coords::{TileCoord, TileRect};
use crate::registry::StructureSummary;
use crate::tiles::TileId;

/// A building placed in the world at a fixed anchor tile.
///
/// Immutable once created. Cloning shares the footprint. Two structures are
/// equal when they share an anchor and their footprints share a name and an
/// extent.
#[derive(Clone)]
pub struct Structure {
    anchor: TileCoord,
    footprint: Arc<dyn Building>,
}

impl Structure {
    /// Place `footprint` with its bottom-left tile at `anchor`. No bounds
    /// checking is done here; overlap is checked by the registry.
    pub fn new(anchor: TileCoord, footprint: Arc<dyn Building>) -> Self {
        Self { anchor, footprint }
    }

    pub fn of(anchor: TileCoord, kind: BuildingKind) -> Self {
        Self::new(anchor, Arc::new(kind.build()))
    }

    pub fn anchor(&self) -> TileCoord {
        self.anchor
    }

    pub fn footprint(&self) -> &dyn Building {
        self.footprint.as_ref()
    }

    pub fn name(&self) -> &str {
        self.footprint.name()
    }

    pub fn does_coordinate_intersect(&self, candidate: TileCoord) -> bool {
        self.footprint.contains_coordinate(candidate, self.anchor)
    }

    pub fn bounds(&self) -> Option<TileRect> {
        self.footprint.bounds(self.anchor)
    }

    /// Tile drawn at `candidate`, if it lies on this structure.
    pub fn intersecting_tile(&self, candidate: TileCoord) -> Option<TileId> {
        if !self.does_coordinate_intersect(candidate) {
            return None;
        }
        self.footprint.tile_at(candidate, self.anchor)
    }

    pub fn annotation_at(&self, candidate: TileCoord) -> Option<StructureAnnotation> {
        let tile = self.intersecting_tile(candidate)?;
        self.footprint.annotations().annotation_for_tile(tile)
    }

    pub fn summary(&self) -> StructureSummary {
        StructureSummary {
            name: self.name().to_string(),
            anchor: self.anchor,
        }
    }
}

impl PartialEq for Structure {
    fn eq(&self, other: &Self) -> bool {
        if self.anchor != other.anchor {
            return false;
        }
        Arc::ptr_eq(&self.footprint, &other.footprint)
            || (self.footprint.name() == other.footprint.name()
                && self.footprint.extent() == other.footprint.extent())
    }
}

impl Eq for Structure {}

impl fmt::Debug for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Structure")
            .field("name", &self.footprint.name())
            .field("anchor", &self.anchor)
            .finish()
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.footprint.name(), self.anchor)
    }
}
