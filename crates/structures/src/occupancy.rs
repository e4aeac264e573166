use serde::{Deserialize, Serialize};

use crate::annotations::StructureAnnotation;
use crate::coords::TileCoord;
use crate::registry::{PlacedTile, RegistryError, StructureRegistry};
use crate::tiles::TileId;

/// How a tile behaves for something walking across the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileOccupancy {
    /// No structure on the tile.
    Open,
    /// Solid part of a structure. `tile` is `None` for footprints that are
    /// not drawn from a tile sheet.
    Blocked { tile: Option<TileId> },
    /// Drawn over the walker (roof edge, tree top) without blocking.
    Passable { tile: TileId },
    /// Entrance of a structure.
    Door { tile: TileId },
}

impl TileOccupancy {
    pub fn is_walkable(self) -> bool {
        !matches!(self, TileOccupancy::Blocked { .. })
    }

    pub fn is_structure(self) -> bool {
        !matches!(self, TileOccupancy::Open)
    }

    /// Occupancy of a tile already resolved through
    /// [`StructureRegistry::tile_at`].
    pub fn from_placed(placed: Option<&PlacedTile<'_>>) -> Self {
        let Some(placed) = placed else {
            return TileOccupancy::Open;
        };
        match (placed.tile, placed.annotation) {
            (Some(tile), Some(StructureAnnotation::Door)) => TileOccupancy::Door { tile },
            (Some(tile), Some(StructureAnnotation::IgnorePhysics)) => {
                TileOccupancy::Passable { tile }
            }
            (tile, _) => TileOccupancy::Blocked { tile },
        }
    }
}

/// Classify `coordinate` from the structure covering it.
pub fn classify_tile(
    registry: &StructureRegistry,
    coordinate: TileCoord,
) -> Result<TileOccupancy, RegistryError> {
    let placed = registry.tile_at(coordinate)?;
    Ok(TileOccupancy::from_placed(placed.as_ref()))
}
