use bevy::prelude::*;

use crate::annotations::StructureAnnotation;
use crate::coords::{TileCoord, TileRect};
use crate::structure::Structure;
use crate::tiles::TileId;

use super::error::RegistryError;
use super::layout::StructureLayout;

/// Authoritative list of every structure placed in the world.
///
/// The list is fixed once the registry is built; every query is a read over
/// it, so the resource can be shared by any number of systems.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureRegistry {
    structures: Vec<Structure>,
}

/// What a registry lookup found on a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedTile<'a> {
    pub structure: &'a Structure,
    pub tile: Option<TileId>,
    pub annotation: Option<StructureAnnotation>,
}

impl StructureRegistry {
    pub fn new(structures: Vec<Structure>) -> Self {
        Self { structures }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_layout(layout: &StructureLayout) -> Self {
        Self::new(layout.structures())
    }

    /// Every structure, in the order it was registered.
    pub fn provide_structure_list(&self) -> &[Structure] {
        &self.structures
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// The structure covering `coordinate`, if any.
    ///
    /// Returns `OverlapDetected` naming every match when more than one
    /// structure covers the tile; an overlap is never resolved by picking one.
    pub fn get_intersecting_structure(
        &self,
        coordinate: TileCoord,
    ) -> Result<Option<&Structure>, RegistryError> {
        let mut matches = self
            .provide_structure_list()
            .iter()
            .filter(|s| s.does_coordinate_intersect(coordinate));

        let Some(first) = matches.next() else {
            return Ok(None);
        };
        let Some(second) = matches.next() else {
            return Ok(Some(first));
        };

        let candidates = [first, second]
            .into_iter()
            .chain(matches)
            .map(Structure::summary)
            .collect();
        Err(RegistryError::OverlapDetected {
            coordinate,
            candidates,
        })
    }

    /// Structure, tile and annotation at `coordinate`.
    pub fn tile_at(&self, coordinate: TileCoord) -> Result<Option<PlacedTile<'_>>, RegistryError> {
        let Some(structure) = self.get_intersecting_structure(coordinate)? else {
            return Ok(None);
        };
        Ok(Some(PlacedTile {
            structure,
            tile: structure.intersecting_tile(coordinate),
            annotation: structure.annotation_at(coordinate),
        }))
    }

    /// Smallest rectangle covering every structure; `None` when nothing has
    /// a non-empty footprint.
    pub fn bounds(&self) -> Option<TileRect> {
        self.structures
            .iter()
            .filter_map(Structure::bounds)
            .reduce(|acc, r| acc.union(&r))
    }

    /// Check the whole world for overlapping footprints.
    ///
    /// Only tiles where two bounding boxes overlap are visited, so the cost
    /// grows with the number of structure pairs and the area they share, not
    /// with the size of any single footprint. Reports the first shared tile
    /// (pairs in registration order, tiles top row first) with every
    /// structure that claims it.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let bounds: Vec<Option<TileRect>> =
            self.structures.iter().map(Structure::bounds).collect();
        let mut checked_tiles: u64 = 0;
        for (i, a) in self.structures.iter().enumerate() {
            let Some(a_bounds) = bounds[i] else {
                continue;
            };
            for (j, b) in self.structures.iter().enumerate().skip(i + 1) {
                let Some(shared) = bounds[j].and_then(|r| a_bounds.intersection(&r)) else {
                    continue;
                };
                checked_tiles =
                    checked_tiles.saturating_add(shared.width().saturating_mul(shared.height()));
                let clash = shared.iter().find(|&coord| {
                    a.does_coordinate_intersect(coord) && b.does_coordinate_intersect(coord)
                });
                if let Some(coordinate) = clash {
                    let candidates = self
                        .structures
                        .iter()
                        .filter(|s| s.does_coordinate_intersect(coordinate))
                        .map(Structure::summary)
                        .collect();
                    return Err(RegistryError::OverlapDetected {
                        coordinate,
                        candidates,
                    });
                }
            }
        }
        debug!(
            "StructureRegistry: {} structures, {} shared bounding-box tiles checked, no overlap",
            self.structures.len(),
            checked_tiles
        );
        Ok(())
    }
}
