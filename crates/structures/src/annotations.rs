use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tiles::TileId;

/// Semantic tag attached to specific tiles of a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StructureAnnotation {
    /// Entrance tile. Walking onto it counts as touching the door.
    Door,
    /// Decorative tile that avatars walk through (roof overhangs, tree tops).
    IgnorePhysics,
}

/// Annotation -> tiles table for one structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructureAnnotations {
    tiles: BTreeMap<StructureAnnotation, Vec<TileId>>,
}

impl StructureAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag `tiles` with `annotation`. Repeated calls accumulate.
    pub fn with(mut self, annotation: StructureAnnotation, tiles: &[u16]) -> Self {
        self.tiles
            .entry(annotation)
            .or_default()
            .extend(tiles.iter().copied().map(TileId));
        self
    }

    pub fn tiles_for(&self, annotation: StructureAnnotation) -> &[TileId] {
        self.tiles.get(&annotation).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First annotation (in declaration order) that lists `tile`.
    pub fn annotation_for_tile(&self, tile: TileId) -> Option<StructureAnnotation> {
        self.tiles
            .iter()
            .find(|(_, tiles)| tiles.contains(&tile))
            .map(|(annotation, _)| *annotation)
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.values().all(Vec::is_empty)
    }
}
