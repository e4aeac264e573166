//! Avatar <-> structure interaction.
//!
//! Each frame the avatar's world position is snapped to a tile. When the tile
//! changes, the registry is asked what is there and the result is published as
//! events for gameplay code (doors, entering a building's footprint).

use bevy::prelude::*;

use crate::coords::{TileCoord, WorldPos};
use crate::occupancy::TileOccupancy;
use crate::registry::{RegistryError, StructureRegistry, StructureSummary};

/// A walker whose tile is tracked against the structure registry.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(TileTracker)]
pub struct Avatar {
    pub position: WorldPos,
}

impl Avatar {
    pub fn at(position: WorldPos) -> Self {
        Self { position }
    }

    /// Avatar standing in the middle of `tile`.
    pub fn on_tile(tile: TileCoord) -> Self {
        Self::at(tile.to_world_center())
    }

    pub fn tile(&self) -> TileCoord {
        self.position.to_tile()
    }
}

/// Last tile the avatar was seen on and what occupied it.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct TileTracker {
    pub tile: Option<TileCoord>,
    pub occupancy: TileOccupancy,
    pub structure: Option<StructureSummary>,
}

impl Default for TileTracker {
    fn default() -> Self {
        Self {
            tile: None,
            occupancy: TileOccupancy::Open,
            structure: None,
        }
    }
}

/// The avatar stepped onto a door tile.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct DoorContact {
    pub avatar: Entity,
    pub tile: TileCoord,
    pub structure: StructureSummary,
}

/// The avatar moved onto a structure it was not on the previous tile.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct StructureEntered {
    pub avatar: Entity,
    pub tile: TileCoord,
    pub structure: StructureSummary,
}

/// Occupancy and structure at `tile` from a single registry lookup.
fn lookup(
    registry: &StructureRegistry,
    tile: TileCoord,
) -> Result<(TileOccupancy, Option<StructureSummary>), RegistryError> {
    let placed = registry.tile_at(tile)?;
    let occupancy = TileOccupancy::from_placed(placed.as_ref());
    let structure = placed.map(|p| p.structure.summary());
    Ok((occupancy, structure))
}

/// Re-resolve every avatar whose tile changed since the last frame.
///
/// An overlap found here means the layout is broken; it is not recoverable.
pub fn track_avatar_tiles(
    registry: Res<StructureRegistry>,
    mut avatars: Query<(Entity, &Avatar, &mut TileTracker)>,
    mut door_events: EventWriter<DoorContact>,
    mut entered_events: EventWriter<StructureEntered>,
) {
    for (entity, avatar, mut tracker) in &mut avatars {
        let tile = avatar.tile();
        if tracker.tile == Some(tile) {
            continue;
        }

        let (occupancy, structure) = match lookup(&registry, tile) {
            Ok(found) => found,
            Err(err) => {
                error!("Avatar {entity:?} at {tile}: {err}");
                panic!("structure registry invariant violated: {err}");
            }
        };

        if let Some(summary) = &structure {
            if tracker.structure.as_ref() != Some(summary) {
                debug!("Avatar {entity:?} entered {summary} at {tile}");
                entered_events.send(StructureEntered {
                    avatar: entity,
                    tile,
                    structure: summary.clone(),
                });
            }
            if matches!(occupancy, TileOccupancy::Door { .. }) {
                info!("Avatar {entity:?} touched the door of {summary}");
                door_events.send(DoorContact {
                    avatar: entity,
                    tile,
                    structure: summary.clone(),
                });
            }
        }

        tracker.tile = Some(tile);
        tracker.occupancy = occupancy;
        tracker.structure = structure;
    }
}
