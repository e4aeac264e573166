use bevy::prelude::*;

pub mod annotations;
pub mod ascii_map;
pub mod avatar;
pub mod building;
pub mod catalog;
pub mod config;
pub mod coords;
pub mod occupancy;
pub mod registry;
pub mod structure;
pub mod tiles;

#[cfg(test)]
pub mod test_harness;

pub use building::Building;
pub use coords::{TileCoord, WorldPos};
pub use registry::{RegistryError, StructureLayout, StructureRegistry};
pub use structure::Structure;

use avatar::{track_avatar_tiles, DoorContact, StructureEntered};
use registry::{validate_registry, SkipDefaultLayout};

/// Registers the structure registry, its startup validation and the
/// avatar interaction system.
///
/// The registry is built from `StructureLayout` while the plugin is added.
/// Insert a `StructureLayout`, a `StructureRegistry` or `SkipDefaultLayout`
/// BEFORE adding the plugin to change what gets built.
pub struct StructuresPlugin;

impl Plugin for StructuresPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StructureLayout>();

        if !app.world().contains_resource::<StructureRegistry>() {
            let registry = if app.world().contains_resource::<SkipDefaultLayout>() {
                StructureRegistry::empty()
            } else {
                StructureRegistry::from_layout(app.world().resource::<StructureLayout>())
            };
            app.insert_resource(registry);
        }

        app.add_event::<DoorContact>()
            .add_event::<StructureEntered>()
            .add_systems(Startup, validate_registry)
            .add_systems(Update, track_avatar_tiles);
    }
}
