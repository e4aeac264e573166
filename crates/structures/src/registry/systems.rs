use bevy::prelude::*;

use super::store::StructureRegistry;

/// Startup check of the whole layout. Panics on the first overlap.
pub fn validate_registry(registry: Res<StructureRegistry>) {
    match registry.validate() {
        Ok(()) => info!(
            "StructureRegistry: {} structures registered",
            registry.len()
        ),
        Err(err) => {
            error!("StructureRegistry: {err}");
            panic!("invalid structure layout: {err}");
        }
    }
}
