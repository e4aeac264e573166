mod error;
mod layout;
mod store;
mod systems;

pub use error::{RegistryError, StructureSummary};
pub use layout::{Placement, SkipDefaultLayout, StructureLayout};
pub use store::{PlacedTile, StructureRegistry};
pub use systems::validate_registry;
