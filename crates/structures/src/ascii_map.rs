//! ASCII map rendering of placed structures.
//!
//! One character per tile, top row first:
//! - `.` open ground
//! - `#` blocked structure tile
//! - `:` passable structure tile (roof edges, tree tops)
//! - `D` door
//!
//! Maps are built on demand from `&StructureRegistry`.

use crate::coords::{TileCoord, TileRect};
use crate::occupancy::{classify_tile, TileOccupancy};
use crate::registry::{RegistryError, StructureRegistry};

pub fn occupancy_char(occupancy: TileOccupancy) -> char {
    match occupancy {
        TileOccupancy::Open => '.',
        TileOccupancy::Blocked { .. } => '#',
        TileOccupancy::Passable { .. } => ':',
        TileOccupancy::Door { .. } => 'D',
    }
}

/// Render `rect`, one line per tile row.
pub fn render_region(registry: &StructureRegistry, rect: TileRect) -> Result<String, RegistryError> {
    let mut out = String::new();
    for y in (rect.min.y..=rect.max.y).rev() {
        for x in rect.min.x..=rect.max.x {
            out.push(occupancy_char(classify_tile(registry, TileCoord::new(x, y))?));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Render the area covering every structure plus `margin` tiles of ground.
/// Returns `None` when the registry has nothing to draw.
pub fn render_structures(
    registry: &StructureRegistry,
    margin: u32,
) -> Result<Option<String>, RegistryError> {
    let Some(bounds) = registry.bounds() else {
        return Ok(None);
    };
    render_region(registry, bounds.expand(margin)).map(Some)
}
