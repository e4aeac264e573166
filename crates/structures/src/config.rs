/// World-space units covered by one tile along each axis.
pub const TILE_SIZE: f32 = 16.0;

/// Bottom-left anchor of the yellow brick building in the default town.
pub const TOWN_CENTER_X: i32 = 14;
pub const TOWN_CENTER_Y: i32 = 14;

/// Tiles of open ground drawn around the structures in diagnostic maps.
pub const MAP_MARGIN: u32 = 2;
