use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::TILE_SIZE;

/// Discrete tile-grid position. The y axis points up: `y + 1` is the row
/// above `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Lower corner of the tile in world space.
    pub fn to_world_origin(self) -> WorldPos {
        WorldPos::new(self.x as f32 * TILE_SIZE, self.y as f32 * TILE_SIZE)
    }

    pub fn to_world_center(self) -> WorldPos {
        WorldPos::new(
            self.x as f32 * TILE_SIZE + TILE_SIZE * 0.5,
            self.y as f32 * TILE_SIZE + TILE_SIZE * 0.5,
        )
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for TileCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Continuous world-space position, as reported by movement and input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Tile containing this position.
    pub fn to_tile(self) -> TileCoord {
        TileCoord::new(
            (self.x / TILE_SIZE).floor() as i32,
            (self.y / TILE_SIZE).floor() as i32,
        )
    }

    // Component-wise rounding without tile-size scaling, for positions that
    // are already expressed in tile units.

    pub fn floor(self) -> TileCoord {
        TileCoord::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    pub fn ceil(self) -> TileCoord {
        TileCoord::new(self.x.ceil() as i32, self.y.ceil() as i32)
    }

    pub fn round(self) -> TileCoord {
        TileCoord::new(self.x.round() as i32, self.y.round() as i32)
    }
}

/// Bounding-box size of a footprint, in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileExtent {
    pub width: u32,
    pub height: u32,
}

impl TileExtent {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Inclusive rectangle of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileRect {
    pub min: TileCoord,
    pub max: TileCoord,
}

impl TileRect {
    /// Rectangle spanning both corners, in any order.
    pub fn from_corners(a: TileCoord, b: TileCoord) -> Self {
        Self {
            min: TileCoord::new(a.x.min(b.x), a.y.min(b.y)),
            max: TileCoord::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Rectangle of `extent` whose bottom-left tile is `anchor`.
    /// Returns `None` for an empty extent.
    pub fn anchored(anchor: TileCoord, extent: TileExtent) -> Option<Self> {
        if extent.is_empty() {
            return None;
        }
        let max_x = i64::from(anchor.x) + i64::from(extent.width) - 1;
        let max_y = i64::from(anchor.y) + i64::from(extent.height) - 1;
        Some(Self {
            min: anchor,
            max: TileCoord::new(clamp_to_i32(max_x), clamp_to_i32(max_y)),
        })
    }

    /// Columns covered. A rect spanning every `i32` column has width `2^32`.
    pub fn width(&self) -> u64 {
        (i64::from(self.max.x) - i64::from(self.min.x) + 1) as u64
    }

    pub fn height(&self) -> u64 {
        (i64::from(self.max.y) - i64::from(self.min.y) + 1) as u64
    }

    pub fn contains(&self, coord: TileCoord) -> bool {
        (self.min.x..=self.max.x).contains(&coord.x) && (self.min.y..=self.max.y).contains(&coord.y)
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &TileRect) -> TileRect {
        TileRect {
            min: TileCoord::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: TileCoord::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Tiles covered by both; `None` when they do not touch.
    pub fn intersection(&self, other: &TileRect) -> Option<TileRect> {
        let min = TileCoord::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = TileCoord::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        (min.x <= max.x && min.y <= max.y).then_some(TileRect { min, max })
    }

    /// Grow by `margin` tiles on every side.
    pub fn expand(&self, margin: u32) -> TileRect {
        let m = i64::from(margin);
        TileRect {
            min: TileCoord::new(
                clamp_to_i32(i64::from(self.min.x) - m),
                clamp_to_i32(i64::from(self.min.y) - m),
            ),
            max: TileCoord::new(
                clamp_to_i32(i64::from(self.max.x) + m),
                clamp_to_i32(i64::from(self.max.y) + m),
            ),
        }
    }

    /// Tiles in map order: top row first, left to right within a row.
    pub fn iter(&self) -> impl Iterator<Item = TileCoord> + '_ {
        (self.min.y..=self.max.y)
            .rev()
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| TileCoord::new(x, y)))
    }
}

fn clamp_to_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
