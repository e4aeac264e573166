use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::BuildingKind;
use crate::config::{TOWN_CENTER_X, TOWN_CENTER_Y};
use crate::coords::TileCoord;
use crate::structure::Structure;

/// One catalog building at one anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub anchor: TileCoord,
    pub kind: BuildingKind,
}

impl Placement {
    pub const fn new(anchor: TileCoord, kind: BuildingKind) -> Self {
        Self { anchor, kind }
    }

    pub fn to_structure(self) -> Structure {
        Structure::of(self.anchor, self.kind)
    }
}

/// Hand-authored placements the registry is built from at startup.
///
/// Insert a different `StructureLayout` before `StructuresPlugin` to load
/// another town.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureLayout {
    pub placements: Vec<Placement>,
}

impl StructureLayout {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The town square: the yellow brick building with props around it and
    /// the light house to the east.
    pub fn town() -> Self {
        let center = TileCoord::new(TOWN_CENTER_X, TOWN_CENTER_Y);
        Self::new(vec![
            Placement::new(center, BuildingKind::YellowBrickBuilding),
            Placement::new(center.offset(-2, 0), BuildingKind::MailBox),
            Placement::new(center.offset(9, 0), BuildingKind::LampPost),
            Placement::new(center.offset(11, 0), BuildingKind::ThreeTiledVerticalTree),
            Placement::new(center.offset(0, -2), BuildingKind::Bike),
            Placement::new(center.offset(14, -4), BuildingKind::LightHouse),
            Placement::new(center.offset(-8, 0), BuildingKind::MarketHouse),
        ])
    }

    pub fn structures(&self) -> Vec<Structure> {
        self.placements.iter().map(|p| p.to_structure()).collect()
    }
}

impl Default for StructureLayout {
    fn default() -> Self {
        Self::town()
    }
}

/// Marker resource that, when present, stops `StructuresPlugin` from
/// building the registry out of `StructureLayout`. Used by test harnesses
/// that insert their own registry.
#[derive(Resource)]
pub struct SkipDefaultLayout;
