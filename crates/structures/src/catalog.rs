use serde::{Deserialize, Serialize};

use crate::annotations::{StructureAnnotation, StructureAnnotations};
use crate::building::TiledBuilding;
use crate::coords::TileExtent;
use crate::tiles::TileMatrix;

/// Every building and prop that can be placed in the town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuildingKind {
    YellowBrickBuilding,
    LightHouse,
    MarketHouse,
    RedRoofBuilding,
    BlueRoofBuilding,
    GreenRoofBuilding,
    PurpleRoofBuilding,
    RedBrickedBuildings,
    Bike,
    LampPost,
    MailBox,
    ThreeTiledVerticalTree,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 12] = [
        BuildingKind::YellowBrickBuilding,
        BuildingKind::LightHouse,
        BuildingKind::MarketHouse,
        BuildingKind::RedRoofBuilding,
        BuildingKind::BlueRoofBuilding,
        BuildingKind::GreenRoofBuilding,
        BuildingKind::PurpleRoofBuilding,
        BuildingKind::RedBrickedBuildings,
        BuildingKind::Bike,
        BuildingKind::LampPost,
        BuildingKind::MailBox,
        BuildingKind::ThreeTiledVerticalTree,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildingKind::YellowBrickBuilding => "yellow brick building",
            BuildingKind::LightHouse => "light house",
            BuildingKind::MarketHouse => "market house",
            BuildingKind::RedRoofBuilding => "red roof building",
            BuildingKind::BlueRoofBuilding => "blue roof building",
            BuildingKind::GreenRoofBuilding => "green roof building",
            BuildingKind::PurpleRoofBuilding => "purple roof building",
            BuildingKind::RedBrickedBuildings => "red bricked buildings",
            BuildingKind::Bike => "bike",
            BuildingKind::LampPost => "lamp post",
            BuildingKind::MailBox => "mail box",
            BuildingKind::ThreeTiledVerticalTree => "three tiled vertical tree",
        }
    }

    /// Props are small decorations rather than enterable buildings.
    pub fn is_prop(self) -> bool {
        matches!(
            self,
            BuildingKind::Bike
                | BuildingKind::LampPost
                | BuildingKind::MailBox
                | BuildingKind::ThreeTiledVerticalTree
        )
    }

    pub fn extent(self) -> TileExtent {
        let matrix = self.matrix();
        TileExtent::new(matrix.width(), matrix.height())
    }

    /// Footprint with tile layout and annotations for this kind.
    pub fn build(self) -> TiledBuilding {
        TiledBuilding::new(self.name(), self.matrix()).with_annotations(self.annotations())
    }

    // Tile-sheet indices, top row first.
    fn matrix(self) -> TileMatrix {
        match self {
            BuildingKind::YellowBrickBuilding => TileMatrix::from_indices(&[
                &[64, 65, 66, 67, 68, 69, 70, 39],
                &[48, 49, 50, 51, 52, 53, 54, 23],
                &[32, 33, 34, 35, 36, 37, 38],
                &[16, 17, 18, 19, 20, 21, 22],
                &[0, 1, 2, 3, 4, 5, 6],
            ]),
            BuildingKind::LightHouse => TileMatrix::from_indices(&[
                &[125, 126, 127],
                &[109, 110, 111],
                &[93, 94, 95],
                &[77, 78, 79],
                &[61, 62, 63],
                &[45, 46, 47],
                &[29, 30, 31],
                &[13, 14, 15],
            ]),
            BuildingKind::MarketHouse => TileMatrix::from_indices(&[
                &[137, 138, 139, 140],
                &[121, 122, 123, 124],
                &[105, 106, 107, 108],
                &[89, 90, 91, 92],
                &[73, 74, 75, 76],
            ]),
            BuildingKind::RedRoofBuilding => TileMatrix::from_indices(&[
                &[205, 206, 207, 254, 255],
                &[189, 190, 191, 238, 239],
                &[173, 174, 175, 222, 223],
                &[157, 158, 159],
                &[141, 142, 143],
            ]),
            BuildingKind::BlueRoofBuilding => TileMatrix::from_indices(&[
                &[192, 193, 194, 195, 196],
                &[176, 177, 178, 179, 180],
                &[160, 161, 162, 163, 164],
            ]),
            BuildingKind::GreenRoofBuilding => TileMatrix::from_indices(&[
                &[144, 145, 146, 147, 148],
                &[128, 129, 130, 131, 132],
                &[112, 113, 114, 115, 116],
                &[96, 97, 98, 99, 100],
                &[80, 81, 82, 83, 84],
            ]),
            BuildingKind::PurpleRoofBuilding => TileMatrix::from_indices(&[
                &[56, 57, 58, 59, 60],
                &[40, 41, 42, 43, 44],
                &[24, 25, 26, 27, 28],
                &[8, 9, 10, 11, 12],
            ]),
            BuildingKind::RedBrickedBuildings => TileMatrix::from_indices(&[
                &[248, 249, 250, 251, 252, 39],
                &[232, 233, 234, 235, 236, 23],
                &[247, 213, 213, 213, 215],
                &[231, 197, 197, 197, 199],
            ]),
            BuildingKind::Bike => TileMatrix::from_indices(&[&[243, 244]]),
            BuildingKind::LampPost => TileMatrix::from_indices(&[&[87], &[71]]),
            BuildingKind::MailBox => TileMatrix::from_indices(&[&[88], &[72]]),
            BuildingKind::ThreeTiledVerticalTree => {
                TileMatrix::from_indices(&[&[152], &[136], &[120]])
            }
        }
    }

    fn annotations(self) -> StructureAnnotations {
        match self {
            BuildingKind::YellowBrickBuilding => StructureAnnotations::new()
                .with(StructureAnnotation::Door, &[67])
                .with(
                    StructureAnnotation::IgnorePhysics,
                    &[64, 65, 66, 68, 69, 70, 39],
                ),
            BuildingKind::MailBox => {
                StructureAnnotations::new().with(StructureAnnotation::IgnorePhysics, &[72])
            }
            BuildingKind::ThreeTiledVerticalTree => {
                StructureAnnotations::new().with(StructureAnnotation::IgnorePhysics, &[120])
            }
            _ => StructureAnnotations::new(),
        }
    }
}
