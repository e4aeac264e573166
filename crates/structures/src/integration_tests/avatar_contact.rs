use crate::catalog::BuildingKind;
use crate::coords::{TileCoord, WorldPos};
use crate::occupancy::TileOccupancy;
use crate::test_harness::TestRealm;
use crate::tiles::TileId;

// Door of the yellow brick building in the default town.
const DOOR: TileCoord = TileCoord::new(17, 18);

#[test]
fn avatar_on_open_ground_sees_nothing() {
    let mut realm = TestRealm::new();
    let avatar = realm.spawn_avatar(TileCoord::new(40, 40));
    realm.tick();

    let tracker = realm.tracker(avatar);
    assert_eq!(tracker.tile, Some(TileCoord::new(40, 40)));
    assert_eq!(tracker.occupancy, TileOccupancy::Open);
    assert!(tracker.structure.is_none());
    assert!(realm.events().doors.is_empty());
    assert!(realm.events().entered.is_empty());
}

#[test]
fn walking_onto_door_fires_door_contact() {
    let mut realm = TestRealm::new();
    let avatar = realm.spawn_avatar(TileCoord::new(17, 21));
    realm.tick();
    realm.walk(avatar, &[TileCoord::new(17, 20), TileCoord::new(17, 19), DOOR]);

    let doors = &realm.events().doors;
    assert_eq!(doors.len(), 1);
    assert_eq!(doors[0].avatar, avatar);
    assert_eq!(doors[0].tile, DOOR);
    assert_eq!(doors[0].structure.name, BuildingKind::YellowBrickBuilding.name());
    assert_eq!(
        realm.tracker(avatar).occupancy,
        TileOccupancy::Door { tile: TileId(67) }
    );
}

#[test]
fn standing_still_does_not_repeat_events() {
    let mut realm = TestRealm::new();
    let avatar = realm.spawn_avatar(DOOR);
    realm.tick_n(4);
    assert_eq!(realm.tracker(avatar).tile, Some(DOOR));
    assert_eq!(realm.events().doors.len(), 1);
    assert_eq!(realm.events().entered.len(), 1);
}

#[test]
fn moving_within_a_tile_keeps_state() {
    let mut realm = TestRealm::new();
    let avatar = realm.spawn_avatar(DOOR);
    realm.tick();
    // Still inside tile (17, 18) in world units.
    let origin = DOOR.to_world_origin();
    realm.move_avatar_to(avatar, WorldPos::new(origin.x + 1.0, origin.y + 15.0));
    realm.tick();
    assert_eq!(realm.events().doors.len(), 1);
}

#[test]
fn walking_across_a_building_enters_it_once() {
    let mut realm = TestRealm::new();
    let avatar = realm.spawn_avatar(TileCoord::new(13, 18));
    realm.tick();
    // Along the roof edge of the yellow brick building and off the far side.
    let path: Vec<TileCoord> = (14..=23).map(|x| TileCoord::new(x, 18)).collect();
    realm.walk(avatar, &path);

    let entered = &realm.events().entered;
    assert_eq!(entered.len(), 1);
    assert_eq!(entered[0].tile, TileCoord::new(14, 18));
    assert_eq!(realm.events().doors.len(), 1);
    assert!(realm.tracker(avatar).structure.is_none());
}

#[test]
fn stepping_between_structures_enters_each() {
    let mut realm = TestRealm::new();
    // Lamp post at (23, 14) and tree at (25, 14) in the default town.
    let avatar = realm.spawn_avatar(TileCoord::new(22, 15));
    realm.tick();
    realm.walk(
        avatar,
        &[
            TileCoord::new(23, 15),
            TileCoord::new(24, 15),
            TileCoord::new(25, 15),
        ],
    );

    let names: Vec<&str> = realm
        .events()
        .entered
        .iter()
        .map(|e| e.structure.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            BuildingKind::LampPost.name(),
            BuildingKind::ThreeTiledVerticalTree.name()
        ]
    );
}

#[test]
fn empty_realm_never_reports_contacts() {
    let mut realm = TestRealm::empty();
    let avatar = realm.spawn_avatar(DOOR);
    realm.walk(avatar, &[TileCoord::new(14, 14), TileCoord::new(0, 0)]);
    assert!(realm.events().doors.is_empty());
    assert!(realm.events().entered.is_empty());
    assert_eq!(realm.tracker(avatar).occupancy, TileOccupancy::Open);
}
