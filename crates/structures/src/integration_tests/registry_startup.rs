use std::sync::Arc;

use crate::building::{RectFootprint, SingleTile};
use crate::catalog::BuildingKind;
use crate::coords::TileCoord;
use crate::registry::{Placement, StructureLayout};
use crate::structure::Structure;
use crate::test_harness::TestRealm;

#[test]
fn default_realm_loads_town() {
    let realm = TestRealm::new();
    assert_eq!(
        realm.registry().len(),
        StructureLayout::town().placements.len()
    );
    let hit = realm
        .registry()
        .get_intersecting_structure(TileCoord::new(14, 14))
        .unwrap()
        .expect("yellow brick building at the town center");
    assert_eq!(hit.name(), BuildingKind::YellowBrickBuilding.name());
}

#[test]
fn empty_realm_has_no_structures() {
    let realm = TestRealm::empty();
    assert!(realm.registry().is_empty());
    assert!(realm
        .registry()
        .get_intersecting_structure(TileCoord::new(14, 14))
        .unwrap()
        .is_none());
}

#[test]
fn custom_layout_replaces_town() {
    let realm = TestRealm::with_layout(StructureLayout::new(vec![Placement::new(
        TileCoord::new(0, 0),
        BuildingKind::Bike,
    )]));
    assert_eq!(realm.registry().len(), 1);
    assert!(realm
        .registry()
        .get_intersecting_structure(TileCoord::new(1, 0))
        .unwrap()
        .is_some());
    assert!(realm
        .registry()
        .get_intersecting_structure(TileCoord::new(14, 14))
        .unwrap()
        .is_none());
}

#[test]
fn injected_structures_are_used_verbatim() {
    let structures = vec![
        Structure::new(TileCoord::new(14, 14), Arc::new(RectFootprint::new(2, 2))),
        Structure::new(TileCoord::new(20, 20), Arc::new(SingleTile)),
    ];
    let realm = TestRealm::with_structures(structures.clone());
    assert_eq!(realm.registry().provide_structure_list(), structures.as_slice());
}

#[test]
fn registry_is_unchanged_by_updates() {
    let mut realm = TestRealm::default();
    let before = realm.registry().clone();
    realm.tick_n(5);
    assert_eq!(realm.registry(), &before);
}

#[test]
#[should_panic(expected = "invalid structure layout")]
fn overlapping_structures_fail_at_startup() {
    TestRealm::with_structures(vec![
        Structure::new(TileCoord::new(0, 0), Arc::new(SingleTile)),
        Structure::new(TileCoord::new(0, 0), Arc::new(SingleTile)),
    ]);
}
