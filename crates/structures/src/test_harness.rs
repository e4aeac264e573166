//! # TestRealm — headless integration test harness
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `StructuresPlugin` so
//! registry queries and avatar interaction can be exercised without a window.

use bevy::app::App;
use bevy::prelude::*;

use crate::avatar::{Avatar, DoorContact, StructureEntered, TileTracker};
use crate::coords::{TileCoord, WorldPos};
use crate::registry::{SkipDefaultLayout, StructureLayout, StructureRegistry};
use crate::structure::Structure;
use crate::StructuresPlugin;

/// Events seen since the harness was created.
#[derive(Resource, Default, Debug)]
pub struct EventLog {
    pub doors: Vec<DoorContact>,
    pub entered: Vec<StructureEntered>,
}

fn record_events(
    mut doors: EventReader<DoorContact>,
    mut entered: EventReader<StructureEntered>,
    mut log: ResMut<EventLog>,
) {
    log.doors.extend(doors.read().cloned());
    log.entered.extend(entered.read().cloned());
}

pub struct TestRealm {
    app: App,
}

impl TestRealm {
    /// Realm with the default town layout.
    pub fn new() -> Self {
        Self::build(|_| {})
    }

    /// Realm with no structures at all.
    pub fn empty() -> Self {
        Self::build(|app| {
            app.insert_resource(SkipDefaultLayout);
        })
    }

    pub fn with_layout(layout: StructureLayout) -> Self {
        Self::build(move |app| {
            app.insert_resource(layout);
        })
    }

    /// Realm whose registry is exactly `structures`. Startup validation runs
    /// on the first update, so an overlapping set panics there.
    pub fn with_structures(structures: Vec<Structure>) -> Self {
        Self::build(move |app| {
            app.insert_resource(StructureRegistry::new(structures));
        })
    }

    fn build(setup: impl FnOnce(&mut App)) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Resources inserted BEFORE the plugin decide what registry it builds.
        setup(&mut app);
        app.add_plugins(StructuresPlugin);
        app.init_resource::<EventLog>()
            .add_systems(PostUpdate, record_events);

        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    pub fn registry(&self) -> &StructureRegistry {
        self.app.world().resource::<StructureRegistry>()
    }

    pub fn spawn_avatar(&mut self, tile: TileCoord) -> Entity {
        self.app.world_mut().spawn(Avatar::on_tile(tile)).id()
    }

    pub fn move_avatar(&mut self, avatar: Entity, tile: TileCoord) {
        self.move_avatar_to(avatar, tile.to_world_center());
    }

    pub fn move_avatar_to(&mut self, avatar: Entity, position: WorldPos) {
        let mut entity = self.app.world_mut().entity_mut(avatar);
        if let Some(mut a) = entity.get_mut::<Avatar>() {
            a.position = position;
        }
    }

    pub fn tracker(&self, avatar: Entity) -> TileTracker {
        self.app
            .world()
            .get::<TileTracker>(avatar)
            .cloned()
            .unwrap_or_default()
    }

    pub fn events(&self) -> &EventLog {
        self.app.world().resource::<EventLog>()
    }

    pub fn tick(&mut self) {
        self.app.update();
    }

    pub fn tick_n(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Walk `avatar` through `path`, one tile per update.
    pub fn walk(&mut self, avatar: Entity, path: &[TileCoord]) {
        for &tile in path {
            self.move_avatar(avatar, tile);
            self.tick();
        }
    }
}

impl Default for TestRealm {
    fn default() -> Self {
        Self::new()
    }
}
