use bevy::log::LogPlugin;
use bevy::prelude::*;

use structures::ascii_map::render_structures;
use structures::avatar::Avatar;
use structures::config::{MAP_MARGIN, TOWN_CENTER_X, TOWN_CENTER_Y};
use structures::coords::TileCoord;
use structures::registry::StructureSummary;
use structures::{Structure, StructureRegistry, StructuresPlugin};

mod settings;
mod wander;

use settings::RunSettings;
use wander::{count_contacts, wander_avatars, WanderRng, WanderStats};

fn main() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));

    let settings = RunSettings::from_env();
    info!(
        "tilerealm: seed {} for {} frames",
        settings.seed, settings.steps
    );

    app.insert_resource(settings)
        .insert_resource(WanderRng::seeded(settings.seed))
        .init_resource::<WanderStats>()
        .add_plugins(StructuresPlugin)
        .add_systems(Startup, spawn_avatar)
        .add_systems(Update, wander_avatars.before(structures::avatar::track_avatar_tiles))
        .add_systems(PostUpdate, count_contacts);

    // First update runs Startup, which validates the layout.
    app.update();
    report_layout(app.world().resource::<StructureRegistry>(), settings);

    for _ in 1..settings.steps {
        app.update();
    }

    let stats = *app.world().resource::<WanderStats>();
    info!(
        "Done: {} moves, {} blocked, {} structures entered, {} door contacts",
        stats.moves, stats.blocked, stats.entered, stats.doors
    );
}

fn spawn_avatar(mut commands: Commands) {
    // Two tiles above the yellow brick building's door.
    let start = TileCoord::new(TOWN_CENTER_X + 3, TOWN_CENTER_Y + 6);
    commands.spawn(Avatar::on_tile(start));
}

fn report_layout(registry: &StructureRegistry, settings: RunSettings) {
    info!("Loaded {} structures", registry.len());

    match render_structures(registry, MAP_MARGIN) {
        Ok(Some(map)) => println!("{map}"),
        Ok(None) => info!("No structures to draw"),
        Err(err) => error!("Could not render map: {err}"),
    }

    if settings.dump_layout {
        let summaries: Vec<StructureSummary> = registry
            .provide_structure_list()
            .iter()
            .map(Structure::summary)
            .collect();
        match serde_json::to_string_pretty(&summaries) {
            Ok(json) => println!("{json}"),
            Err(err) => error!("Could not serialize layout: {err}"),
        }
    }
}
