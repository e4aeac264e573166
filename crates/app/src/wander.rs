//! Seeded random walk for the demo avatar.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use structures::avatar::{Avatar, DoorContact, StructureEntered};
use structures::occupancy::classify_tile;
use structures::StructureRegistry;

const STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Resource)]
pub struct WanderRng(pub ChaCha8Rng);

impl WanderRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Totals reported when the run finishes.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct WanderStats {
    pub moves: u32,
    pub blocked: u32,
    pub doors: u32,
    pub entered: u32,
}

/// Move every avatar one tile in a random direction, but only onto a
/// walkable tile. An overlap reaching this system is fatal, as in
/// `track_avatar_tiles`.
pub fn wander_avatars(
    registry: Res<StructureRegistry>,
    mut rng: ResMut<WanderRng>,
    mut stats: ResMut<WanderStats>,
    mut avatars: Query<&mut Avatar>,
) {
    for mut avatar in &mut avatars {
        let Some(&(dx, dy)) = STEPS.choose(&mut rng.0) else {
            continue;
        };
        let target = avatar.tile().offset(dx, dy);
        match classify_tile(&registry, target) {
            Ok(occupancy) if occupancy.is_walkable() => {
                avatar.position = target.to_world_center();
                stats.moves += 1;
            }
            Ok(_) => stats.blocked += 1,
            Err(err) => {
                error!("Wander target {target}: {err}");
                panic!("structure registry invariant violated: {err}");
            }
        }
    }
}

pub fn count_contacts(
    mut doors: EventReader<DoorContact>,
    mut entered: EventReader<StructureEntered>,
    mut stats: ResMut<WanderStats>,
) {
    stats.doors += doors.read().count() as u32;
    stats.entered += entered.read().count() as u32;
}
