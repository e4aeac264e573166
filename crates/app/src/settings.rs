//! Run settings read from the environment.
//!
//! - `TILEREALM_SEED`: seed for the avatar wander (default 0)
//! - `TILEREALM_STEPS`: number of frames to run (default 120, at least 1)
//! - `TILEREALM_DUMP_LAYOUT`: when set, print the placed structures as JSON

use bevy::prelude::*;

pub const DEFAULT_STEPS: u32 = 120;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub seed: u64,
    pub steps: u32,
    pub dump_layout: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            steps: DEFAULT_STEPS,
            dump_layout: false,
        }
    }
}

impl RunSettings {
    /// Read settings from the process environment. Unparseable values are
    /// logged and replaced by their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            seed: parse_or("TILEREALM_SEED", lookup("TILEREALM_SEED"), defaults.seed),
            steps: at_least_one_frame(parse_or(
                "TILEREALM_STEPS",
                lookup("TILEREALM_STEPS"),
                defaults.steps,
            )),
            dump_layout: lookup("TILEREALM_DUMP_LAYOUT").is_some(),
        }
    }
}

/// The first frame runs Startup, so a run is never shorter than one frame.
fn at_least_one_frame(steps: u32) -> u32 {
    if steps == 0 {
        warn!("TILEREALM_STEPS=0 is raised to 1 frame");
        return 1;
    }
    steps
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Debug>(
    key: &str,
    value: Option<String>,
    default: T,
) -> T {
    match value {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                warn!("{key}={raw:?} is not valid, using {default:?}");
                default
            }
        },
    }
}
