#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Straight-line navigation stub that advances cats toward destinations.
//!
//! This stands in for a real path-finding service: given a destination it
//! moves the cat at constant speed and lets the world decide arrival. It only
//! ever emits advisory [`Command::AdvanceCat`] values; the world remains the
//! sole authority over positions and transitions.

use std::time::Duration;

use cat_rescue_core::{CatView, Command, Event, WorldPoint};

/// Configuration parameters required to construct the navigation stub.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    speed: f32,
}

impl Config {
    /// Creates a new configuration with the provided speed in units/second.
    #[must_use]
    pub const fn new(speed: f32) -> Self {
        Self { speed }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(2.0)
    }
}

/// Pure system that proposes position updates for cats with destinations.
#[derive(Debug)]
pub struct Navigation {
    speed: f32,
}

impl Navigation {
    /// Creates a new navigation stub using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            speed: config.speed,
        }
    }

    /// Consumes time events and the cat view to emit advance commands.
    pub fn handle(&self, events: &[Event], cat_view: &CatView, out: &mut Vec<Command>) {
        let mut elapsed = Duration::ZERO;
        for event in events {
            if let Event::TimeAdvanced { dt } = event {
                elapsed = elapsed.saturating_add(*dt);
            }
        }

        if elapsed.is_zero() || self.speed <= 0.0 {
            return;
        }

        let step = self.speed * elapsed.as_secs_f32();
        for cat in cat_view.iter() {
            let Some(destination) = cat.destination else {
                continue;
            };
            let next = advance_toward(cat.position, destination, step);
            if next != cat.position {
                out.push(Command::AdvanceCat {
                    cat_id: cat.id,
                    position: next,
                });
            }
        }
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn advance_toward(from: WorldPoint, to: WorldPoint, step: f32) -> WorldPoint {
    let distance = from.distance_to(to);
    if distance <= step || distance == 0.0 {
        return to;
    }
    let fraction = step / distance;
    WorldPoint::new(
        from.x() + (to.x() - from.x()) * fraction,
        from.y() + (to.y() - from.y()) * fraction,
    )
}
