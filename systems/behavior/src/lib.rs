#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic behavior system that resolves roaming decisions.
//!
//! Each [`Event::DecisionDue`] becomes exactly one command: either a hazard
//! claim attempt or an ordinary wander step. The random source is seeded at
//! construction so replays of the same event stream produce the same command
//! stream.

use cat_rescue_core::{
    Command, Event, WorldPoint, CURIOSITY_MAX, INVESTIGATE_THRESHOLD,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the behavior system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided random seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Pure system that turns decision events into roaming or claim commands.
#[derive(Debug)]
pub struct Behavior {
    rng: ChaCha8Rng,
}

impl Behavior {
    /// Creates a new behavior system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Consumes events and the world's point collections to emit decisions.
    ///
    /// The decision draw is uniform over `[curiosity, 100]`: curiosity acts
    /// as a rising floor, so a long-lived roaming cat approaches certainty of
    /// eventually attempting the hazard. At curiosity 100 the interval
    /// collapses and the attempt is guaranteed.
    pub fn handle(
        &mut self,
        events: &[Event],
        wander_points: &[WorldPoint],
        approach_points: &[WorldPoint],
        out: &mut Vec<Command>,
    ) {
        for event in events {
            if let Event::DecisionDue { cat_id, curiosity } = event {
                let floor = curiosity.clamp(0.0, CURIOSITY_MAX);
                let draw = self.rng.gen_range(floor..=CURIOSITY_MAX);
                if draw >= INVESTIGATE_THRESHOLD {
                    let approach = self.pick(approach_points);
                    let fallback = self.pick(wander_points);
                    out.push(Command::ClaimHazard {
                        cat_id: *cat_id,
                        approach,
                        fallback,
                    });
                } else {
                    let target = self.pick(wander_points);
                    out.push(Command::RoamTo {
                        cat_id: *cat_id,
                        target,
                    });
                }
            }
        }
    }

    fn pick(&mut self, points: &[WorldPoint]) -> Option<WorldPoint> {
        if points.is_empty() {
            return None;
        }
        Some(points[self.rng.gen_range(0..points.len())])
    }
}
