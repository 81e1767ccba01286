#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Rescue interaction gate between player input and the trapped cat.
//!
//! The gate arms while the player stands next to a hazard whose occupant is
//! trapped, and while armed forwards each discrete assist press as one pulse.
//! It holds no cat identity of its own: the world routes every pulse to
//! whichever cat currently owns the claim, so the claim changing hands
//! between arming evaluations is harmless.

use cat_rescue_core::{Command, HazardSnapshot};

/// Pure system that forwards player assist presses to the trapped cat.
#[derive(Debug, Default)]
pub struct RescueGate {
    armed: bool,
}

impl RescueGate {
    /// Creates a new, disarmed gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluates adjacency and forwards assist presses while armed.
    ///
    /// Adjacency is re-evaluated on every call; presses delivered while the
    /// gate is disarmed are dropped without side effect.
    pub fn handle(
        &mut self,
        player_adjacent: bool,
        assist_presses: u32,
        hazard: &HazardSnapshot,
        out: &mut Vec<Command>,
    ) {
        self.armed = player_adjacent && hazard.trapped;
        if !self.armed {
            return;
        }

        for _ in 0..assist_presses {
            out.push(Command::AssistTrappedCat);
        }
    }

    /// Reports whether the gate accepted presses during the last evaluation.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
