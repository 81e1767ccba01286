#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Cat Rescue engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Wall-clock period between successive roaming decisions of a single cat.
pub const DECISION_INTERVAL: Duration = Duration::from_secs(5);

/// Countdown started when a cat becomes distressed; expiry kills the cat.
pub const DISTRESS_DURATION: Duration = Duration::from_secs(5);

/// Curiosity level assigned to every freshly spawned cat.
pub const INITIAL_CURIOSITY: f32 = 10.0;

/// Amount added to a cat's curiosity after each uneventful roaming decision.
pub const CURIOSITY_STEP: f32 = 10.0;

/// Upper clamp applied to the curiosity accumulator.
pub const CURIOSITY_MAX: f32 = 100.0;

/// Minimum decision draw that sends a roaming cat toward the hazard.
pub const INVESTIGATE_THRESHOLD: f32 = 95.0;

/// Rescue progress contributed by a single assist pulse.
pub const ASSIST_INCREMENT: u32 = 9;

/// Accumulated assist progress at which a distressed cat is rescued.
pub const RESCUE_POINTS: u32 = 27;

/// Distance at which a cat is considered to have arrived at its destination.
pub const ARRIVAL_TOLERANCE: f32 = 0.5;

/// Unique identifier assigned to a cat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CatId(u32);

impl CatId {
    /// Creates a new cat identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Behavioral states a cat moves through during its lifetime.
///
/// `Dead` and `Rescued` are terminal: the world removes the cat from the
/// population in the same command application that produced the transition,
/// so no later command can observe a terminal cat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatState {
    /// Wandering between random destinations while curiosity grows.
    Roaming,
    /// Holding the hazard claim and walking toward an approach point.
    Curious,
    /// Physically trapped at the hazard, counting down toward death.
    Distressed,
    /// Terminal outcome reached when the distress countdown expires.
    Dead,
    /// Terminal outcome reached when enough assist pulses arrive in time.
    Rescued,
}

impl CatState {
    /// Reports whether the state is a terminal outcome.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Dead | Self::Rescued)
    }

    /// Reports whether a cat in this state holds the hazard claim.
    #[must_use]
    pub const fn holds_claim(self) -> bool {
        matches!(self, Self::Curious | Self::Distressed)
    }
}

/// Distinguishes how a cat reached the `Dead` terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    /// The distress countdown elapsed before enough assist pulses arrived.
    DistressExpired,
    /// An external caller forced the cat to die.
    Forced,
}

/// Location within the flat yard, expressed in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    x: f32,
    y: f32,
}

impl WorldPoint {
    /// Creates a new world point from explicit coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate of the point.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical coordinate of the point.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Computes the straight-line distance to another point.
    #[must_use]
    pub fn distance_to(self, other: WorldPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Reports whether the point lies within `tolerance` of `target`.
    #[must_use]
    pub fn has_arrived(self, target: WorldPoint, tolerance: f32) -> bool {
        self.distance_to(target) <= tolerance
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests that a new cat be created at the spawn origin.
    SpawnCat,
    /// Resolves a roaming decision into an ordinary wander step.
    RoamTo {
        /// Identifier of the cat that finished its decision wait.
        cat_id: CatId,
        /// Wander destination, absent when no wander points are configured.
        target: Option<WorldPoint>,
    },
    /// Resolves a roaming decision into a hazard claim attempt.
    ClaimHazard {
        /// Identifier of the cat attempting the claim.
        cat_id: CatId,
        /// Approach destination used when the claim succeeds.
        approach: Option<WorldPoint>,
        /// Wander destination used when the claim is contended.
        fallback: Option<WorldPoint>,
    },
    /// Advisory position update produced by the navigation stub.
    AdvanceCat {
        /// Identifier of the cat being moved.
        cat_id: CatId,
        /// Position the cat reached during the elapsed frame.
        position: WorldPoint,
    },
    /// Delivers one assist pulse to whichever cat currently holds the claim.
    AssistTrappedCat,
    /// Forces a cat into the `Dead` terminal state from any live state.
    KillCat {
        /// Identifier of the cat to kill.
        cat_id: CatId,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that a cat was created and registered as live.
    CatSpawned {
        /// Identifier assigned to the new cat.
        cat_id: CatId,
        /// Position the cat occupies after spawning.
        position: WorldPoint,
    },
    /// Announces that a roaming cat finished its decision wait.
    DecisionDue {
        /// Identifier of the cat that must now decide.
        cat_id: CatId,
        /// Curiosity level at the moment the decision came due.
        curiosity: f32,
    },
    /// Confirms that a cat performed an ordinary wander step.
    CatRoamed {
        /// Identifier of the cat that wandered.
        cat_id: CatId,
        /// Destination chosen for the step, if any was available.
        target: Option<WorldPoint>,
        /// Curiosity level after the post-step increment.
        curiosity: f32,
    },
    /// Confirms that a cat claimed the hazard and became curious.
    HazardClaimed {
        /// Identifier of the cat now holding the claim.
        cat_id: CatId,
    },
    /// Reports that a claim attempt lost to the current claim holder.
    HazardContended {
        /// Identifier of the cat that fell back to roaming.
        cat_id: CatId,
    },
    /// Confirms that a cat moved between two positions.
    CatMoved {
        /// Identifier of the cat that moved.
        cat_id: CatId,
        /// Position the cat occupied before the move.
        from: WorldPoint,
        /// Position the cat occupies after the move.
        to: WorldPoint,
    },
    /// Announces that a curious cat arrived at the hazard and became trapped.
    CatTrapped {
        /// Identifier of the now-distressed cat.
        cat_id: CatId,
    },
    /// Confirms that an assist pulse reached the distressed claim holder.
    CatAssisted {
        /// Identifier of the assisted cat.
        cat_id: CatId,
        /// Accumulated rescue progress after the pulse.
        progress: u32,
    },
    /// Announces that a distressed cat was rescued and removed.
    CatRescued {
        /// Identifier of the rescued cat.
        cat_id: CatId,
    },
    /// Announces that a cat died and was removed.
    CatDied {
        /// Identifier of the dead cat.
        cat_id: CatId,
        /// How the cat reached the terminal state.
        cause: DeathCause,
    },
}

/// Immutable representation of a single cat's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatSnapshot {
    /// Unique identifier assigned to the cat.
    pub id: CatId,
    /// Behavioral state the cat currently occupies.
    pub state: CatState,
    /// Position the cat currently occupies.
    pub position: WorldPoint,
    /// Destination the cat is walking toward, if any.
    pub destination: Option<WorldPoint>,
    /// Current curiosity level in `[0, 100]`.
    pub curiosity: f32,
    /// Accumulated assist progress toward the rescue threshold.
    pub assist_progress: u32,
    /// Duration accumulated toward the current state's pending wait.
    pub waited: Duration,
}

/// Read-only snapshot describing all live cats.
#[derive(Clone, Debug, Default)]
pub struct CatView {
    snapshots: Vec<CatSnapshot>,
}

impl CatView {
    /// Creates a new cat view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<CatSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured cat snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &CatSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<CatSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of the shared hazard used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HazardSnapshot {
    /// Indicates whether any cat currently holds the claim.
    pub occupied: bool,
    /// Indicates whether the claim holder is physically trapped.
    pub trapped: bool,
    /// Identifier of the current claim holder, if any.
    pub claimant: Option<CatId>,
}
