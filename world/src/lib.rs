#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state for the Cat Rescue simulation.
//!
//! The world owns the cat population, the single shared hazard, and the
//! destination-point collections. Every mutation flows through [`apply`],
//! which executes one [`Command`] to completion before the next one is
//! observed. That run-to-completion guarantee is what makes the hazard's
//! check-then-set claim safe as a plain flag: claim attempts arriving in the
//! same frame are arbitrated strictly in submission order, and exactly one
//! succeeds.

use std::time::Duration;

use cat_rescue_core::{
    CatId, CatSnapshot, CatState, Command, DeathCause, Event, WorldPoint, ARRIVAL_TOLERANCE,
    ASSIST_INCREMENT, CURIOSITY_MAX, CURIOSITY_STEP, DECISION_INTERVAL, DISTRESS_DURATION,
    INITIAL_CURIOSITY, RESCUE_POINTS,
};

const DEFAULT_SPAWN_ORIGIN: WorldPoint = WorldPoint::new(0.0, 0.0);

const DEFAULT_WANDER_POINTS: [WorldPoint; 5] = [
    WorldPoint::new(6.0, 2.0),
    WorldPoint::new(-4.0, 5.0),
    WorldPoint::new(3.0, -6.0),
    WorldPoint::new(-7.0, -3.0),
    WorldPoint::new(8.0, 7.0),
];

const DEFAULT_APPROACH_POINTS: [WorldPoint; 3] = [
    WorldPoint::new(11.5, 0.5),
    WorldPoint::new(12.5, -0.5),
    WorldPoint::new(12.0, 1.0),
];

/// Represents the authoritative Cat Rescue world state.
#[derive(Debug)]
pub struct World {
    cats: Vec<Cat>,
    hazard: Hazard,
    spawn_origin: WorldPoint,
    wander_points: Vec<WorldPoint>,
    approach_points: Vec<WorldPoint>,
    next_cat_id: u32,
    tick_index: u64,
}

impl World {
    /// Creates a new world using the default yard layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_layout(
            DEFAULT_SPAWN_ORIGIN,
            DEFAULT_WANDER_POINTS.to_vec(),
            DEFAULT_APPROACH_POINTS.to_vec(),
        )
    }

    /// Creates a new world with an explicit spawn origin and point layout.
    ///
    /// Both point collections may be empty; movement then degrades to a
    /// no-op while the rest of the behavior loop keeps running.
    #[must_use]
    pub fn with_layout(
        spawn_origin: WorldPoint,
        wander_points: Vec<WorldPoint>,
        approach_points: Vec<WorldPoint>,
    ) -> Self {
        Self {
            cats: Vec::new(),
            hazard: Hazard::new(),
            spawn_origin,
            wander_points,
            approach_points,
            next_cat_id: 0,
            tick_index: 0,
        }
    }

    fn cat_mut(&mut self, cat_id: CatId) -> Option<&mut Cat> {
        self.cats.iter_mut().find(|cat| cat.id == cat_id)
    }

    fn cat_index(&self, cat_id: CatId) -> Option<usize> {
        self.cats.iter().position(|cat| cat.id == cat_id)
    }

    fn remove_cat(&mut self, cat_id: CatId) {
        if let Some(index) = self.cat_index(cat_id) {
            let _ = self.cats.remove(index);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => {
            world.tick_index = world.tick_index.saturating_add(1);
            out_events.push(Event::TimeAdvanced { dt });

            let mut expired: Vec<CatId> = Vec::new();
            let World {
                cats, hazard: shared_hazard, ..
            } = world;
            for cat in cats.iter_mut() {
                cat.waited = cat.waited.saturating_add(dt);
                match cat.state {
                    CatState::Roaming => {
                        while cat.waited >= DECISION_INTERVAL {
                            cat.waited -= DECISION_INTERVAL;
                            out_events.push(Event::DecisionDue {
                                cat_id: cat.id,
                                curiosity: cat.curiosity,
                            });
                        }
                    }
                    CatState::Curious => {
                        let arrived = cat.destination.map_or(false, |destination| {
                            cat.position.has_arrived(destination, ARRIVAL_TOLERANCE)
                        });
                        if arrived {
                            cat.enter(CatState::Distressed);
                            cat.destination = None;
                            shared_hazard.mark_trapped();
                            out_events.push(Event::CatTrapped { cat_id: cat.id });
                        }
                    }
                    CatState::Distressed => {
                        if cat.waited >= DISTRESS_DURATION {
                            expired.push(cat.id);
                        }
                    }
                    CatState::Dead | CatState::Rescued => {}
                }
            }

            for cat_id in expired {
                world.hazard.release();
                world.remove_cat(cat_id);
                out_events.push(Event::CatDied {
                    cat_id,
                    cause: DeathCause::DistressExpired,
                });
            }
        }
        Command::SpawnCat => {
            let cat_id = CatId::new(world.next_cat_id);
            world.next_cat_id = world.next_cat_id.wrapping_add(1);
            let position = world.spawn_origin;
            world.cats.push(Cat::spawned(cat_id, position));
            out_events.push(Event::CatSpawned { cat_id, position });
        }
        Command::RoamTo { cat_id, target } => {
            if let Some(cat) = world.cat_mut(cat_id) {
                if cat.state == CatState::Roaming {
                    if let Some(target) = target {
                        cat.destination = Some(target);
                    }
                    cat.curiosity = (cat.curiosity + CURIOSITY_STEP).clamp(0.0, CURIOSITY_MAX);
                    out_events.push(Event::CatRoamed {
                        cat_id,
                        target,
                        curiosity: cat.curiosity,
                    });
                }
            }
        }
        Command::ClaimHazard {
            cat_id,
            approach,
            fallback,
        } => {
            let Some(index) = world.cat_index(cat_id) else {
                return;
            };
            if world.cats[index].state != CatState::Roaming {
                return;
            }

            if world.hazard.try_claim(cat_id) {
                let cat = &mut world.cats[index];
                cat.enter(CatState::Curious);
                cat.destination = approach;
                out_events.push(Event::HazardClaimed { cat_id });
            } else {
                // Losers never block: fall back to an ordinary wander step
                // without touching curiosity.
                let cat = &mut world.cats[index];
                if let Some(fallback) = fallback {
                    cat.destination = Some(fallback);
                }
                out_events.push(Event::HazardContended { cat_id });
            }
        }
        Command::AdvanceCat { cat_id, position } => {
            if let Some(cat) = world.cat_mut(cat_id) {
                let from = cat.position;
                if from != position {
                    cat.position = position;
                    out_events.push(Event::CatMoved {
                        cat_id,
                        from,
                        to: position,
                    });
                }
            }
        }
        Command::AssistTrappedCat => {
            // Routed to whichever cat currently holds the claim; the gate
            // never names a cat so a claim released and re-acquired between
            // pulses still resolves correctly.
            if !world.hazard.trapped() {
                return;
            }
            let Some(cat_id) = world.hazard.claimant() else {
                return;
            };
            let Some(cat) = world.cat_mut(cat_id) else {
                return;
            };
            if cat.state != CatState::Distressed {
                return;
            }

            cat.assist_progress = cat.assist_progress.saturating_add(ASSIST_INCREMENT);
            let progress = cat.assist_progress;
            out_events.push(Event::CatAssisted { cat_id, progress });

            if progress >= RESCUE_POINTS {
                world.hazard.release();
                world.remove_cat(cat_id);
                out_events.push(Event::CatRescued { cat_id });
            }
        }
        Command::KillCat { cat_id } => {
            let Some(index) = world.cat_index(cat_id) else {
                return;
            };
            if world.cats[index].state.holds_claim() {
                world.hazard.release();
            }
            let _ = world.cats.remove(index);
            out_events.push(Event::CatDied {
                cat_id,
                cause: DeathCause::Forced,
            });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use cat_rescue_core::{CatView, HazardSnapshot, WorldPoint};

    /// Captures a read-only view of the live cat population.
    #[must_use]
    pub fn cat_view(world: &World) -> CatView {
        CatView::from_snapshots(world.cats.iter().map(super::Cat::snapshot).collect())
    }

    /// Captures the current occupancy and capture state of the hazard.
    #[must_use]
    pub fn hazard(world: &World) -> HazardSnapshot {
        HazardSnapshot {
            occupied: world.hazard.occupied(),
            trapped: world.hazard.trapped(),
            claimant: world.hazard.claimant(),
        }
    }

    /// Destination candidates used while a cat roams.
    #[must_use]
    pub fn wander_points(world: &World) -> &[WorldPoint] {
        &world.wander_points
    }

    /// Destination candidates used while a cat approaches the hazard.
    #[must_use]
    pub fn approach_points(world: &World) -> &[WorldPoint] {
        &world.approach_points
    }

    /// Position at which new cats enter the world.
    #[must_use]
    pub fn spawn_origin(world: &World) -> WorldPoint {
        world.spawn_origin
    }

    /// Number of ticks the world has processed so far.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }
}

#[derive(Clone, Debug)]
struct Cat {
    id: CatId,
    state: CatState,
    position: WorldPoint,
    destination: Option<WorldPoint>,
    curiosity: f32,
    assist_progress: u32,
    waited: Duration,
}

impl Cat {
    fn spawned(id: CatId, position: WorldPoint) -> Self {
        Self {
            id,
            state: CatState::Roaming,
            position,
            destination: None,
            curiosity: INITIAL_CURIOSITY,
            assist_progress: 0,
            waited: Duration::ZERO,
        }
    }

    /// Switches state and zeroes the pending wait, cancelling whatever timer
    /// the previous state still had in flight.
    fn enter(&mut self, state: CatState) {
        self.state = state;
        self.waited = Duration::ZERO;
    }

    fn snapshot(&self) -> CatSnapshot {
        CatSnapshot {
            id: self.id,
            state: self.state,
            position: self.position,
            destination: self.destination,
            curiosity: self.curiosity,
            assist_progress: self.assist_progress,
            waited: self.waited,
        }
    }
}

/// Single shared cell arbitrating exclusive hazard occupancy.
///
/// Deliberately not a queue: a failed claim has no side effect and the
/// caller falls back to roaming.
#[derive(Debug)]
struct Hazard {
    claimant: Option<CatId>,
    trapped: bool,
}

impl Hazard {
    fn new() -> Self {
        Self {
            claimant: None,
            trapped: false,
        }
    }

    fn try_claim(&mut self, cat_id: CatId) -> bool {
        if self.claimant.is_none() {
            self.claimant = Some(cat_id);
            true
        } else {
            false
        }
    }

    /// Idempotent: releasing an unoccupied hazard leaves it unoccupied.
    fn release(&mut self) {
        self.claimant = None;
        self.trapped = false;
    }

    /// No-op unless the hazard is occupied, so `occupied == false` always
    /// implies `trapped == false`.
    fn mark_trapped(&mut self) {
        if self.claimant.is_some() {
            self.trapped = true;
        }
    }

    fn occupied(&self) -> bool {
        self.claimant.is_some()
    }

    fn trapped(&self) -> bool {
        self.trapped
    }

    fn claimant(&self) -> Option<CatId> {
        self.claimant
    }
}
