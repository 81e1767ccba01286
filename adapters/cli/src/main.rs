#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs the Cat Rescue simulation headlessly.
//!
//! Each frame submits rescue-gate commands first, then advances the clock,
//! then runs the pure systems to a fixpoint over the produced events. The
//! gate-before-tick order is what resolves the assist-versus-countdown race
//! in favour of the assist pulse.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, trace};

use cat_rescue_core::{Command, Event};
use cat_rescue_system_behavior::{Behavior, Config as BehaviorConfig};
use cat_rescue_system_navigation::Navigation;
use cat_rescue_system_rescue::RescueGate;
use cat_rescue_system_spawning::{Config as SpawningConfig, Spawning};
use cat_rescue_world::{self as world, query, World};

/// Command-line arguments accepted by the simulation driver.
#[derive(Debug, Parser)]
#[command(name = "cat-rescue", about = "Headless Cat Rescue simulation driver")]
struct Args {
    /// Seed for the behavior system's deterministic random source.
    #[arg(long, default_value_t = 0x0ca7)]
    seed: u64,

    /// Number of frames to simulate before exiting.
    #[arg(long, default_value_t = 1200)]
    frames: u32,

    /// Simulated milliseconds that elapse per frame.
    #[arg(long, default_value_t = 100)]
    dt_ms: u64,

    /// Seconds between periodic spawns.
    #[arg(long, default_value_t = 30)]
    spawn_interval: u64,

    /// Keep the player adjacent to the hazard, pressing assist once a frame.
    #[arg(long)]
    auto_assist: bool,
}

/// Entry point for the Cat Rescue command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let mut world = World::new();
    let mut behavior = Behavior::new(BehaviorConfig::new(args.seed));
    let navigation = Navigation::default();
    let mut spawning = Spawning::new(SpawningConfig::new(Duration::from_secs(
        args.spawn_interval,
    )));
    let mut gate = RescueGate::new();

    info!(
        seed = args.seed,
        frames = args.frames,
        auto_assist = args.auto_assist,
        "starting simulation"
    );

    // The original spawner emits its first cat immediately on startup.
    let mut events = Vec::new();
    world::apply(&mut world, Command::SpawnCat, &mut events);
    log_events(&events);

    let dt = Duration::from_millis(args.dt_ms);
    for _ in 0..args.frames {
        run_frame(
            &mut world,
            &mut behavior,
            &navigation,
            &mut spawning,
            &mut gate,
            dt,
            args.auto_assist,
        );
    }

    let survivors = query::cat_view(&world).into_vec();
    info!(
        ticks = query::tick_index(&world),
        live_cats = survivors.len(),
        hazard_occupied = query::hazard(&world).occupied,
        "simulation finished"
    );
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!(error))
}

fn run_frame(
    world: &mut World,
    behavior: &mut Behavior,
    navigation: &Navigation,
    spawning: &mut Spawning,
    gate: &mut RescueGate,
    dt: Duration,
    auto_assist: bool,
) {
    // Gate first: an assist pulse landing in the same frame as distress
    // expiry must be processed before the countdown advances.
    let hazard = query::hazard(world);
    let mut commands = Vec::new();
    gate.handle(auto_assist, u32::from(auto_assist), &hazard, &mut commands);

    let mut events = Vec::new();
    for command in commands {
        world::apply(world, command, &mut events);
    }
    world::apply(world, Command::Tick { dt }, &mut events);
    log_events(&events);

    // Run the pure systems to a fixpoint over the freshly produced events.
    loop {
        let mut commands = Vec::new();
        behavior.handle(
            &events,
            query::wander_points(world),
            query::approach_points(world),
            &mut commands,
        );
        navigation.handle(&events, &query::cat_view(world), &mut commands);
        spawning.handle(&events, &mut commands);

        if commands.is_empty() {
            break;
        }

        events.clear();
        for command in commands {
            world::apply(world, command, &mut events);
        }
        log_events(&events);
    }
}

fn log_events(events: &[Event]) {
    for event in events {
        match event {
            Event::TimeAdvanced { .. } => {}
            Event::CatSpawned { cat_id, .. } => {
                info!(cat = cat_id.get(), "cat spawned");
            }
            Event::DecisionDue { cat_id, curiosity } => {
                trace!(cat = cat_id.get(), curiosity, "decision due");
            }
            Event::CatRoamed {
                cat_id, curiosity, ..
            } => {
                debug!(cat = cat_id.get(), curiosity, "picked a wander target");
            }
            Event::HazardClaimed { cat_id } => {
                info!(cat = cat_id.get(), "claimed the hazard");
            }
            Event::HazardContended { cat_id } => {
                debug!(cat = cat_id.get(), "claim contended, kept roaming");
            }
            Event::CatMoved { .. } => {}
            Event::CatTrapped { cat_id } => {
                info!(cat = cat_id.get(), "trapped at the hazard");
            }
            Event::CatAssisted { cat_id, progress } => {
                info!(cat = cat_id.get(), progress, "assist pulse delivered");
            }
            Event::CatRescued { cat_id } => {
                info!(cat = cat_id.get(), "rescued");
            }
            Event::CatDied { cat_id, cause } => {
                info!(cat = cat_id.get(), ?cause, "died");
            }
        }
    }
}
