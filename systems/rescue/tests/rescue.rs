use std::time::Duration;

use cat_rescue_core::{CatId, Command, Event, WorldPoint};
use cat_rescue_system_rescue::RescueGate;
use cat_rescue_world::{self as world, query, World};

const APPROACH: WorldPoint = WorldPoint::new(3.0, 0.0);

fn trap_a_cat(world: &mut World) -> CatId {
    let mut events = Vec::new();
    world::apply(world, Command::SpawnCat, &mut events);
    let cat_id = match events.as_slice() {
        [Event::CatSpawned { cat_id, .. }] => *cat_id,
        other => panic!("unexpected spawn events: {other:?}"),
    };

    world::apply(
        world,
        Command::ClaimHazard {
            cat_id,
            approach: Some(APPROACH),
            fallback: None,
        },
        &mut events,
    );
    world::apply(
        world,
        Command::AdvanceCat {
            cat_id,
            position: APPROACH,
        },
        &mut events,
    );
    world::apply(
        world,
        Command::Tick {
            dt: Duration::from_millis(100),
        },
        &mut events,
    );
    assert!(
        events.contains(&Event::CatTrapped { cat_id }),
        "setup failed to trap the cat: {events:?}"
    );
    cat_id
}

#[test]
fn three_armed_presses_rescue_the_trapped_cat() {
    let mut world = World::new();
    let cat_id = trap_a_cat(&mut world);
    let mut gate = RescueGate::new();

    let mut log = Vec::new();
    for _ in 0..3 {
        let hazard = query::hazard(&world);
        let mut commands = Vec::new();
        gate.handle(true, 1, &hazard, &mut commands);
        assert!(gate.is_armed());
        for command in commands {
            world::apply(&mut world, command, &mut log);
        }
    }

    assert!(log.contains(&Event::CatRescued { cat_id }));
    assert!(!query::hazard(&world).occupied);

    // The hazard resolved, so the next evaluation disarms the gate.
    let hazard = query::hazard(&world);
    let mut commands = Vec::new();
    gate.handle(true, 1, &hazard, &mut commands);
    assert!(!gate.is_armed());
    assert!(commands.is_empty());
}

#[test]
fn presses_before_trapping_are_dropped() {
    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(&mut world, Command::SpawnCat, &mut events);

    // Claim held, cat still walking: the gate must not arm.
    world::apply(
        &mut world,
        Command::ClaimHazard {
            cat_id: CatId::new(0),
            approach: Some(APPROACH),
            fallback: None,
        },
        &mut events,
    );

    let mut gate = RescueGate::new();
    let hazard = query::hazard(&world);
    let mut commands = Vec::new();
    gate.handle(true, 4, &hazard, &mut commands);

    assert!(!gate.is_armed());
    assert!(commands.is_empty());
}

#[test]
fn gate_routes_to_whichever_cat_holds_the_claim() {
    let mut world = World::new();
    let first = trap_a_cat(&mut world);
    let mut gate = RescueGate::new();

    let mut log = Vec::new();
    for _ in 0..3 {
        let hazard = query::hazard(&world);
        let mut commands = Vec::new();
        gate.handle(true, 1, &hazard, &mut commands);
        for command in commands {
            world::apply(&mut world, command, &mut log);
        }
    }
    assert!(log.contains(&Event::CatRescued { cat_id: first }));

    // A different cat claims and traps; re-armed pulses go to it.
    let second = trap_a_cat(&mut world);
    assert_ne!(first, second);

    log.clear();
    let hazard = query::hazard(&world);
    let mut commands = Vec::new();
    gate.handle(true, 1, &hazard, &mut commands);
    assert!(gate.is_armed());
    for command in commands {
        world::apply(&mut world, command, &mut log);
    }
    assert_eq!(
        log,
        vec![Event::CatAssisted {
            cat_id: second,
            progress: 9,
        }]
    );
}
