use cat_rescue_core::{CatId, Command, Event, WorldPoint, CURIOSITY_MAX};
use cat_rescue_system_behavior::{Behavior, Config};

const WANDER: [WorldPoint; 2] = [WorldPoint::new(1.0, 1.0), WorldPoint::new(-1.0, 2.0)];
const APPROACH: [WorldPoint; 2] = [WorldPoint::new(9.0, 0.0), WorldPoint::new(9.5, 0.5)];

fn decisions(curiosity: f32, count: usize) -> Vec<Event> {
    (0..count)
        .map(|index| Event::DecisionDue {
            cat_id: CatId::new(index as u32),
            curiosity,
        })
        .collect()
}

#[test]
fn saturated_curiosity_always_attempts_the_hazard() {
    let mut behavior = Behavior::new(Config::new(0x5eed));
    let mut commands = Vec::new();

    behavior.handle(&decisions(CURIOSITY_MAX, 64), &WANDER, &APPROACH, &mut commands);

    assert_eq!(commands.len(), 64);
    for command in &commands {
        match command {
            Command::ClaimHazard {
                approach, fallback, ..
            } => {
                assert!(APPROACH.contains(&approach.expect("approach point")));
                assert!(WANDER.contains(&fallback.expect("fallback point")));
            }
            other => panic!("draw from a collapsed interval must claim: {other:?}"),
        }
    }
}

#[test]
fn fresh_cats_mostly_wander() {
    let mut behavior = Behavior::new(Config::new(0x5eed));
    let mut commands = Vec::new();

    behavior.handle(&decisions(0.0, 64), &WANDER, &APPROACH, &mut commands);

    assert_eq!(commands.len(), 64);
    let wander_steps = commands
        .iter()
        .filter(|command| matches!(command, Command::RoamTo { .. }))
        .count();
    assert!(
        wander_steps > 0,
        "64 draws at curiosity 0 cannot all clear the threshold"
    );
    for command in &commands {
        if let Command::RoamTo { target, .. } = command {
            assert!(WANDER.contains(&target.expect("wander point")));
        }
    }
}

#[test]
fn empty_point_collections_produce_targetless_decisions() {
    let mut behavior = Behavior::new(Config::new(7));
    let mut commands = Vec::new();

    behavior.handle(&decisions(CURIOSITY_MAX, 4), &[], &[], &mut commands);

    let expected: Vec<Command> = (0..4)
        .map(|index| Command::ClaimHazard {
            cat_id: CatId::new(index),
            approach: None,
            fallback: None,
        })
        .collect();
    assert_eq!(commands, expected);
}

#[test]
fn identical_seeds_replay_identical_decisions() {
    let mut first = Behavior::new(Config::new(42));
    let mut second = Behavior::new(Config::new(42));
    let events = decisions(40.0, 32);

    let mut first_commands = Vec::new();
    let mut second_commands = Vec::new();
    first.handle(&events, &WANDER, &APPROACH, &mut first_commands);
    second.handle(&events, &WANDER, &APPROACH, &mut second_commands);

    assert_eq!(first_commands, second_commands);
}
