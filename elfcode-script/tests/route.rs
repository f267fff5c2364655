//! End-to-end runs of the lever room route against the recording actuator
//! and the simulator.

use elfcode_script::{
    solve, Action, Bounds, ErrorKind, LevelConfig, LevelSimulator, Position, RecordingActuator,
    LEVER_COUNT,
};

#[test]
fn example_levers_produce_documented_route() {
    let mut actuator = RecordingActuator::new([1, 2, 3, 4, 5, 6]);
    let report = solve(&mut actuator).unwrap();
    assert_eq!(report.sums.as_slice(), &[1, 3, 6, 10, 15, 21]);

    let loop_calls = &actuator.calls()[LEVER_COUNT..];
    let rights: Vec<u32> = loop_calls
        .iter()
        .filter_map(|a| match a {
            Action::MoveRight { steps } => Some(*steps),
            _ => None,
        })
        .collect();
    let lefts: Vec<u32> = loop_calls
        .iter()
        .filter_map(|a| match a {
            Action::MoveLeft { steps } => Some(*steps),
            _ => None,
        })
        .collect();
    let ups = loop_calls
        .iter()
        .filter(|a| matches!(a, Action::MoveUp { steps: 2 }))
        .count();

    assert_eq!(rights, vec![1, 5, 9, 11]);
    assert_eq!(lefts, vec![3, 7, 11]);
    assert_eq!(ups, 6);

    let tail = &loop_calls[loop_calls.len() - 2..];
    assert_eq!(tail, &[Action::TellMunch, Action::MoveRight { steps: 11 }]);
}

#[test]
fn default_level_is_solved_in_simulator() {
    let mut sim = LevelSimulator::new(LevelConfig::default()).unwrap();
    solve(&mut sim).unwrap();

    // start (6, 0), three passes of (-2, +4), then 11 right
    assert_eq!(sim.position(), Position::new(11, 12));
    assert_eq!(sim.pulls(), &[1, 3, 6, 10, 15, 21]);

    let outcome = sim.invoke_munch().unwrap();
    assert_eq!(outcome.answer, "stick");
    assert!(outcome.is_solved());
}

#[test]
fn simulator_trace_matches_recorded_calls() {
    let level = LevelConfig::from_json(
        r#"{
            "levers": [4, -1, 0, 2, 9, 3],
            "munch_records": [{"x": "lollipop"}, {"y": "gum", "z": "lollipop"}],
            "expected_key": "z"
        }"#,
    )
    .unwrap();

    let mut recorder = RecordingActuator::new(level.levers);
    solve(&mut recorder).unwrap();

    let mut sim = LevelSimulator::new(level).unwrap();
    solve(&mut sim).unwrap();

    assert_eq!(sim.trace(), recorder.calls());
    assert!(sim.invoke_munch().unwrap().is_solved());
}

#[test]
fn narrow_room_blocks_route_before_munch() {
    let mut level = LevelConfig::default();
    level.bounds = Some(Bounds { width: 12, height: 13 });
    level.start = Position::new(2, 0);

    let mut sim = LevelSimulator::new(level).unwrap();
    let err = solve(&mut sim).unwrap_err();

    // 2 + 1 - 3 = 0, then 0 + 5 - 7 = -2 is outside the room
    assert_eq!(err.kind(), ErrorKind::MoveBlocked);
    assert!(!sim.has_munch());
    assert_eq!(sim.pulls(), &[1, 3, 6]);
    assert_eq!(sim.position(), Position::new(5, 6));
}
