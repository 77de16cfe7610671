//! The scripted tour visits every phase and quits.

use std::time::Duration;

use slidr::{AutoplayError, Phase, ScreenMachine, SlidrConfig, run_autoplay};
use slidr_puzzle::{BoardEngine, BreadthFirstSolver, ShuffledLayout};

fn machine(seed: u64) -> ScreenMachine<BreadthFirstSolver, ShuffledLayout> {
    let config = SlidrConfig::default();
    let board = BoardEngine::new(
        BreadthFirstSolver,
        ShuffledLayout::seeded(seed),
        3,
        config.replay_timing(),
    );
    ScreenMachine::from_config(board, &config)
}

const FRAME: Duration = Duration::from_micros(16_667);

#[test]
fn test_tour_visits_every_phase_in_order() {
    let mut m = machine(11);
    let report = run_autoplay(&mut m, FRAME, 100_000).expect("tour completes");

    let phases: Vec<Phase> = report.phases().collect();
    assert_eq!(
        phases,
        vec![
            Phase::Title,
            Phase::Menu,
            Phase::Gameplay,
            Phase::Help,
            Phase::Sad,
            Phase::Ending,
            Phase::Gameplay,
            Phase::Celebration,
            Phase::Ending,
            Phase::Gameplay,
            Phase::Settings,
            Phase::Menu,
        ]
    );
    assert!(m.should_close());
    assert_eq!(m.audio().volume, 30);
}

#[test]
fn test_hand_solve_matches_replay() {
    let mut m = machine(5);
    let report = run_autoplay(&mut m, FRAME, 100_000).expect("tour completes");

    let solve = report.hand_solve().expect("solved by hand");
    assert_eq!(solve.moves_taken, solve.optimal_moves);
    assert_eq!(*report.replayed_moves(), Some(solve.optimal_moves));
}

#[test]
fn test_frame_limit_is_enforced() {
    let mut m = machine(1);
    let err = run_autoplay(&mut m, FRAME, 10).unwrap_err();
    assert_eq!(
        err,
        AutoplayError::FrameLimit {
            phase: Phase::Logo,
            frames: 10
        }
    );
}
