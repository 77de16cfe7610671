//! Headless tour of the whole screen flow on a simulated clock.
//!
//! A scripted pilot plays the machine the way a person would: it watches the
//! logo, confirms the title, starts a game, asks for help, sits through the
//! replay, restarts, solves the same root by hand following the solver's
//! moves, starts a new game, opens settings from gameplay and finally quits
//! from the menu.

use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use tracing::{debug, info, instrument};

use crate::flow::{BoardEffect, FrameOutcome, Phase, ScreenMachine};
use crate::input::{FrameInput, Key};
use slidr_puzzle::{LayoutGenerator, SolveOutcome, Solver};

/// Frames after which a tour is considered stuck.
pub const DEFAULT_MAX_FRAMES: u64 = 200_000;

/// One phase change observed during the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct PhaseChange {
    /// Phase left.
    pub from: Phase,
    /// Phase entered.
    pub to: Phase,
    /// Board operation performed on the way.
    pub effect: BoardEffect,
}

/// Summary of a completed tour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct AutoplayReport {
    /// Every phase change, in order.
    transitions: Vec<PhaseChange>,
    /// Frames simulated.
    frames: u64,
    /// Simulated wall time.
    simulated: Duration,
    /// Statistics of the hand-made solve.
    hand_solve: Option<SolveOutcome>,
    /// Board depth when the replay finished.
    replayed_moves: Option<u32>,
}

impl AutoplayReport {
    /// Phases in the order they were entered.
    pub fn phases(&self) -> impl Iterator<Item = Phase> + '_ {
        self.transitions.iter().map(|change| change.to)
    }
}

/// Tour failures.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum AutoplayError {
    /// The frame limit passed before the pilot quit.
    #[display("Autoplay stalled in {} after {} frames", phase, frames)]
    FrameLimit {
        /// Phase active when the limit passed.
        phase: Phase,
        /// Frames simulated.
        frames: u64,
    },
}

/// What the pilot is trying to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Leg {
    #[default]
    AskForHelp,
    SolveByHand,
    OpenSettings,
    Leave,
}

#[derive(Debug, Default)]
struct Pilot {
    leg: Leg,
    frames_in_phase: u64,
}

impl Pilot {
    fn input<S: Solver, G: LayoutGenerator>(&self, machine: &ScreenMachine<S, G>) -> FrameInput {
        let first_frame = self.frames_in_phase == 0;
        match machine.phase() {
            Phase::Logo | Phase::Help => FrameInput::default(),
            Phase::Title | Phase::Sad | Phase::Celebration => FrameInput::key_press(Key::Enter),
            Phase::Menu => match self.leg {
                Leg::Leave if first_frame => FrameInput::key_press(Key::Up),
                _ => FrameInput::key_press(Key::Enter),
            },
            Phase::Settings if first_frame => FrameInput::key_press(Key::Right),
            Phase::Settings => FrameInput::key_press(Key::Escape),
            Phase::Gameplay => {
                let layout = machine.gameplay_layout();
                match self.leg {
                    Leg::AskForHelp => FrameInput::release_at(layout.help().center()),
                    Leg::SolveByHand => {
                        let board = machine.board();
                        board
                            .solution()
                            .slide_at(board.depth() as usize + 1)
                            .map(|direction| FrameInput::key_press(Key::from(direction)))
                            .unwrap_or_default()
                    }
                    Leg::OpenSettings | Leg::Leave => {
                        FrameInput::release_at(layout.settings().center())
                    }
                }
            }
            Phase::Ending => {
                let layout = machine.ending_layout();
                match self.leg {
                    Leg::SolveByHand => FrameInput::release_at(layout.restart().center()),
                    _ => FrameInput::release_at(layout.new_game().center()),
                }
            }
        }
    }

    fn observe(&mut self, outcome: FrameOutcome) {
        let FrameOutcome::Moved { from, to, .. } = outcome else {
            self.frames_in_phase += 1;
            return;
        };
        self.frames_in_phase = 0;
        self.leg = match (from, to) {
            (Phase::Gameplay, Phase::Help) => Leg::SolveByHand,
            (Phase::Gameplay, Phase::Celebration) => Leg::OpenSettings,
            (Phase::Gameplay, Phase::Settings) => Leg::Leave,
            _ => self.leg,
        };
        debug!(leg = ?self.leg, "Pilot leg");
    }
}

/// Drives `machine` with the scripted pilot until it quits.
///
/// # Errors
///
/// Returns [`AutoplayError::FrameLimit`] if `max_frames` pass first.
#[instrument(skip(machine))]
pub fn run_autoplay<S: Solver, G: LayoutGenerator>(
    machine: &mut ScreenMachine<S, G>,
    frame: Duration,
    max_frames: u64,
) -> Result<AutoplayReport, AutoplayError> {
    let mut pilot = Pilot::default();
    let mut report = AutoplayReport::default();

    while report.frames < max_frames {
        let input = pilot.input(machine);
        let outcome = machine.update(&input, frame);
        report.frames += 1;
        report.simulated += frame;

        match outcome {
            FrameOutcome::Quit => {
                info!(
                    frames = report.frames,
                    simulated_secs = report.simulated.as_secs_f64(),
                    "Autoplay finished"
                );
                return Ok(report);
            }
            FrameOutcome::Moved { from, to, effect } => {
                report.transitions.push(PhaseChange::new(from, to, effect));
                if to == Phase::Celebration {
                    report.hand_solve = machine.board().outcome();
                }
                if from == Phase::Help {
                    report.replayed_moves = Some(machine.board().depth());
                }
            }
            FrameOutcome::Stayed(_) => {}
        }
        pilot.observe(outcome);
    }

    Err(AutoplayError::FrameLimit {
        phase: machine.phase(),
        frames: report.frames,
    })
}
