//! Phases, signals and the pure transition table.

use std::time::Duration;

use derive_new::new;
use slidr_puzzle::{BoardEngine, LayoutGenerator, Solver};
use strum::{Display, EnumIter};
use tracing::instrument;

use crate::flow::screens::MenuChoice;
use crate::input::FrameInput;

/// The screen currently shown. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Phase {
    /// Intro animation.
    #[default]
    Logo,
    /// Title card waiting for a confirm gesture.
    Title,
    /// Main menu.
    Menu,
    /// Settings panel.
    Settings,
    /// The player is solving the board.
    Gameplay,
    /// The solver's sequence is being replayed.
    Help,
    /// Shown after a replay finishes.
    Sad,
    /// Shown after the player solves the board.
    Celebration,
    /// Restart or new game choice.
    Ending,
}

/// A trigger derived from the active screen during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The logo animation has run its course.
    LogoDone,
    /// Enter, or a pointer press and release inside the phase.
    Confirm,
    /// A menu entry was chosen.
    MenuSelected(MenuChoice),
    /// The settings panel asked to close.
    SettingsExit,
    /// The player reached the goal.
    BoardSolved,
    /// The help button was released.
    HelpRequested,
    /// The settings button was released.
    SettingsRequested,
    /// Solution replay completed its grace hold.
    ReplayFinished,
    /// The ending restart button was released.
    RestartReleased,
    /// The ending new-game button was released.
    NewGameReleased,
}

/// Board operation performed while entering a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum BoardEffect {
    /// Leave the board alone.
    #[default]
    None,
    /// Rewind to the root and arm the solution replay.
    BeginReplay,
    /// Discard every move, keeping the root.
    Restart,
    /// Install a fresh random root.
    Reset,
}

/// Result of feeding a signal to the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No change.
    Stay,
    /// Switch phase, applying `effect` to the board first.
    Enter {
        /// Phase to activate.
        phase: Phase,
        /// Board operation to perform.
        effect: BoardEffect,
    },
    /// Close the application.
    Quit,
}

impl Transition {
    fn to(phase: Phase) -> Self {
        Self::Enter {
            phase,
            effect: BoardEffect::None,
        }
    }
}

impl Phase {
    /// Looks up the transition for `signal` in this phase.
    ///
    /// Total: pairs without an entry stay put.
    #[instrument(level = "debug")]
    pub fn transition(self, signal: Signal) -> Transition {
        match (self, signal) {
            (Self::Logo, Signal::LogoDone) => Transition::to(Self::Title),
            (Self::Title, Signal::Confirm) => Transition::to(Self::Menu),
            (Self::Menu, Signal::MenuSelected(MenuChoice::NewGame)) => {
                Transition::to(Self::Gameplay)
            }
            (Self::Menu, Signal::MenuSelected(MenuChoice::Settings)) => {
                Transition::to(Self::Settings)
            }
            (Self::Menu, Signal::MenuSelected(MenuChoice::Quit)) => Transition::Quit,
            (Self::Settings, Signal::SettingsExit) => Transition::to(Self::Menu),
            (Self::Gameplay, Signal::BoardSolved) => Transition::to(Self::Celebration),
            (Self::Gameplay, Signal::HelpRequested) => Transition::Enter {
                phase: Self::Help,
                effect: BoardEffect::BeginReplay,
            },
            (Self::Gameplay, Signal::SettingsRequested) => Transition::to(Self::Settings),
            (Self::Help, Signal::ReplayFinished) => Transition::to(Self::Sad),
            (Self::Celebration | Self::Sad, Signal::Confirm) => Transition::to(Self::Ending),
            (Self::Ending, Signal::RestartReleased) => Transition::Enter {
                phase: Self::Gameplay,
                effect: BoardEffect::Restart,
            },
            (Self::Ending, Signal::NewGameReleased) => Transition::Enter {
                phase: Self::Gameplay,
                effect: BoardEffect::Reset,
            },
            _ => Transition::Stay,
        }
    }
}

/// What a screen sees during one frame.
#[derive(Debug, new)]
pub struct FrameContext<'a, S, G> {
    /// Input observed this frame.
    pub input: &'a FrameInput,
    /// Wall time since the previous frame.
    pub elapsed: Duration,
    /// The shared board.
    pub board: &'a mut BoardEngine<S, G>,
}

/// A sub-screen of the state machine.
///
/// Each screen owns its own state and turns one frame of input into at most
/// one [`Signal`]. The controller owns the transitions.
pub trait Screen {
    /// Processes a frame, returning the signal it raised, if any.
    fn update<S: Solver, G: LayoutGenerator>(
        &mut self,
        frame: &mut FrameContext<'_, S, G>,
    ) -> Option<Signal>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_linear_intro() {
        assert_eq!(
            Phase::Logo.transition(Signal::LogoDone),
            Transition::to(Phase::Title)
        );
        assert_eq!(
            Phase::Title.transition(Signal::Confirm),
            Transition::to(Phase::Menu)
        );
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(
            Phase::Menu.transition(Signal::MenuSelected(MenuChoice::NewGame)),
            Transition::to(Phase::Gameplay)
        );
        assert_eq!(
            Phase::Menu.transition(Signal::MenuSelected(MenuChoice::Settings)),
            Transition::to(Phase::Settings)
        );
        assert_eq!(
            Phase::Menu.transition(Signal::MenuSelected(MenuChoice::Quit)),
            Transition::Quit
        );
    }

    #[test]
    fn test_help_begins_replay() {
        assert_eq!(
            Phase::Gameplay.transition(Signal::HelpRequested),
            Transition::Enter {
                phase: Phase::Help,
                effect: BoardEffect::BeginReplay
            }
        );
    }

    #[test]
    fn test_ending_buttons_carry_board_effects() {
        assert_eq!(
            Phase::Ending.transition(Signal::RestartReleased),
            Transition::Enter {
                phase: Phase::Gameplay,
                effect: BoardEffect::Restart
            }
        );
        assert_eq!(
            Phase::Ending.transition(Signal::NewGameReleased),
            Transition::Enter {
                phase: Phase::Gameplay,
                effect: BoardEffect::Reset
            }
        );
    }

    #[test]
    fn test_settings_exit_always_returns_to_menu() {
        assert_eq!(
            Phase::Settings.transition(Signal::SettingsExit),
            Transition::to(Phase::Menu)
        );
    }

    #[test]
    fn test_unmatched_pairs_stay() {
        for phase in Phase::iter() {
            if phase != Phase::Logo {
                assert_eq!(phase.transition(Signal::LogoDone), Transition::Stay);
            }
        }
        assert_eq!(Phase::Help.transition(Signal::Confirm), Transition::Stay);
        assert_eq!(Phase::Gameplay.transition(Signal::Confirm), Transition::Stay);
        assert_eq!(
            Phase::Title.transition(Signal::MenuSelected(MenuChoice::Quit)),
            Transition::Stay
        );
    }
}
