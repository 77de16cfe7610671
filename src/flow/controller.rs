//! Screen controller: the state machine sequencing every sub-screen.

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::config::SlidrConfig;
use crate::flow::screen::{BoardEffect, FrameContext, Phase, Screen, Signal, Transition};
use crate::flow::screens::{
    ConfirmScreen, EndingScreen, GameplayScreen, HelpScreen, LogoAnimation, LogoScreen,
    MenuScreen, SettingsScreen, TimedLogo,
};
use crate::flow::settings::AudioSettings;
use crate::geometry::{EndingLayout, GameplayLayout, MonospaceMeasure, ScreenSize, TextMeasure};
use crate::input::FrameInput;
use slidr_puzzle::{BoardEngine, LayoutGenerator, Solver};

/// Active screen and its per-phase state.
#[derive(Debug)]
enum ActiveScreen {
    Logo(LogoScreen),
    Title(ConfirmScreen),
    Menu(MenuScreen),
    Settings(SettingsScreen),
    Gameplay(GameplayScreen),
    Help(HelpScreen),
    Sad(ConfirmScreen),
    Celebration(ConfirmScreen),
    Ending(EndingScreen),
}

impl ActiveScreen {
    fn phase(&self) -> Phase {
        match self {
            Self::Logo(_) => Phase::Logo,
            Self::Title(_) => Phase::Title,
            Self::Menu(_) => Phase::Menu,
            Self::Settings(_) => Phase::Settings,
            Self::Gameplay(_) => Phase::Gameplay,
            Self::Help(_) => Phase::Help,
            Self::Sad(_) => Phase::Sad,
            Self::Celebration(_) => Phase::Celebration,
            Self::Ending(_) => Phase::Ending,
        }
    }
}

/// What one call to [`ScreenMachine::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The phase did not change.
    Stayed(Phase),
    /// The machine switched phase.
    Moved {
        /// Phase active at the start of the frame.
        from: Phase,
        /// Phase active now.
        to: Phase,
        /// Board operation performed on the way.
        effect: BoardEffect,
    },
    /// The player chose Quit; the host should close.
    Quit,
}

/// Drives the screen flow around one board.
///
/// Call [`ScreenMachine::update`] once per frame with that frame's input and
/// elapsed wall time.
#[derive(Debug)]
pub struct ScreenMachine<S, G> {
    board: BoardEngine<S, G>,
    screen: ActiveScreen,
    measure: Box<dyn TextMeasure>,
    screen_size: ScreenSize,
    gameplay_layout: GameplayLayout,
    ending_layout: EndingLayout,
    audio: AudioSettings,
    close: bool,
}

impl<S: Solver, G: LayoutGenerator> ScreenMachine<S, G> {
    /// Creates a machine starting at the logo.
    #[instrument(skip(board, logo, measure))]
    pub fn new(
        board: BoardEngine<S, G>,
        logo: Box<dyn LogoAnimation>,
        measure: Box<dyn TextMeasure>,
        screen_size: ScreenSize,
        audio: AudioSettings,
    ) -> Self {
        info!("Creating ScreenMachine");
        let ending_layout = EndingLayout::measure(screen_size, measure.as_ref());
        Self {
            board,
            screen: ActiveScreen::Logo(LogoScreen::new(logo)),
            measure,
            screen_size,
            gameplay_layout: GameplayLayout::new(screen_size),
            ending_layout,
            audio,
            close: false,
        }
    }

    /// Creates a machine with a timed logo and monospace measurement, sized
    /// and configured from `config`.
    pub fn from_config(board: BoardEngine<S, G>, config: &SlidrConfig) -> Self {
        Self::new(
            board,
            Box::new(TimedLogo::new(config.logo_duration())),
            Box::new(MonospaceMeasure::default()),
            config.screen_size(),
            config.audio_settings(),
        )
    }

    /// Runs the active screen for one frame and applies any transition it
    /// triggers on the same frame.
    #[instrument(level = "trace", skip(self, input), fields(phase = %self.phase()))]
    pub fn update(&mut self, input: &FrameInput, elapsed: Duration) -> FrameOutcome {
        if self.close {
            return FrameOutcome::Quit;
        }

        let mut frame = FrameContext::new(input, elapsed, &mut self.board);
        let signal = match &mut self.screen {
            ActiveScreen::Logo(s) => s.update(&mut frame),
            ActiveScreen::Title(s) => s.update(&mut frame),
            ActiveScreen::Menu(s) => s.update(&mut frame),
            ActiveScreen::Settings(s) => s.update(&mut frame),
            ActiveScreen::Gameplay(s) => s.update(&mut frame),
            ActiveScreen::Help(s) => s.update(&mut frame),
            ActiveScreen::Sad(s) => s.update(&mut frame),
            ActiveScreen::Celebration(s) => s.update(&mut frame),
            ActiveScreen::Ending(s) => s.update(&mut frame),
        };

        let from = self.phase();
        match signal {
            Some(signal) => self.apply_transition(from, signal),
            None => FrameOutcome::Stayed(from),
        }
    }

    /// Applies the transition `signal` triggers in phase `from`.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, from: Phase, signal: Signal) -> FrameOutcome {
        let transition = from.transition(signal);
        debug!(?transition, "Applying screen transition");
        match transition {
            Transition::Stay => {
                warn!(?signal, "Signal has no transition in this phase");
                FrameOutcome::Stayed(from)
            }
            Transition::Quit => {
                info!("Quit chosen; closing");
                self.close = true;
                FrameOutcome::Quit
            }
            Transition::Enter { phase, effect } => {
                // Persist any edits made on the settings screen.
                if let ActiveScreen::Settings(panel) = &self.screen {
                    self.audio = panel.settings();
                    debug!(audio = ?self.audio, "Saving updated settings");
                }
                self.apply_effect(effect);
                self.screen = self.enter(phase);
                info!(%from, to = %phase, %effect, "Screen transition");
                FrameOutcome::Moved {
                    from,
                    to: phase,
                    effect,
                }
            }
        }
    }

    fn apply_effect(&mut self, effect: BoardEffect) {
        match effect {
            BoardEffect::None => {}
            BoardEffect::BeginReplay => self.board.begin_solution_replay(),
            BoardEffect::Restart => self.board.restart_to_root(),
            BoardEffect::Reset => self.board.reset_with_new_layout(),
        }
    }

    /// Builds the fresh per-phase state for `phase`.
    fn enter(&mut self, phase: Phase) -> ActiveScreen {
        match phase {
            Phase::Logo => {
                debug!("Re-entering logo with a default animation");
                ActiveScreen::Logo(LogoScreen::new(Box::new(TimedLogo::default())))
            }
            Phase::Title => ActiveScreen::Title(ConfirmScreen::default()),
            Phase::Menu => ActiveScreen::Menu(MenuScreen::new()),
            Phase::Settings => ActiveScreen::Settings(SettingsScreen::new(self.audio)),
            Phase::Gameplay => {
                self.ending_layout =
                    EndingLayout::measure(self.screen_size, self.measure.as_ref());
                ActiveScreen::Gameplay(GameplayScreen::new(self.gameplay_layout))
            }
            Phase::Help => ActiveScreen::Help(HelpScreen),
            Phase::Sad => ActiveScreen::Sad(ConfirmScreen::default()),
            Phase::Celebration => {
                if let Some(outcome) = self.board.outcome() {
                    info!(
                        optimal_moves = outcome.optimal_moves,
                        moves_taken = outcome.moves_taken,
                        "Result"
                    );
                }
                ActiveScreen::Celebration(ConfirmScreen::default())
            }
            Phase::Ending => ActiveScreen::Ending(EndingScreen::new(&self.ending_layout)),
        }
    }

    /// The active phase.
    pub fn phase(&self) -> Phase {
        self.screen.phase()
    }

    /// True once the player chose Quit.
    pub fn should_close(&self) -> bool {
        self.close
    }

    /// The board.
    pub fn board(&self) -> &BoardEngine<S, G> {
        &self.board
    }

    /// Current audio preferences.
    pub fn audio(&self) -> AudioSettings {
        self.audio
    }

    /// Hit regions of the gameplay screen.
    pub fn gameplay_layout(&self) -> &GameplayLayout {
        &self.gameplay_layout
    }

    /// Hit regions of the ending screen, as last measured.
    pub fn ending_layout(&self) -> &EndingLayout {
        &self.ending_layout
    }

    /// The gameplay screen, while it is active.
    pub fn gameplay(&self) -> Option<&GameplayScreen> {
        match &self.screen {
            ActiveScreen::Gameplay(s) => Some(s),
            _ => None,
        }
    }

    /// The menu, while it is active.
    pub fn menu(&self) -> Option<&MenuScreen> {
        match &self.screen {
            ActiveScreen::Menu(s) => Some(s),
            _ => None,
        }
    }

    /// The settings panel, while it is active.
    pub fn settings(&self) -> Option<&SettingsScreen> {
        match &self.screen {
            ActiveScreen::Settings(s) => Some(s),
            _ => None,
        }
    }

    /// The ending screen, while it is active.
    pub fn ending(&self) -> Option<&EndingScreen> {
        match &self.screen {
            ActiveScreen::Ending(s) => Some(s),
            _ => None,
        }
    }
}
