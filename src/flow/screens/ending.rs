//! Ending screen: restart the same layout or start a new one.

use tracing::{debug, instrument};

use crate::flow::screen::{FrameContext, Screen, Signal};
use crate::geometry::{Button, EndingLayout, NEW_GAME_LABEL, RESTART_LABEL};
use slidr_puzzle::{LayoutGenerator, Solver};

/// State for the ending screen.
#[derive(Debug, Clone, PartialEq)]
pub struct EndingScreen {
    restart: Button,
    new_game: Button,
}

impl EndingScreen {
    /// Creates the two buttons from a measured layout.
    #[instrument]
    pub fn new(layout: &EndingLayout) -> Self {
        debug!("Initializing EndingScreen");
        Self {
            restart: Button::new(RESTART_LABEL, *layout.restart()),
            new_game: Button::new(NEW_GAME_LABEL, *layout.new_game()),
        }
    }

    /// The restart button.
    pub fn restart(&self) -> &Button {
        &self.restart
    }

    /// The new-game button.
    pub fn new_game(&self) -> &Button {
        &self.new_game
    }
}

impl Screen for EndingScreen {
    fn update<S: Solver, G: LayoutGenerator>(
        &mut self,
        frame: &mut FrameContext<'_, S, G>,
    ) -> Option<Signal> {
        let restart = self.restart.track(frame.input);
        let new_game = self.new_game.track(frame.input);
        if restart {
            Some(Signal::RestartReleased)
        } else if new_game {
            Some(Signal::NewGameReleased)
        } else {
            None
        }
    }
}
