//! Gameplay screen: tile clicks, arrow keys and the side buttons.

use tracing::{debug, instrument};

use crate::flow::screen::{FrameContext, Screen, Signal};
use crate::geometry::{Button, GameplayLayout};
use slidr_puzzle::{LayoutGenerator, Solver};

/// State for the gameplay screen.
#[derive(Debug, Clone, PartialEq)]
pub struct GameplayScreen {
    layout: GameplayLayout,
    undo: Button,
    restart: Button,
    help: Button,
    settings: Button,
}

impl GameplayScreen {
    /// Creates the screen with buttons placed by `layout`.
    #[instrument]
    pub fn new(layout: GameplayLayout) -> Self {
        debug!("Initializing GameplayScreen");
        Self {
            layout,
            undo: Button::new("Undo", *layout.undo()),
            restart: Button::new("Restart", *layout.restart()),
            help: Button::new("Help", *layout.help()),
            settings: Button::new("Settings", *layout.settings()),
        }
    }

    /// The hit regions in use.
    pub fn layout(&self) -> &GameplayLayout {
        &self.layout
    }

    /// Undo, Restart, Help and Settings, top to bottom.
    pub fn buttons(&self) -> [&Button; 4] {
        [&self.undo, &self.restart, &self.help, &self.settings]
    }
}

impl Screen for GameplayScreen {
    #[instrument(level = "trace", skip_all)]
    fn update<S: Solver, G: LayoutGenerator>(
        &mut self,
        frame: &mut FrameContext<'_, S, G>,
    ) -> Option<Signal> {
        let input = frame.input;
        let board = &mut *frame.board;

        let undo = self.undo.track(input);
        let restart = self.restart.track(input);
        let help = self.help.track(input);
        let settings = self.settings.track(input);

        if input.pointer_pressed()
            && let Some(cell) = self.layout.cell_at(input.pointer(), board.grid_size())
            && let Some(direction) = board.current().state().direction_towards(cell)
        {
            debug!(cell, %direction, "Tile clicked");
            board.apply_move(direction);
        }

        if let Some(direction) = input.key().and_then(|key| key.direction()) {
            board.apply_move(direction);
        }

        if restart {
            board.restart_to_root();
        }
        if undo {
            board.undo();
        }
        if help {
            board.request_help();
        }
        if settings {
            board.request_settings();
        }

        // Every edge is taken each frame so a lower-priority one never
        // outlives the frame it was raised in.
        let solved = board.is_finished();
        let help = board.requested_help();
        let settings = board.go_settings();

        if solved {
            Some(Signal::BoardSolved)
        } else if help {
            Some(Signal::HelpRequested)
        } else if settings {
            Some(Signal::SettingsRequested)
        } else {
            None
        }
    }
}
