//! Settings screen: master volume and background music.

use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

use crate::flow::screen::{FrameContext, Screen, Signal};
use crate::flow::settings::AudioSettings;
use crate::input::Key;
use slidr_puzzle::{EdgeFlag, LayoutGenerator, Solver};

/// Rows the focus can rest on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SettingsRow {
    /// Master volume slider.
    Volume,
    /// Background music toggle.
    Music,
    /// Return to the menu.
    Back,
}

/// State for the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsScreen {
    settings: AudioSettings,
    focus: SettingsRow,
    exit: EdgeFlag,
}

impl SettingsScreen {
    /// Creates a panel pre-populated with the current settings.
    #[instrument]
    pub fn new(settings: AudioSettings) -> Self {
        debug!("Initializing SettingsScreen");
        Self {
            settings,
            focus: SettingsRow::Volume,
            exit: EdgeFlag::default(),
        }
    }

    /// The edited settings (read by the controller on the way out).
    pub fn settings(&self) -> AudioSettings {
        self.settings
    }

    /// The focused row.
    pub fn focus(&self) -> SettingsRow {
        self.focus
    }

    /// Consumes the exit request.
    pub fn take_exit(&mut self) -> bool {
        self.exit.take()
    }

    fn move_focus(&mut self, forward: bool) {
        let rows: Vec<SettingsRow> = SettingsRow::iter().collect();
        let count = rows.len();
        let current = rows.iter().position(|r| *r == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.focus = rows[next];
    }

    /// Applies a key press.
    #[instrument(skip(self), fields(focus = %self.focus))]
    pub fn handle_key(&mut self, key: Key) {
        match (key, self.focus) {
            (Key::Up, _) => self.move_focus(false),
            (Key::Down, _) => self.move_focus(true),
            (Key::Left, SettingsRow::Volume) => self.settings = self.settings.quieter(),
            (Key::Right, SettingsRow::Volume) => self.settings = self.settings.louder(),
            (Key::Left | Key::Right | Key::Enter, SettingsRow::Music) => {
                self.settings = self.settings.toggle_music();
            }
            (Key::Enter, SettingsRow::Back) | (Key::Escape, _) => {
                info!(
                    volume = self.settings.volume,
                    music = self.settings.background_music,
                    "Leaving settings screen"
                );
                self.exit.raise();
            }
            _ => {}
        }
    }
}

impl Screen for SettingsScreen {
    fn update<S: Solver, G: LayoutGenerator>(
        &mut self,
        frame: &mut FrameContext<'_, S, G>,
    ) -> Option<Signal> {
        if let Some(key) = frame.input.key() {
            self.handle_key(key);
        }
        self.take_exit().then_some(Signal::SettingsExit)
    }
}
