//! Main menu screen: New Game, Settings, Quit.

use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

use crate::flow::screen::{FrameContext, Screen, Signal};
use crate::input::Key;
use slidr_puzzle::{LayoutGenerator, Solver};

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MenuChoice {
    /// Start or resume the puzzle.
    #[strum(to_string = "New Game")]
    NewGame,
    /// Open the settings panel.
    Settings,
    /// Close the application.
    Quit,
}

impl MenuChoice {
    /// Position in the menu: 0, 1 or 2.
    pub fn index(self) -> usize {
        match self {
            Self::NewGame => 0,
            Self::Settings => 1,
            Self::Quit => 2,
        }
    }

    /// The entry at `index`, if there is one.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    fn count() -> usize {
        Self::iter().count()
    }
}

/// State for the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuScreen {
    highlighted: usize,
    selection: Option<MenuChoice>,
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuScreen {
    /// Creates a menu with the first entry highlighted.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MenuScreen");
        Self {
            highlighted: 0,
            selection: None,
        }
    }

    /// The highlighted entry.
    pub fn highlighted(&self) -> MenuChoice {
        MenuChoice::from_index(self.highlighted).unwrap_or(MenuChoice::NewGame)
    }

    /// Moves the highlight up, wrapping to the bottom.
    #[instrument(skip(self))]
    pub fn select_previous(&mut self) {
        let count = MenuChoice::count();
        self.highlighted = (self.highlighted + count - 1) % count;
    }

    /// Moves the highlight down, wrapping to the top.
    #[instrument(skip(self))]
    pub fn select_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % MenuChoice::count();
    }

    /// Chooses the highlighted entry.
    #[instrument(skip(self))]
    pub fn confirm(&mut self) {
        let choice = self.highlighted();
        info!(%choice, "Menu entry chosen");
        self.selection = Some(choice);
    }

    /// Consumes the pending choice. `None` until the player confirms.
    pub fn take_selection(&mut self) -> Option<MenuChoice> {
        self.selection.take()
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Up => self.select_previous(),
            Key::Down => self.select_next(),
            Key::Enter => self.confirm(),
            _ => {}
        }
    }
}

impl Screen for MenuScreen {
    fn update<S: Solver, G: LayoutGenerator>(
        &mut self,
        frame: &mut FrameContext<'_, S, G>,
    ) -> Option<Signal> {
        if let Some(key) = frame.input.key() {
            self.handle_key(key);
        }
        self.take_selection().map(Signal::MenuSelected)
    }
}
