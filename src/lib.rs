//! Slidr - sliding-tile puzzle game core
//!
//! The frame-driven half of the game: the screen state machine that
//! sequences intro, menu, play, help and results around a
//! [`slidr_puzzle::BoardEngine`].
//!
//! # Architecture
//!
//! - **Flow**: [`ScreenMachine`] owns the board and one active sub-screen;
//!   each frame the screen turns a [`FrameInput`] into at most one [`Signal`]
//!   and the pure [`Phase::transition`] table picks the next phase
//! - **Geometry**: hit regions for the gameplay and ending buttons
//! - **Config**: [`SlidrConfig`] loaded from TOML
//! - **Autoplay**: a scripted, headless tour of the whole flow
//!
//! Rendering, audio playback and device polling belong to the host.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use slidr::{FrameInput, Key, Phase, ScreenMachine, SlidrConfig};
//! use slidr_puzzle::{BoardEngine, BreadthFirstSolver, ShuffledLayout};
//!
//! let config = SlidrConfig::default();
//! let board = BoardEngine::new(
//!     BreadthFirstSolver,
//!     ShuffledLayout::seeded(1),
//!     2,
//!     config.replay_timing(),
//! );
//! let mut machine = ScreenMachine::from_config(board, &config);
//!
//! machine.update(&FrameInput::default(), Duration::from_secs(5));
//! assert_eq!(machine.phase(), Phase::Title);
//!
//! machine.update(&FrameInput::key_press(Key::Enter), Duration::from_millis(16));
//! assert_eq!(machine.phase(), Phase::Menu);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod autoplay;
mod config;
mod flow;
mod geometry;
mod input;

// Crate-level exports - Screen flow
pub use flow::screens::{
    ConfirmGesture, ConfirmScreen, DEFAULT_LOGO_DURATION, EndingScreen, GameplayScreen,
    HelpScreen, LogoAnimation, LogoScreen, MenuChoice, MenuScreen, SettingsRow, SettingsScreen,
    TimedLogo,
};
pub use flow::{
    AudioSettings, BoardEffect, DEFAULT_VOLUME, FrameContext, FrameOutcome, MAX_VOLUME, Phase,
    Screen, ScreenMachine, Signal, Transition, VOLUME_STEP,
};

// Crate-level exports - Geometry
pub use geometry::{
    BOARD_EXTENT, BORDER_THICKNESS, BUTTON_HEIGHT, BUTTON_WIDTH, Button, ButtonState,
    ENDING_ASPECT, ENDING_FONT_SIZE, ENDING_PADDING, EndingLayout, GameplayLayout,
    MonospaceMeasure, NEW_GAME_LABEL, Point, RESTART_LABEL, Rect, ScreenSize, TextMeasure,
};

// Crate-level exports - Input
pub use input::{FrameInput, Key};

// Crate-level exports - Configuration
pub use config::{
    AudioSection, BoardSection, ConfigError, LogoSection, MAX_SOLVABLE_SIZE, ReplaySection,
    ScreenSection, SlidrConfig,
};

// Crate-level exports - Autoplay
pub use autoplay::{AutoplayError, AutoplayReport, DEFAULT_MAX_FRAMES, PhaseChange, run_autoplay};
