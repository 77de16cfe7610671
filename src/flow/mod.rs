//! Screen flow: phases, sub-screens and the controller tying them together.

mod controller;
mod screen;
pub mod screens;
mod settings;

pub use controller::{FrameOutcome, ScreenMachine};
pub use screen::{BoardEffect, FrameContext, Phase, Screen, Signal, Transition};
pub use settings::{AudioSettings, DEFAULT_VOLUME, MAX_VOLUME, VOLUME_STEP};
