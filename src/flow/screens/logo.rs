//! Logo screen: waits for the intro animation.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::flow::screen::{FrameContext, Screen, Signal};
use slidr_puzzle::{LayoutGenerator, Solver};

/// Intro length: 276 frames at 60 fps.
pub const DEFAULT_LOGO_DURATION: Duration = Duration::from_millis(4600);

/// The intro animation shown before the title.
pub trait LogoAnimation: std::fmt::Debug {
    /// Advances the animation by `elapsed` wall time.
    fn update(&mut self, elapsed: Duration);

    /// Returns true once the animation has finished.
    fn is_done(&self) -> bool;
}

/// An animation that is done after a fixed amount of wall time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedLogo {
    duration: Duration,
    elapsed: Duration,
}

impl TimedLogo {
    /// Creates an animation lasting `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }
}

impl Default for TimedLogo {
    fn default() -> Self {
        Self::new(DEFAULT_LOGO_DURATION)
    }
}

impl LogoAnimation for TimedLogo {
    fn update(&mut self, elapsed: Duration) {
        self.elapsed = self.elapsed.saturating_add(elapsed);
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// State for the logo screen.
#[derive(Debug)]
pub struct LogoScreen {
    animation: Box<dyn LogoAnimation>,
}

impl LogoScreen {
    /// Wraps an animation.
    #[instrument]
    pub fn new(animation: Box<dyn LogoAnimation>) -> Self {
        debug!("Initializing LogoScreen");
        Self { animation }
    }
}

impl Screen for LogoScreen {
    fn update<S: Solver, G: LayoutGenerator>(
        &mut self,
        frame: &mut FrameContext<'_, S, G>,
    ) -> Option<Signal> {
        self.animation.update(frame.elapsed);
        self.animation.is_done().then_some(Signal::LogoDone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_logo_finishes_at_duration() {
        let mut logo = TimedLogo::new(Duration::from_secs(1));
        logo.update(Duration::from_millis(999));
        assert!(!logo.is_done());
        logo.update(Duration::from_millis(1));
        assert!(logo.is_done());
    }
}
