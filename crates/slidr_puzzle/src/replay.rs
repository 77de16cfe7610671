//! Wall-time pacing for solution replay.

use std::time::Duration;

use derive_new::new;
use tracing::instrument;

use crate::grid::Direction;

/// Default time between replayed slides.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(800);

/// Default extra hold after the final slide before replay reports finished.
pub const DEFAULT_GRACE: Duration = Duration::from_millis(200);

/// Replay pacing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ReplayTiming {
    /// Minimum time between two replayed slides.
    pub step_interval: Duration,
    /// Additional hold after the last slide.
    pub grace: Duration,
}

impl ReplayTiming {
    /// Time after the last slide at which replay finishes.
    pub fn finish_after(&self) -> Duration {
        self.step_interval + self.grace
    }
}

impl Default for ReplayTiming {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_INTERVAL, DEFAULT_GRACE)
    }
}

/// Result of one replay step call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayProgress {
    /// No replay has begun for the current root.
    Idle,
    /// The interval has not elapsed yet.
    Waiting,
    /// A slide was applied.
    Stepped(Direction),
    /// Every slide was applied and the grace hold has passed.
    Finished,
}

/// Cursor into a solution sequence plus the time since its last step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ReplayCursor {
    active: bool,
    finished: bool,
    next: usize,
    since_last_step: Duration,
}

/// What the cursor wants the engine to do this call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CursorAction {
    Idle,
    Wait,
    Apply(usize),
    Finish,
    AlreadyFinished,
}

impl ReplayCursor {
    /// Starts a replay at `first`, the index after the origin placeholder.
    pub(crate) fn begin(first: usize) -> Self {
        Self {
            active: true,
            finished: false,
            next: first,
            since_last_step: Duration::ZERO,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn next_index(&self) -> usize {
        self.next
    }

    /// Accumulates `elapsed` and decides the next action.
    ///
    /// `remaining` is true while the sequence has a slide at the cursor.
    #[instrument(level = "trace", skip(self, timing))]
    pub(crate) fn advance(
        &mut self,
        elapsed: Duration,
        remaining: bool,
        timing: &ReplayTiming,
    ) -> CursorAction {
        if !self.active {
            return CursorAction::Idle;
        }
        if self.finished {
            return CursorAction::AlreadyFinished;
        }

        self.since_last_step += elapsed;

        if remaining {
            if self.since_last_step > timing.step_interval {
                let index = self.next;
                self.next += 1;
                self.since_last_step = Duration::ZERO;
                return CursorAction::Apply(index);
            }
            return CursorAction::Wait;
        }

        if self.since_last_step > timing.finish_after() {
            self.finished = true;
            return CursorAction::Finish;
        }
        CursorAction::Wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    #[test]
    fn test_inactive_cursor_is_idle() {
        let mut cursor = ReplayCursor::default();
        let action = cursor.advance(TICK, true, &ReplayTiming::default());
        assert_eq!(action, CursorAction::Idle);
    }

    #[test]
    fn test_step_requires_strictly_more_than_interval() {
        let timing = ReplayTiming::default();
        let mut cursor = ReplayCursor::begin(1);
        assert_eq!(cursor.advance(Duration::from_millis(800), true, &timing), CursorAction::Wait);
        assert_eq!(cursor.advance(Duration::from_millis(1), true, &timing), CursorAction::Apply(1));
        assert_eq!(cursor.next_index(), 2);
    }

    #[test]
    fn test_large_elapsed_steps_once() {
        let timing = ReplayTiming::default();
        let mut cursor = ReplayCursor::begin(1);
        assert_eq!(cursor.advance(Duration::from_secs(5), true, &timing), CursorAction::Apply(1));
        assert_eq!(cursor.advance(Duration::ZERO, true, &timing), CursorAction::Wait);
    }

    #[test]
    fn test_finish_waits_for_grace() {
        let timing = ReplayTiming::default();
        let mut cursor = ReplayCursor::begin(1);
        assert_eq!(cursor.advance(Duration::from_millis(900), false, &timing), CursorAction::Wait);
        assert_eq!(cursor.advance(Duration::from_millis(200), false, &timing), CursorAction::Finish);
        assert_eq!(cursor.advance(TICK, false, &timing), CursorAction::AlreadyFinished);
    }
}
