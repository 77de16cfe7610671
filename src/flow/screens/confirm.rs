//! Screens that only wait for a confirm gesture: Title, Sad and Celebration.

use tracing::debug;

use crate::flow::screen::{FrameContext, Screen, Signal};
use crate::input::{FrameInput, Key};
use slidr_puzzle::{LayoutGenerator, Solver};

/// Tracks Enter, or a pointer press followed by a release, within one phase.
///
/// A release is only accepted after a press observed by the same tracker, so
/// the click that led into the phase cannot confirm it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfirmGesture {
    pressed_in_phase: bool,
}

impl ConfirmGesture {
    /// Feeds a frame, returning true when the gesture completes.
    pub fn observe(&mut self, input: &FrameInput) -> bool {
        if input.pointer_pressed() {
            self.pressed_in_phase = true;
        }
        let confirmed =
            input.pressed(Key::Enter) || (self.pressed_in_phase && input.pointer_released());
        if confirmed {
            self.pressed_in_phase = false;
        }
        confirmed
    }
}

/// State for a screen that advances on confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfirmScreen {
    gesture: ConfirmGesture,
}

impl Screen for ConfirmScreen {
    fn update<S: Solver, G: LayoutGenerator>(
        &mut self,
        frame: &mut FrameContext<'_, S, G>,
    ) -> Option<Signal> {
        let confirmed = self.gesture.observe(frame.input);
        if confirmed {
            debug!("Confirm gesture completed");
        }
        confirmed.then_some(Signal::Confirm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_enter_confirms() {
        let mut gesture = ConfirmGesture::default();
        assert!(gesture.observe(&FrameInput::key_press(Key::Enter)));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut gesture = ConfirmGesture::default();
        assert!(!gesture.observe(&FrameInput::release_at(Point::default())));
    }

    #[test]
    fn test_press_then_release_confirms_once() {
        let mut gesture = ConfirmGesture::default();
        let at = Point::new(3.0, 4.0);
        assert!(!gesture.observe(&FrameInput::press_at(at)));
        assert!(!gesture.observe(&FrameInput::default().with_pointer_down(true)));
        assert!(gesture.observe(&FrameInput::release_at(at)));
        assert!(!gesture.observe(&FrameInput::release_at(at)));
    }
}
