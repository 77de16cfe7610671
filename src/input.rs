//! Per-frame input snapshot.
//!
//! The host polls its devices once per frame and hands the machine a
//! [`FrameInput`]; the core never talks to a device itself.

use derive_setters::Setters;
use slidr_puzzle::Direction;

use crate::geometry::Point;

/// Keys the screens react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Key {
    /// Confirm.
    Enter,
    /// Leave the current panel.
    Escape,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
}

impl Key {
    /// Slide direction for an arrow key: the blank travels the way the arrow
    /// points.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Enter | Self::Escape => None,
        }
    }
}

impl From<Direction> for Key {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }
}

/// Everything the host observed during one frame.
///
/// Build with the `with_*` setters:
///
/// ```
/// use slidr::{FrameInput, Key, Point};
///
/// let input = FrameInput::default()
///     .with_key(Key::Enter)
///     .with_pointer(Point::new(10.0, 20.0));
/// assert_eq!(input.key(), Some(Key::Enter));
/// assert!(!input.pointer_pressed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Setters)]
#[setters(prefix = "with_")]
pub struct FrameInput {
    /// Key pressed this frame.
    #[setters(strip_option)]
    key: Option<Key>,
    /// Pointer position.
    pointer: Point,
    /// Primary pointer button went down this frame.
    pointer_pressed: bool,
    /// Primary pointer button is held.
    pointer_down: bool,
    /// Primary pointer button went up this frame.
    pointer_released: bool,
}

impl FrameInput {
    /// A frame with only `key` pressed.
    pub fn key_press(key: Key) -> Self {
        Self::default().with_key(key)
    }

    /// A frame in which the pointer goes down at `point`.
    pub fn press_at(point: Point) -> Self {
        Self::default()
            .with_pointer(point)
            .with_pointer_pressed(true)
            .with_pointer_down(true)
    }

    /// A frame in which the pointer comes up at `point`.
    pub fn release_at(point: Point) -> Self {
        Self::default()
            .with_pointer(point)
            .with_pointer_released(true)
    }

    /// Key pressed this frame, if any.
    pub fn key(&self) -> Option<Key> {
        self.key
    }

    /// Pointer position.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// True on the frame the pointer button goes down.
    pub fn pointer_pressed(&self) -> bool {
        self.pointer_pressed
    }

    /// True while the pointer button is held.
    pub fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// True on the frame the pointer button comes up.
    pub fn pointer_released(&self) -> bool {
        self.pointer_released
    }

    /// True if `key` was pressed this frame.
    pub fn pressed(&self, key: Key) -> bool {
        self.key == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_arrow_keys_round_trip_directions() {
        for direction in Direction::iter() {
            assert_eq!(Key::from(direction).direction(), Some(direction));
        }
        assert_eq!(Key::Enter.direction(), None);
    }

    #[test]
    fn test_press_and_release_helpers() {
        let at = Point::new(1.0, 2.0);
        let press = FrameInput::press_at(at);
        assert!(press.pointer_pressed() && press.pointer_down());
        assert!(!press.pointer_released());

        let release = FrameInput::release_at(at);
        assert!(release.pointer_released());
        assert!(!release.pointer_down());
        assert_eq!(release.pointer(), at);
    }
}
