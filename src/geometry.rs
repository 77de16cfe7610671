//! Screen-space geometry: points, rectangles, buttons and fixed layouts.
//!
//! Nothing here draws. Layouts only compute the hit regions the screen state
//! machine tests pointer positions against; a renderer can read the same
//! rectangles to paint them.

use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, instrument};

use crate::input::FrameInput;

/// Edge length of the square puzzle board in pixels.
pub const BOARD_EXTENT: f32 = 500.0;

/// Border drawn around the board and gap between stacked buttons.
pub const BORDER_THICKNESS: f32 = 10.0;

/// Width of a gameplay side button.
pub const BUTTON_WIDTH: f32 = 200.0;

/// Height of a gameplay side button.
pub const BUTTON_HEIGHT: f32 = 80.0;

/// Font size used for the ending-screen button labels.
pub const ENDING_FONT_SIZE: u16 = 40;

/// Padding added around ending-screen labels and between the two buttons.
pub const ENDING_PADDING: f32 = 20.0;

/// Ending buttons are this many times taller than they are wide.
pub const ENDING_ASPECT: f32 = 1.6;

/// Label of the ending-screen restart button.
pub const RESTART_LABEL: &str = "RESTART";

/// Label of the ending-screen new-game button.
pub const NEW_GAME_LABEL: &str = "NEW GAME";

/// A position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, new)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: f32,
    /// Vertical offset from the top edge.
    pub y: f32,
}

/// An axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, new)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Returns true if `point` lies inside, left and top edges inclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// The centre of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns true if the two rectangles share any area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Window dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ScreenSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ScreenSize {
    fn w(self) -> f32 {
        self.width as f32
    }

    fn h(self) -> f32 {
        self.height as f32
    }
}

/// Visual state of a clickable button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
pub enum ButtonState {
    /// Pointer is elsewhere.
    #[default]
    Unselected,
    /// Pointer is over the button.
    Hovered,
    /// Pointer is over the button and held down.
    Selected,
}

/// A labelled hit region that activates on pointer release.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Button {
    label: &'static str,
    rect: Rect,
    state: ButtonState,
}

impl Button {
    /// Creates an unselected button.
    pub fn new(label: &'static str, rect: Rect) -> Self {
        Self {
            label,
            rect,
            state: ButtonState::Unselected,
        }
    }

    /// Updates the hover state and returns true if the pointer was released
    /// inside the button this frame.
    pub fn track(&mut self, input: &FrameInput) -> bool {
        if !self.rect.contains(input.pointer()) {
            self.state = ButtonState::Unselected;
            return false;
        }
        self.state = if input.pointer_down() {
            ButtonState::Selected
        } else {
            ButtonState::Hovered
        };
        let released = input.pointer_released();
        if released {
            debug!(label = self.label, "Button released");
        }
        released
    }
}

/// Measures rendered text width.
pub trait TextMeasure: std::fmt::Debug {
    /// Width in pixels of `text` drawn at `font_size`.
    fn measure(&self, text: &str, font_size: u16) -> f32;
}

/// Fixed-advance text measurement: every glyph is `font_size * advance` wide.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct MonospaceMeasure {
    advance: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, font_size: u16) -> f32 {
        text.chars().count() as f32 * f32::from(font_size) * self.advance
    }
}

/// Hit regions of the gameplay screen.
///
/// The board is centred; Undo, Restart, Help and Settings are stacked to its
/// right, starting level with the board's top edge.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct GameplayLayout {
    board: Rect,
    undo: Rect,
    restart: Rect,
    help: Rect,
    settings: Rect,
}

impl GameplayLayout {
    /// Computes the layout for a window.
    #[instrument]
    pub fn new(screen: ScreenSize) -> Self {
        let board = Rect::new(
            (screen.w() - BOARD_EXTENT) / 2.0,
            (screen.h() - BOARD_EXTENT) / 2.0,
            BOARD_EXTENT,
            BOARD_EXTENT,
        );
        let x = board.x + board.width + BORDER_THICKNESS;
        let step = BUTTON_HEIGHT + BORDER_THICKNESS;
        let button = |slot: f32| Rect::new(x, board.y + slot * step, BUTTON_WIDTH, BUTTON_HEIGHT);
        Self {
            board,
            undo: button(0.0),
            restart: button(1.0),
            help: button(2.0),
            settings: button(3.0),
        }
    }

    /// Rectangle of the cell at row-major `index` on a `grid_size` board.
    pub fn cell_rect(&self, index: usize, grid_size: usize) -> Rect {
        let cell = self.board.width / grid_size as f32;
        let row = (index / grid_size) as f32;
        let col = (index % grid_size) as f32;
        Rect::new(
            self.board.x + col * cell,
            self.board.y + row * cell,
            cell,
            cell,
        )
    }

    /// Row-major index of the cell under `point`, if it is on the board.
    pub fn cell_at(&self, point: Point, grid_size: usize) -> Option<usize> {
        if !self.board.contains(point) || grid_size == 0 {
            return None;
        }
        let cell = self.board.width / grid_size as f32;
        let col = (((point.x - self.board.x) / cell) as usize).min(grid_size - 1);
        let row = (((point.y - self.board.y) / cell) as usize).min(grid_size - 1);
        Some(row * grid_size + col)
    }
}

/// Hit regions of the ending screen's two buttons.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct EndingLayout {
    restart: Rect,
    new_game: Rect,
}

impl EndingLayout {
    /// Sizes both buttons from the wider of the two labels.
    #[instrument(skip(measure))]
    pub fn measure(screen: ScreenSize, measure: &dyn TextMeasure) -> Self {
        let width = measure
            .measure(RESTART_LABEL, ENDING_FONT_SIZE)
            .max(measure.measure(NEW_GAME_LABEL, ENDING_FONT_SIZE))
            + ENDING_PADDING;
        let height = ENDING_ASPECT * width;
        let y = (screen.h() - height) / 2.0;
        let layout = Self {
            restart: Rect::new(screen.w() / 2.0 - width - ENDING_PADDING, y, width, height),
            new_game: Rect::new(screen.w() / 2.0 + ENDING_PADDING, y, width, height),
        };
        debug!(?layout, "Measured ending buttons");
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenSize = ScreenSize {
        width: 1200,
        height: 1200,
    };

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(29.9, 29.9)));
        assert!(!rect.contains(Point::new(30.0, 15.0)));
        assert!(!rect.contains(Point::new(9.9, 15.0)));
    }

    #[test]
    fn test_gameplay_board_is_centred() {
        let layout = GameplayLayout::new(SCREEN);
        assert_eq!(*layout.board(), Rect::new(350.0, 350.0, 500.0, 500.0));
    }

    #[test]
    fn test_gameplay_buttons_stack_right_of_board() {
        let layout = GameplayLayout::new(SCREEN);
        assert_eq!(*layout.undo(), Rect::new(860.0, 350.0, 200.0, 80.0));
        assert_eq!(layout.restart().y, 440.0);
        assert_eq!(layout.help().y, 530.0);
        assert_eq!(layout.settings().y, 620.0);
    }

    #[test]
    fn test_buttons_clear_board_on_wide_screen() {
        let layout = GameplayLayout::new(ScreenSize::new(1600, 900));
        let board = *layout.board();
        assert_eq!(board, Rect::new(550.0, 200.0, 500.0, 500.0));
        for button in [layout.undo(), layout.restart(), layout.help(), layout.settings()] {
            assert!(!button.intersects(&board), "{button:?} overlaps the board");
            assert_eq!(button.x, 1060.0);
        }
    }

    #[test]
    fn test_rect_intersects_requires_shared_area() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_cell_at_maps_board_points() {
        let layout = GameplayLayout::new(SCREEN);
        assert_eq!(layout.cell_at(Point::new(351.0, 351.0), 3), Some(0));
        assert_eq!(layout.cell_at(layout.cell_rect(5, 3).center(), 3), Some(5));
        assert_eq!(layout.cell_at(Point::new(849.0, 849.0), 3), Some(8));
        assert_eq!(layout.cell_at(Point::new(100.0, 100.0), 3), None);
    }

    #[test]
    fn test_ending_buttons_sized_from_wider_label() {
        let measure = MonospaceMeasure::new(0.5);
        let layout = EndingLayout::measure(SCREEN, &measure);
        // "NEW GAME" is 8 glyphs of 20 px.
        let width = 160.0 + ENDING_PADDING;
        assert_eq!(layout.restart().width, width);
        assert_eq!(layout.restart().height, ENDING_ASPECT * width);
        assert_eq!(layout.restart().x, 600.0 - width - ENDING_PADDING);
        assert_eq!(layout.new_game().x, 620.0);
        assert_eq!(layout.new_game().y, layout.restart().y);
    }

    #[test]
    fn test_button_tracks_hover_and_release() {
        let mut button = Button::new("Undo", Rect::new(0.0, 0.0, 10.0, 10.0));
        let inside = Point::new(5.0, 5.0);

        assert!(!button.track(&FrameInput::default().with_pointer(inside)));
        assert_eq!(*button.state(), ButtonState::Hovered);

        assert!(!button.track(&FrameInput::press_at(inside)));
        assert_eq!(*button.state(), ButtonState::Selected);

        assert!(button.track(&FrameInput::release_at(inside)));

        assert!(!button.track(&FrameInput::release_at(Point::new(50.0, 5.0))));
        assert_eq!(*button.state(), ButtonState::Unselected);
    }
}
