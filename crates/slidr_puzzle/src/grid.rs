//! Grid snapshot and slide directions.
//!
//! A [`GridState`] is an immutable snapshot of a square puzzle: `N*N` slots in
//! row-major order, one of which holds the [`BLANK`] marker.

use derive_more::{Display, Error};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// A tile label. Numbered tiles run from `1` to `N*N - 1`.
pub type Tile = u8;

/// Marker stored in the blank slot.
pub const BLANK: Tile = 0;

/// Smallest supported grid edge.
pub const MIN_SIZE: usize = 2;

/// Largest grid edge whose labels fit in a [`Tile`].
pub const MAX_SIZE: usize = 15;

/// A slide direction.
///
/// Names the neighbour of the blank that slides into it. Equivalently, the
/// direction the blank travels: `Right` swaps the blank with the tile to its
/// right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum::Display)]
pub enum Direction {
    /// Neighbour above the blank.
    Up,
    /// Neighbour below the blank.
    Down,
    /// Neighbour left of the blank.
    Left,
    /// Neighbour right of the blank.
    Right,
}

impl Direction {
    /// Returns the direction that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Row and column offsets of the neighbour in this direction.
    fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Reasons a tile sequence is not a valid grid.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Edge length outside `MIN_SIZE..=MAX_SIZE`.
    #[display("Unsupported grid size {}", _0)]
    UnsupportedSize(#[error(not(source))] usize),

    /// Tile count does not equal `size * size`.
    #[display("Expected {} tiles, found {}", expected, found)]
    WrongLength {
        /// Required number of slots.
        expected: usize,
        /// Number of slots supplied.
        found: usize,
    },

    /// A label larger than `N*N - 1`.
    #[display("Tile {} is out of range", _0)]
    TileOutOfRange(#[error(not(source))] Tile),

    /// A label that appears more than once.
    #[display("Tile {} appears more than once", _0)]
    DuplicateTile(#[error(not(source))] Tile),

    /// No slot holds the blank marker.
    #[display("Grid has no blank slot")]
    MissingBlank,
}

/// Immutable snapshot of tile positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridState {
    pub(crate) size: usize,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) blank_index: usize,
}

impl GridState {
    /// Builds the canonical goal layout: tiles ascending, blank last.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `MIN_SIZE..=MAX_SIZE`.
    #[instrument]
    pub fn solved(size: usize) -> Self {
        assert!(
            (MIN_SIZE..=MAX_SIZE).contains(&size),
            "grid size {size} is not supported"
        );
        let cells = size * size;
        let mut tiles: Vec<Tile> = (1..cells).map(|t| t as Tile).collect();
        tiles.push(BLANK);
        Self {
            size,
            tiles,
            blank_index: cells - 1,
        }
    }

    /// Validates `tiles` as a permutation of `{BLANK, 1, .., N*N-1}`.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] naming the first problem found.
    #[instrument(skip(tiles), fields(len = tiles.len()))]
    pub fn from_tiles(size: usize, tiles: Vec<Tile>) -> Result<Self, GridError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(GridError::UnsupportedSize(size));
        }
        let cells = size * size;
        if tiles.len() != cells {
            return Err(GridError::WrongLength {
                expected: cells,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let slot = usize::from(tile);
            if slot >= cells {
                return Err(GridError::TileOutOfRange(tile));
            }
            if seen[slot] {
                return Err(GridError::DuplicateTile(tile));
            }
            seen[slot] = true;
        }

        let blank_index = tiles
            .iter()
            .position(|&t| t == BLANK)
            .ok_or(GridError::MissingBlank)?;

        Ok(Self {
            size,
            tiles,
            blank_index,
        })
    }

    /// Wraps tiles already known to be a permutation, such as a shuffled goal.
    pub(crate) fn from_permutation(size: usize, tiles: Vec<Tile>) -> Self {
        let blank_index = tiles.iter().position(|&t| t == BLANK).unwrap_or_default();
        debug_assert!(Self::from_tiles(size, tiles.clone()).is_ok());
        Self {
            size,
            tiles,
            blank_index,
        }
    }

    /// Edge length `N`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Row-major index of the blank.
    pub fn blank_index(&self) -> usize {
        self.blank_index
    }

    /// Index of the blank's neighbour in `direction`, if it exists.
    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        let (dr, dc) = direction.delta();
        let row = (self.blank_index / self.size).checked_add_signed(dr)?;
        let col = (self.blank_index % self.size).checked_add_signed(dc)?;
        (row < self.size && col < self.size).then_some(row * self.size + col)
    }

    /// Returns true if a slide in `direction` stays inside the grid.
    pub fn can_slide(&self, direction: Direction) -> bool {
        self.neighbor(direction).is_some()
    }

    /// Directions that are legal from this snapshot.
    pub fn legal_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::iter().filter(|d| self.can_slide(*d))
    }

    /// Returns the snapshot produced by swapping the blank with its neighbour.
    pub fn slide(&self, direction: Direction) -> Option<Self> {
        let target = self.neighbor(direction)?;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank_index, target);
        Some(Self {
            size: self.size,
            tiles,
            blank_index: target,
        })
    }

    /// Direction that moves the blank onto `index`, if `index` is adjacent.
    pub fn direction_towards(&self, index: usize) -> Option<Direction> {
        Direction::iter().find(|d| self.neighbor(*d) == Some(index))
    }

    /// Returns true if this is the canonical goal layout.
    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.blank_index == last
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(i, &t)| usize::from(t) == i + 1)
    }
}

impl std::fmt::Display for GridState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = (self.size * self.size - 1).to_string().len();
        for (row, chunk) in self.tiles.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &tile) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, "{:>width$}", "_")?;
                } else {
                    write!(f, "{tile:>width$}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(tiles: &[Tile]) -> GridState {
        GridState::from_tiles(3, tiles.to_vec()).expect("valid grid")
    }

    #[test]
    fn test_solved_layout_is_goal() {
        let goal = GridState::solved(3);
        assert_eq!(goal.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, BLANK]);
        assert_eq!(goal.blank_index(), 8);
        assert!(goal.is_goal());
    }

    #[test]
    fn test_from_tiles_rejects_duplicates() {
        let result = GridState::from_tiles(3, vec![1, 1, 3, 4, 5, 6, 7, 8, BLANK]);
        assert_eq!(result, Err(GridError::DuplicateTile(1)));
    }

    #[test]
    fn test_from_tiles_rejects_wrong_length() {
        let result = GridState::from_tiles(3, vec![1, 2, BLANK]);
        assert!(matches!(result, Err(GridError::WrongLength { expected: 9, found: 3 })));
    }

    #[test]
    fn test_from_tiles_rejects_out_of_range() {
        let result = GridState::from_tiles(2, vec![1, 2, 7, BLANK]);
        assert_eq!(result, Err(GridError::TileOutOfRange(7)));
    }

    #[test]
    fn test_corner_blank_has_two_neighbours() {
        let goal = GridState::solved(3);
        let legal: Vec<_> = goal.legal_directions().collect();
        assert_eq!(legal, vec![Direction::Up, Direction::Left]);
    }

    #[test]
    fn test_slide_swaps_blank_with_neighbour() {
        let state = grid(&[1, 2, 3, 4, 5, 6, 7, BLANK, 8]);
        let next = state.slide(Direction::Right).expect("legal slide");
        assert!(next.is_goal());
        assert!(state.slide(Direction::Down).is_none());
    }

    #[test]
    fn test_direction_towards_adjacent_only() {
        let state = grid(&[1, 2, 3, 4, BLANK, 5, 6, 7, 8]);
        assert_eq!(state.direction_towards(1), Some(Direction::Up));
        assert_eq!(state.direction_towards(5), Some(Direction::Right));
        assert_eq!(state.direction_towards(0), None);
        assert_eq!(state.direction_towards(4), None);
    }

    #[test]
    fn test_display_marks_blank() {
        let goal = GridState::solved(3);
        assert_eq!(goal.to_string(), "1 2 3\n4 5 6\n7 8 _");
    }
}
