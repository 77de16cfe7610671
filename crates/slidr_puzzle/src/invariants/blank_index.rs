//! The cached blank index points at the blank.

use super::Invariant;
use crate::grid::{BLANK, GridState};

/// Invariant: `tiles[blank_index]` is the blank marker.
pub struct BlankIndexInvariant;

impl Invariant<GridState> for BlankIndexInvariant {
    fn holds(state: &GridState) -> bool {
        state.tiles.get(state.blank_index) == Some(&BLANK)
    }

    fn description() -> &'static str {
        "Cached blank index points at the blank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_index_violates() {
        let mut state = GridState::solved(3);
        assert!(BlankIndexInvariant::holds(&state));
        state.blank_index = 0;
        assert!(!BlankIndexInvariant::holds(&state));
    }
}
