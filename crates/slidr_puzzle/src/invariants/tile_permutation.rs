//! Tiles are a permutation of the blank plus `1..N*N`.

use super::Invariant;
use crate::grid::GridState;

/// Invariant: every label from the blank to `N*N - 1` appears exactly once.
pub struct TilePermutationInvariant;

impl Invariant<GridState> for TilePermutationInvariant {
    fn holds(state: &GridState) -> bool {
        let cells = state.size * state.size;
        if state.tiles.len() != cells {
            return false;
        }
        let mut seen = vec![false; cells];
        state.tiles.iter().all(|&tile| {
            let slot = usize::from(tile);
            slot < cells && !std::mem::replace(&mut seen[slot], true)
        })
    }

    fn description() -> &'static str {
        "Tiles form a permutation of the blank and 1..N*N"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{BLANK, Direction};

    #[test]
    fn test_slides_preserve_permutation() {
        let state = GridState::solved(3)
            .slide(Direction::Up)
            .and_then(|s| s.slide(Direction::Left))
            .expect("legal slides");
        assert!(TilePermutationInvariant::holds(&state));
    }

    #[test]
    fn test_missing_label_violates() {
        let corrupt = GridState {
            size: 2,
            tiles: vec![1, 2, 2, BLANK],
            blank_index: 3,
        };
        assert!(!TilePermutationInvariant::holds(&corrupt));
    }
}
