//! Random solvable layouts.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use crate::grid::{BLANK, GridState, Tile};

/// Source of fresh root layouts.
pub trait LayoutGenerator {
    /// Returns a random layout of edge `size` that can reach the goal.
    fn generate(&mut self, size: usize) -> GridState;
}

/// Returns true if `state` can reach the canonical goal by slides.
///
/// Every slide is one transposition and flips the parity of the blank's
/// taxicab distance to its goal cell, so a layout is solvable exactly when its
/// permutation parity matches that distance's parity.
pub fn is_solvable(state: &GridState) -> bool {
    let n = state.size();
    let blank_row = state.blank_index() / n;
    let blank_col = state.blank_index() % n;
    let distance = (n - 1 - blank_row) + (n - 1 - blank_col);
    permutation_is_odd(state.tiles()) == (distance % 2 == 1)
}

/// Parity of the permutation taking the goal layout to `tiles`.
fn permutation_is_odd(tiles: &[Tile]) -> bool {
    let cells = tiles.len();
    let goal_slot = |tile: Tile| {
        if tile == BLANK {
            cells - 1
        } else {
            usize::from(tile) - 1
        }
    };

    let mut visited = vec![false; cells];
    let mut cycles = 0;
    for start in 0..cells {
        if visited[start] {
            continue;
        }
        cycles += 1;
        let mut slot = start;
        while !visited[slot] {
            visited[slot] = true;
            slot = goal_slot(tiles[slot]);
        }
    }
    (cells - cycles) % 2 == 1
}

/// Uniform shuffle repaired to the solvable half of the permutations.
#[derive(Debug, Clone)]
pub struct ShuffledLayout<R = ChaCha8Rng> {
    rng: R,
}

impl ShuffledLayout<ChaCha8Rng> {
    /// Deterministic generator for a given seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl<R: Rng> LayoutGenerator for ShuffledLayout<R> {
    #[instrument(skip(self))]
    fn generate(&mut self, size: usize) -> GridState {
        let goal = GridState::solved(size);
        let mut tiles = goal.tiles().to_vec();
        tiles.shuffle(&mut self.rng);

        let mut state = GridState::from_permutation(size, tiles);

        if !is_solvable(&state) {
            // Swapping two numbered tiles flips parity without moving the blank.
            let numbered: Vec<usize> = (0..state.tiles.len())
                .filter(|&i| state.tiles[i] != BLANK)
                .take(2)
                .collect();
            state.tiles.swap(numbered[0], numbered[1]);
        }

        debug_assert!(is_solvable(&state));
        debug!(layout = %state, "Generated layout");
        state
    }
}
