//! Property tests for grid snapshots.

use proptest::prelude::*;
use slidr_puzzle::invariants::check_grid;
use slidr_puzzle::{Direction, GridState, LayoutGenerator, ShuffledLayout, is_solvable};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #[test]
    fn prop_random_walks_keep_invariants(
        size in 2usize..=5,
        walk in proptest::collection::vec(direction(), 0..64),
    ) {
        let mut state = GridState::solved(size);
        for d in walk {
            if let Some(next) = state.slide(d) {
                state = next;
            }
            prop_assert!(check_grid(&state).is_ok());
            prop_assert!(is_solvable(&state));
        }
    }

    #[test]
    fn prop_legal_slide_is_undone_by_opposite(
        seed in any::<u64>(),
        d in direction(),
    ) {
        let state = ShuffledLayout::seeded(seed).generate(3);
        prop_assume!(state.can_slide(d));
        let moved = state.slide(d).expect("legal slide");
        prop_assert_eq!(moved.slide(d.opposite()), Some(state));
    }

    #[test]
    fn prop_generated_layouts_are_valid(seed in any::<u64>(), size in 2usize..=6) {
        let state = ShuffledLayout::seeded(seed).generate(size);
        prop_assert!(check_grid(&state).is_ok());
        prop_assert!(is_solvable(&state));
    }
}
