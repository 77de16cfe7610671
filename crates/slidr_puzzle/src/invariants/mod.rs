//! First-class invariants for the puzzle model.
//!
//! Invariants are logical properties that must hold after every engine
//! mutation. The engine checks them in debug builds; tests check them
//! directly.

mod blank_index;
mod linear_history;
mod tile_permutation;

pub use blank_index::BlankIndexInvariant;
pub use linear_history::{HistoryPath, LinearHistoryInvariant};
pub use tile_permutation::TilePermutationInvariant;

use crate::grid::GridState;

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S: ?Sized> {
    /// Checks every member, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S: ?Sized, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant a grid snapshot must satisfy.
pub type GridInvariants = (TilePermutationInvariant, BlankIndexInvariant);

/// Checks a grid snapshot, returning all violations.
pub fn check_grid(state: &GridState) -> Result<(), Vec<InvariantViolation>> {
    GridInvariants::check_all(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BLANK;

    #[test]
    fn test_goal_satisfies_grid_invariants() {
        assert!(check_grid(&GridState::solved(4)).is_ok());
    }

    #[test]
    fn test_corruption_reports_both_violations() {
        let corrupt = GridState {
            size: 2,
            tiles: vec![1, 1, 3, BLANK],
            blank_index: 0,
        };
        let violations = check_grid(&corrupt).expect_err("corrupt grid");
        assert_eq!(violations.len(), 2);
    }
}
