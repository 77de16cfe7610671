//! Solver contract and the breadth-first reference collaborator.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use tracing::{debug, instrument, warn};

use crate::grid::{Direction, GridState};

/// One element of a solution sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionStep {
    /// Placeholder standing for the root itself.
    Origin,
    /// A slide applied to the previous layout.
    Slide(Direction),
}

/// Ordered moves solving a root layout, led by a [`SolutionStep::Origin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSequence {
    steps: Vec<SolutionStep>,
}

impl SolutionSequence {
    /// Builds a sequence from the slides that follow the origin placeholder.
    pub fn from_slides(slides: impl IntoIterator<Item = Direction>) -> Self {
        let steps = std::iter::once(SolutionStep::Origin)
            .chain(slides.into_iter().map(SolutionStep::Slide))
            .collect();
        Self { steps }
    }

    /// Sequence for a root that is already solved.
    pub fn origin_only() -> Self {
        Self::from_slides(std::iter::empty())
    }

    /// All steps, origin first.
    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    /// Number of steps including the origin.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; a sequence holds at least the origin.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Minimum number of slides: `len() - 1`.
    pub fn optimal_moves(&self) -> u32 {
        u32::try_from(self.steps.len().saturating_sub(1)).unwrap_or(u32::MAX)
    }

    /// The slide at `index`, or `None` past the end or at the origin.
    pub fn slide_at(&self, index: usize) -> Option<Direction> {
        match self.steps.get(index)? {
            SolutionStep::Origin => None,
            SolutionStep::Slide(direction) => Some(*direction),
        }
    }

    /// The slides in order, without the origin.
    pub fn slides(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps.iter().filter_map(|step| match step {
            SolutionStep::Origin => None,
            SolutionStep::Slide(direction) => Some(*direction),
        })
    }
}

/// Produces an optimal solution for a root layout.
///
/// Implementations must be deterministic for a given root.
pub trait Solver {
    /// Solves `root`, returning a sequence led by the origin placeholder.
    fn solve(&self, root: &GridState) -> SolutionSequence;
}

/// Exhaustive breadth-first search over grid snapshots.
///
/// Optimal by construction. Practical for grids up to 3×3 (181 440 reachable
/// states); larger grids should plug in a heuristic solver instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSolver;

impl Solver for BreadthFirstSolver {
    #[instrument(skip(self, root), fields(size = root.size()))]
    fn solve(&self, root: &GridState) -> SolutionSequence {
        if root.is_goal() {
            return SolutionSequence::origin_only();
        }

        // Parent index and the slide that reached each visited state.
        let mut visited: Vec<(GridState, Option<(usize, Direction)>)> =
            vec![(root.clone(), None)];
        let mut seen: FxHashMap<GridState, usize> = FxHashMap::default();
        seen.insert(root.clone(), 0);
        let mut frontier = VecDeque::from([0usize]);

        while let Some(current) = frontier.pop_front() {
            let state = visited[current].0.clone();
            for direction in state.legal_directions() {
                let Some(next) = state.slide(direction) else {
                    continue;
                };
                if seen.contains_key(&next) {
                    continue;
                }
                let index = visited.len();
                seen.insert(next.clone(), index);
                let solved = next.is_goal();
                visited.push((next, Some((current, direction))));
                if solved {
                    let slides = backtrack(&visited, index);
                    debug!(moves = slides.len(), explored = visited.len(), "Solved layout");
                    return SolutionSequence::from_slides(slides);
                }
                frontier.push_back(index);
            }
        }

        warn!(explored = visited.len(), "Layout is unsolvable");
        SolutionSequence::origin_only()
    }
}

fn backtrack(visited: &[(GridState, Option<(usize, Direction)>)], goal: usize) -> Vec<Direction> {
    let mut slides = Vec::new();
    let mut cursor = goal;
    while let Some((parent, direction)) = visited[cursor].1 {
        slides.push(direction);
        cursor = parent;
    }
    slides.reverse();
    slides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BLANK;

    #[test]
    fn test_solved_root_needs_no_moves() {
        let sequence = BreadthFirstSolver.solve(&GridState::solved(3));
        assert_eq!(sequence.steps(), &[SolutionStep::Origin]);
        assert_eq!(sequence.optimal_moves(), 0);
    }

    #[test]
    fn test_single_slide_solution() {
        let root = GridState::from_tiles(3, vec![1, 2, 3, 4, 5, 6, 7, BLANK, 8]).expect("valid grid");
        let sequence = BreadthFirstSolver.solve(&root);
        assert_eq!(sequence.optimal_moves(), 1);
        assert_eq!(sequence.slide_at(0), None);
        assert_eq!(sequence.slide_at(1), Some(Direction::Right));
    }

    #[test]
    fn test_solution_actually_solves() {
        let root = GridState::from_tiles(3, vec![4, 1, 3, 7, 2, 6, BLANK, 5, 8]).expect("valid grid");
        let sequence = BreadthFirstSolver.solve(&root);
        let end = sequence
            .slides()
            .try_fold(root, |state, d| state.slide(d))
            .expect("every slide is legal");
        assert!(end.is_goal());
        assert_eq!(sequence.optimal_moves(), 6);
    }
}
