//! History entries form one linear path through the move tree.

use derive_new::new;

use super::Invariant;
use crate::history::HistoryStack;
use crate::node::NodeArena;

/// Borrowed view of a history stack and the arena it indexes.
#[derive(Debug, Clone, Copy, new)]
pub struct HistoryPath<'a> {
    /// Arena holding every node of the current root.
    pub arena: &'a NodeArena,
    /// Active path through the arena.
    pub history: &'a HistoryStack,
}

/// Invariant: the bottom entry is a root and every other entry's parent is
/// the entry directly below it, one move deeper.
pub struct LinearHistoryInvariant;

impl<'a> Invariant<HistoryPath<'a>> for LinearHistoryInvariant {
    fn holds(path: &HistoryPath<'a>) -> bool {
        let ids: Vec<_> = path.history.iter().collect();
        let Some(&bottom) = ids.first() else {
            return false;
        };
        if bottom.index() >= path.arena.len() || !path.arena[bottom].is_root() {
            return false;
        }
        ids.windows(2).all(|pair| {
            let (below, above) = (pair[0], pair[1]);
            above.index() < path.arena.len()
                && path.arena[above].parent() == Some(below)
                && path.arena[above].depth() == path.arena[below].depth() + 1
        })
    }

    fn description() -> &'static str {
        "History is a single root-to-top path"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Direction, GridState};

    #[test]
    fn test_derived_path_holds() {
        let mut arena = NodeArena::with_root(GridState::solved(3));
        let mut history = HistoryStack::new(arena.root());
        let a = arena.derive(history.top(), Direction::Up).expect("legal slide");
        history.push(a);
        let b = arena.derive(history.top(), Direction::Left).expect("legal slide");
        history.push(b);
        assert!(LinearHistoryInvariant::holds(&HistoryPath::new(&arena, &history)));
    }

    #[test]
    fn test_sibling_on_stack_violates() {
        let mut arena = NodeArena::with_root(GridState::solved(3));
        let root = arena.root();
        let a = arena.derive(root, Direction::Up).expect("legal slide");
        let b = arena.derive(root, Direction::Left).expect("legal slide");
        let mut history = HistoryStack::new(root);
        history.push(a);
        history.push(b);
        assert!(!LinearHistoryInvariant::holds(&HistoryPath::new(&arena, &history)));
    }
}
