//! The active path from the root to the current node.

use tracing::{debug, instrument};

use crate::node::NodeId;

/// Stack of node handles along the currently active path.
///
/// The bottom entry is the root and is never popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<NodeId>,
}

impl HistoryStack {
    /// Creates a stack holding only `root`.
    pub fn new(root: NodeId) -> Self {
        Self {
            entries: vec![root],
        }
    }

    /// The current node.
    pub fn top(&self) -> NodeId {
        // Never empty: pop refuses to remove the root.
        self.entries[self.entries.len() - 1]
    }

    /// The bottom node.
    pub fn root(&self) -> NodeId {
        self.entries[0]
    }

    /// Number of entries, including the root.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the root is never popped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if only the root remains.
    pub fn is_at_root(&self) -> bool {
        self.entries.len() == 1
    }

    /// Entries from root to top.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.iter().copied()
    }

    /// Pushes a node derived from the current top.
    pub fn push(&mut self, id: NodeId) {
        self.entries.push(id);
    }

    /// Removes the top unless it is the root.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn pop(&mut self) -> Option<NodeId> {
        if self.is_at_root() {
            debug!("Refusing to pop the root");
            return None;
        }
        self.entries.pop()
    }

    /// Pops until only the root remains, returning how many entries went.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn pop_to_root(&mut self) -> usize {
        let removed = self.entries.len() - 1;
        self.entries.truncate(1);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Direction, GridState};
    use crate::node::NodeArena;

    fn arena_with_path() -> (NodeArena, Vec<NodeId>) {
        let mut arena = NodeArena::with_root(GridState::solved(3));
        let root = arena.root();
        let a = arena.derive(root, Direction::Up).expect("legal slide");
        let b = arena.derive(a, Direction::Left).expect("legal slide");
        (arena, vec![root, a, b])
    }

    #[test]
    fn test_pop_refuses_root() {
        let (arena, _) = arena_with_path();
        let mut history = HistoryStack::new(arena.root());
        assert_eq!(history.pop(), None);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_pop_returns_top() {
        let (_, path) = arena_with_path();
        let mut history = HistoryStack::new(path[0]);
        history.push(path[1]);
        history.push(path[2]);
        assert_eq!(history.pop(), Some(path[2]));
        assert_eq!(history.top(), path[1]);
    }

    #[test]
    fn test_pop_to_root_reports_count() {
        let (_, path) = arena_with_path();
        let mut history = HistoryStack::new(path[0]);
        history.push(path[1]);
        history.push(path[2]);
        assert_eq!(history.pop_to_root(), 2);
        assert!(history.is_at_root());
        assert_eq!(history.top(), path[0]);
        assert_eq!(history.pop_to_root(), 0);
    }
}
