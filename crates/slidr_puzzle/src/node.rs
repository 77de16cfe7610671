//! Move nodes and the arena that owns them.
//!
//! Nodes form a tree rooted at the initial layout. Parents are stored as
//! [`NodeId`] handles into a [`NodeArena`], so history entries and replay
//! lineage share ancestors without copying grid snapshots.

use derive_more::Display;
use tracing::{debug, instrument};

use crate::grid::{Direction, GridState};

/// Handle to a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("#{}", _0)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A grid snapshot decorated with its lineage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveNode {
    state: GridState,
    depth: u32,
    parent: Option<NodeId>,
    producing_move: Option<Direction>,
}

impl MoveNode {
    /// The grid snapshot.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Moves from the root to this node.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The node this one was derived from, absent for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The slide applied to the parent, absent for the root.
    pub fn producing_move(&self) -> Option<Direction> {
        self.producing_move
    }

    /// Returns true for the root node.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only storage for the move tree of one root layout.
///
/// The root always lives at index 0. Nodes are never mutated once pushed.
#[derive(Debug, Clone)]
pub struct NodeArena {
    nodes: Vec<MoveNode>,
}

impl NodeArena {
    /// Creates an arena holding only `root`.
    #[instrument(skip(root))]
    pub fn with_root(root: GridState) -> Self {
        Self {
            nodes: vec![MoveNode {
                state: root,
                depth: 0,
                parent: None,
                producing_move: None,
            }],
        }
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes ever created for this root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; an arena holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    pub fn get(&self, id: NodeId) -> &MoveNode {
        &self.nodes[id.index()]
    }

    /// Derives a child of `parent` by sliding in `direction`.
    ///
    /// Returns `None` without allocating if the slide leaves the grid.
    #[instrument(skip(self))]
    pub fn derive(&mut self, parent: NodeId, direction: Direction) -> Option<NodeId> {
        let base = self.get(parent);
        let state = base.state.slide(direction)?;
        let depth = base.depth + 1;
        let id = NodeId(u32::try_from(self.nodes.len()).ok()?);
        self.nodes.push(MoveNode {
            state,
            depth,
            parent: Some(parent),
            producing_move: Some(direction),
        });
        debug!(node = %id, parent = %parent, depth, "Derived move node");
        Some(id)
    }

    /// Drops every node except the root.
    ///
    /// Callers must guarantee no handle other than the root is still held.
    #[instrument(skip(self), fields(len = self.nodes.len()))]
    pub fn truncate_to_root(&mut self) {
        self.nodes.truncate(1);
    }

    /// Frees `id` if it is the newest node and not the root.
    ///
    /// Histories are linear and `derive` only appends, so a node popped from
    /// the top of the history is always the newest one.
    pub fn release(&mut self, id: NodeId) -> bool {
        let last = self.nodes.len() - 1;
        if id.index() == 0 || id.index() != last {
            return false;
        }
        self.nodes.truncate(last);
        true
    }

    /// Walks parent links from `id` up to and including the root.
    pub fn lineage(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |current| self.get(*current).parent)
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = MoveNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_no_lineage_data() {
        let arena = NodeArena::with_root(GridState::solved(3));
        let root = arena.get(arena.root());
        assert!(root.is_root());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.producing_move(), None);
    }

    #[test]
    fn test_derive_links_parent_and_depth() {
        let mut arena = NodeArena::with_root(GridState::solved(3));
        let root = arena.root();
        let child = arena.derive(root, Direction::Up).expect("legal slide");
        let grandchild = arena.derive(child, Direction::Left).expect("legal slide");

        assert_eq!(arena[grandchild].depth(), 2);
        assert_eq!(arena[grandchild].parent(), Some(child));
        assert_eq!(arena[grandchild].producing_move(), Some(Direction::Left));
        assert_eq!(
            arena.lineage(grandchild).collect::<Vec<_>>(),
            vec![grandchild, child, root]
        );
    }

    #[test]
    fn test_illegal_derive_does_not_allocate() {
        let mut arena = NodeArena::with_root(GridState::solved(3));
        assert!(arena.derive(arena.root(), Direction::Down).is_none());
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_release_frees_newest_only() {
        let mut arena = NodeArena::with_root(GridState::solved(3));
        let child = arena.derive(arena.root(), Direction::Up).expect("legal slide");
        let grandchild = arena.derive(child, Direction::Up).expect("legal slide");

        assert!(!arena.release(child));
        assert!(arena.release(grandchild));
        assert!(arena.release(child));
        assert!(!arena.release(arena.root()));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_truncate_keeps_root_only() {
        let mut arena = NodeArena::with_root(GridState::solved(3));
        let child = arena.derive(arena.root(), Direction::Up).expect("legal slide");
        arena.derive(child, Direction::Up).expect("legal slide");
        arena.truncate_to_root();
        assert_eq!(arena.len(), 1);
        assert!(arena.get(arena.root()).state().is_goal());
    }
}
