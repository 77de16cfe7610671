//! Sliding-tile puzzle logic.
//!
//! This crate holds everything about the puzzle that is independent of any
//! screen, device or clock:
//!
//! - **Grid**: immutable [`GridState`] snapshots and [`Direction`]s
//! - **Move tree**: [`MoveNode`]s in a [`NodeArena`], addressed by [`NodeId`]
//! - **History**: the active root-to-top path as a [`HistoryStack`]
//! - **Engine**: [`BoardEngine`] for moves, undo, restart, reset and
//!   time-gated [`ReplayProgress`] of a solver's sequence
//! - **Collaborators**: the [`Solver`] and [`LayoutGenerator`] contracts with
//!   [`BreadthFirstSolver`] and [`ShuffledLayout`] implementations
//!
//! # Example
//!
//! ```
//! use slidr_puzzle::{BoardEngine, BreadthFirstSolver, Direction, GridState, ReplayTiming, ShuffledLayout, BLANK};
//!
//! let root = GridState::from_tiles(3, vec![1, 2, 3, 4, 5, 6, 7, BLANK, 8]).unwrap();
//! let mut board = BoardEngine::with_root(
//!     BreadthFirstSolver,
//!     ShuffledLayout::seeded(7),
//!     root,
//!     ReplayTiming::default(),
//! );
//!
//! assert!(board.apply_move(Direction::Right));
//! assert!(board.is_solved());
//! assert_eq!(board.moves_taken(), Some(1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod edge;
mod grid;
mod history;
pub mod invariants;
mod layout;
mod node;
mod replay;
mod solver;

pub use board::{BoardEngine, SolveOutcome};
pub use edge::EdgeFlag;
pub use grid::{BLANK, Direction, GridError, GridState, MAX_SIZE, MIN_SIZE, Tile};
pub use history::HistoryStack;
pub use layout::{LayoutGenerator, ShuffledLayout, is_solvable};
pub use node::{MoveNode, NodeArena, NodeId};
pub use replay::{DEFAULT_GRACE, DEFAULT_STEP_INTERVAL, ReplayProgress, ReplayTiming};
pub use solver::{BreadthFirstSolver, SolutionSequence, SolutionStep, Solver};
