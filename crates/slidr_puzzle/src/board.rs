//! The puzzle board engine.
//!
//! Owns the move tree, the active history path, the solver's sequence for the
//! current root and the replay pacing state. Every operation is total:
//! illegal requests are absorbed as no-ops so the frame loop never has to
//! handle an error.

use std::time::Duration;

use derive_new::new;
use tracing::{debug, info, instrument, warn};

use crate::edge::EdgeFlag;
use crate::grid::{Direction, GridState};
use crate::history::HistoryStack;
use crate::invariants::{HistoryPath, Invariant, LinearHistoryInvariant, check_grid};
use crate::layout::LayoutGenerator;
use crate::node::{MoveNode, NodeArena, NodeId};
use crate::replay::{CursorAction, ReplayCursor, ReplayProgress, ReplayTiming};
use crate::solver::{SolutionSequence, Solver};

/// Statistics for a root the player solved by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct SolveOutcome {
    /// Minimum slides needed from the root.
    pub optimal_moves: u32,
    /// Depth of the node at which the puzzle first became solved.
    pub moves_taken: u32,
}

/// Grid, history and replay state for one play session.
#[derive(Debug)]
pub struct BoardEngine<S, G> {
    solver: S,
    generator: G,
    size: usize,
    timing: ReplayTiming,
    arena: NodeArena,
    history: HistoryStack,
    solution: SolutionSequence,
    replay: ReplayCursor,
    moves_taken: Option<u32>,
    finished: EdgeFlag,
    requested_help: EdgeFlag,
    go_settings: EdgeFlag,
}

impl<S: Solver, G: LayoutGenerator> BoardEngine<S, G> {
    /// Creates an engine with a freshly generated root of edge `size`.
    #[instrument(skip(solver, generator))]
    pub fn new(solver: S, mut generator: G, size: usize, timing: ReplayTiming) -> Self {
        let root = generator.generate(size);
        Self::with_root(solver, generator, root, timing)
    }

    /// Creates an engine starting from a known root layout.
    ///
    /// The generator is only consulted by [`BoardEngine::reset_with_new_layout`].
    #[instrument(skip(solver, generator, root), fields(size = root.size()))]
    pub fn with_root(solver: S, generator: G, root: GridState, timing: ReplayTiming) -> Self {
        let size = root.size();
        let solution = solver.solve(&root);
        let arena = NodeArena::with_root(root);
        let history = HistoryStack::new(arena.root());
        info!(
            optimal_moves = solution.optimal_moves(),
            "Board created"
        );
        let mut engine = Self {
            solver,
            generator,
            size,
            timing,
            arena,
            history,
            solution,
            replay: ReplayCursor::default(),
            moves_taken: None,
            finished: EdgeFlag::default(),
            requested_help: EdgeFlag::default(),
            go_settings: EdgeFlag::default(),
        };
        engine.latch_solved();
        engine.debug_check();
        engine
    }

    // ─────────────────────────────────────────────────────────────
    //  Moves and history
    // ─────────────────────────────────────────────────────────────

    /// Slides the blank's neighbour in `direction` into the blank.
    ///
    /// Returns `false` and changes nothing if the neighbour is off the grid.
    #[instrument(skip(self), fields(depth = self.depth()))]
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let Some(child) = self.arena.derive(self.history.top(), direction) else {
            debug!("Ignoring illegal move");
            return false;
        };
        self.history.push(child);
        self.latch_solved();
        self.debug_check();
        true
    }

    /// Returns to the previous node. No-op at the root.
    #[instrument(skip(self), fields(depth = self.depth()))]
    pub fn undo(&mut self) -> bool {
        let Some(popped) = self.history.pop() else {
            return false;
        };
        let released = self.arena.release(popped);
        debug_assert!(released, "undone node was not the newest");
        self.latch_solved();
        self.debug_check();
        true
    }

    /// Discards every move, keeping the same root layout.
    #[instrument(skip(self), fields(depth = self.depth()))]
    pub fn restart_to_root(&mut self) {
        self.rewind();
        self.replay = ReplayCursor::default();
        self.moves_taken = None;
        self.clear_edges();
        info!("Board restarted");
        self.latch_solved();
        self.debug_check();
    }

    /// Replaces the root with a fresh random layout and solves it.
    #[instrument(skip(self))]
    pub fn reset_with_new_layout(&mut self) {
        let root = self.generator.generate(self.size);
        self.solution = self.solver.solve(&root);
        self.arena = NodeArena::with_root(root);
        self.history = HistoryStack::new(self.arena.root());
        self.replay = ReplayCursor::default();
        self.moves_taken = None;
        self.clear_edges();
        info!(
            optimal_moves = self.solution.optimal_moves(),
            "Board reset with new layout"
        );
        self.latch_solved();
        self.debug_check();
    }

    /// Returns true if the current node is the canonical goal.
    pub fn is_solved(&self) -> bool {
        self.current().state().is_goal()
    }

    // ─────────────────────────────────────────────────────────────
    //  Solution replay
    // ─────────────────────────────────────────────────────────────

    /// Rewinds to the root and arms the replay cursor after the origin step.
    #[instrument(skip(self))]
    pub fn begin_solution_replay(&mut self) {
        self.rewind();
        self.finished.clear();
        self.replay = ReplayCursor::begin(1);
        info!(
            moves = self.solution.optimal_moves(),
            "Solution replay started"
        );
        self.debug_check();
    }

    /// Advances the replay by wall time elapsed since the previous call.
    ///
    /// Applies at most one slide per call, once more than the step interval
    /// has accumulated. After the last slide, reports
    /// [`ReplayProgress::Finished`] once the step interval plus the grace hold
    /// has passed, raising the finished edge exactly once.
    #[instrument(level = "trace", skip(self))]
    pub fn advance_solution_replay(&mut self, elapsed: Duration) -> ReplayProgress {
        let remaining = self.solution.slide_at(self.replay.next_index()).is_some();
        match self.replay.advance(elapsed, remaining, &self.timing) {
            CursorAction::Idle => ReplayProgress::Idle,
            CursorAction::Wait => ReplayProgress::Waiting,
            CursorAction::Apply(index) => {
                let Some(direction) = self.solution.slide_at(index) else {
                    return ReplayProgress::Waiting;
                };
                if !self.apply_move(direction) {
                    warn!(%direction, index, "Solver produced an illegal slide");
                }
                debug!(%direction, index, "Replayed slide");
                ReplayProgress::Stepped(direction)
            }
            CursorAction::Finish => {
                info!(depth = self.depth(), "Solution replay finished");
                self.finished.raise();
                ReplayProgress::Finished
            }
            CursorAction::AlreadyFinished => ReplayProgress::Finished,
        }
    }

    /// Returns true while a replay is armed for the current root.
    pub fn is_replaying(&self) -> bool {
        self.replay.is_active()
    }

    /// Slides the replay has not applied yet.
    pub fn replay_remaining(&self) -> usize {
        if !self.replay.is_active() {
            return 0;
        }
        self.solution.len().saturating_sub(self.replay.next_index())
    }

    // ─────────────────────────────────────────────────────────────
    //  Edge-triggered signals
    // ─────────────────────────────────────────────────────────────

    /// Consumes the finished edge: solved by hand, or replay done.
    pub fn is_finished(&mut self) -> bool {
        self.finished.take()
    }

    /// Consumes the help-requested edge.
    pub fn requested_help(&mut self) -> bool {
        self.requested_help.take()
    }

    /// Consumes the settings-requested edge.
    pub fn go_settings(&mut self) -> bool {
        self.go_settings.take()
    }

    /// Raises the help-requested edge.
    #[instrument(skip(self))]
    pub fn request_help(&mut self) {
        self.requested_help.raise();
    }

    /// Raises the settings-requested edge.
    #[instrument(skip(self))]
    pub fn request_settings(&mut self) {
        self.go_settings.raise();
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Edge length of the grid.
    pub fn grid_size(&self) -> usize {
        self.size
    }

    /// Handle of the current node.
    pub fn top(&self) -> NodeId {
        self.history.top()
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        self.history.root()
    }

    /// The current node.
    pub fn current(&self) -> &MoveNode {
        self.arena.get(self.history.top())
    }

    /// The root layout.
    pub fn root_state(&self) -> &GridState {
        self.arena.get(self.history.root()).state()
    }

    /// Moves from the root to the current node.
    pub fn depth(&self) -> u32 {
        self.current().depth()
    }

    /// Entries on the history stack, root included.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The history stack.
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// The solver's sequence for the current root.
    pub fn solution(&self) -> &SolutionSequence {
        &self.solution
    }

    /// Minimum moves for the current root.
    pub fn optimal_moves(&self) -> u32 {
        self.solution.optimal_moves()
    }

    /// Depth at which the player first reached the goal, if they have.
    pub fn moves_taken(&self) -> Option<u32> {
        self.moves_taken
    }

    /// Result statistics once the player has solved the current root.
    pub fn outcome(&self) -> Option<SolveOutcome> {
        self.moves_taken
            .map(|taken| SolveOutcome::new(self.optimal_moves(), taken))
    }

    /// Borrowed view for invariant checks.
    pub fn path(&self) -> HistoryPath<'_> {
        HistoryPath::new(&self.arena, &self.history)
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    /// Pops to the root and forgets every other node.
    fn rewind(&mut self) {
        let popped = self.history.pop_to_root();
        self.arena.truncate_to_root();
        debug!(popped, "Rewound to root");
    }

    fn clear_edges(&mut self) {
        self.finished.clear();
        self.requested_help.clear();
        self.go_settings.clear();
    }

    /// Records the first hand-made arrival at the goal for this root.
    fn latch_solved(&mut self) {
        if self.replay.is_active() || self.moves_taken.is_some() || !self.is_solved() {
            return;
        }
        let depth = self.depth();
        self.moves_taken = Some(depth);
        self.finished.raise();
        info!(
            moves_taken = depth,
            optimal_moves = self.optimal_moves(),
            "Puzzle solved"
        );
    }

    fn debug_check(&self) {
        debug_assert!(
            check_grid(self.current().state()).is_ok(),
            "grid invariants violated"
        );
        debug_assert!(
            LinearHistoryInvariant::holds(&self.path()),
            "{}",
            LinearHistoryInvariant::description()
        );
    }
}
