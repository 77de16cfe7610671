//! Help screen: paces the solver's sequence onto the board.

use tracing::{debug, trace};

use crate::flow::screen::{FrameContext, Screen, Signal};
use slidr_puzzle::{LayoutGenerator, ReplayProgress, Solver};

/// State for the help screen. The replay cursor itself lives in the board.
///
/// Player input is ignored while the replay runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelpScreen;

impl Screen for HelpScreen {
    fn update<S: Solver, G: LayoutGenerator>(
        &mut self,
        frame: &mut FrameContext<'_, S, G>,
    ) -> Option<Signal> {
        match frame.board.advance_solution_replay(frame.elapsed) {
            ReplayProgress::Stepped(direction) => {
                debug!(%direction, remaining = frame.board.replay_remaining(), "Replay step");
            }
            progress => trace!(?progress, "Replay tick"),
        }
        frame.board.is_finished().then_some(Signal::ReplayFinished)
    }
}
