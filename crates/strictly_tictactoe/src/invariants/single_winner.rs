//! Single winner invariant: at most one mark completes a line.

use super::Invariant;
use crate::GameState;
use crate::rules::completed_lines;

/// Invariant: no board holds completed lines for both marks.
///
/// Play stops at the first completed line, so the other mark never gets
/// the chance to complete one of its own.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let mut lines = completed_lines(state.board());
        match lines.next() {
            Some((first, _)) => lines.all(|(mark, _)| mark == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one mark has a completed line"
    }
}
