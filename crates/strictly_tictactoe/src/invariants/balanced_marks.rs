//! Balanced marks invariant: X and O alternate, X first.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: mark counts match strict alternation starting with X.
///
/// X has as many marks as O, or exactly one more. While the game is in
/// progress the turn belongs to the mark with fewer placements (X on a tie).
/// Once the game is over the turn stays on the mark that placed last, and a
/// won game was won by that mark.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);

        let last_mover = if x == o + 1 {
            Some(Mark::X)
        } else if x == o && x > 0 {
            Some(Mark::O)
        } else if x == o {
            None
        } else {
            return false;
        };

        let turn = *state.current_turn();
        if state.is_over() {
            last_mover == Some(turn)
                && state.outcome().winner().is_none_or(|winner| winner == turn)
        } else {
            turn == last_mover.map_or(Mark::X, Mark::opponent)
        }
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... (counts, turn and winner agree)"
    }
}
