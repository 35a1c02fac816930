//! Outcome consistency invariant: the recorded outcome matches the board.

use super::Invariant;
use crate::rules::{check_winner, is_draw, is_full};
use crate::{GameState, Outcome};

/// Invariant: the outcome is exactly what the rules say about the board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match *state.outcome() {
            Outcome::InProgress => check_winner(board).is_none() && !is_full(board),
            Outcome::Draw => is_draw(board),
            Outcome::Won(mark) => check_winner(board) == Some(mark),
        }
    }

    fn description() -> &'static str {
        "Outcome agrees with the board (winner, draw, or in progress)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position};

    fn state_with_top_row(mark: Mark) -> GameState {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            state.board.set(pos, Cell::Occupied(mark));
        }
        state
    }

    #[test]
    fn test_fresh_game_holds() {
        assert!(OutcomeConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_unrecorded_win_violates() {
        let state = state_with_top_row(Mark::X);
        assert!(!OutcomeConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_recorded_win_holds() {
        let mut state = state_with_top_row(Mark::X);
        state.outcome = Outcome::Won(Mark::X);
        assert!(OutcomeConsistentInvariant::holds(&state));

        state.outcome = Outcome::Won(Mark::O);
        assert!(!OutcomeConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_premature_draw_violates() {
        let mut state = GameState::new();
        state.outcome = Outcome::Draw;
        assert!(!OutcomeConsistentInvariant::holds(&state));
    }
}
