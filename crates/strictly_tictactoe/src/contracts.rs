//! Contract-based validation for placements.
//!
//! Contracts pair a precondition on the state and action with a
//! postcondition relating the state before and after: {P} action {Q}.

use super::action::{PlaceError, Placement};
use super::invariants::{GameInvariants, InvariantSet};
use super::{Cell, GameState, Position};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), PlaceError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), PlaceError>;
}

// ─────────────────────────────────────────────────────────────
//  Placement preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`PlaceError::GameOver`] once the outcome is terminal.
    pub fn check(state: &GameState) -> Result<(), PlaceError> {
        if state.is_over() {
            Err(PlaceError::GameOver(*state.outcome()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`PlaceError::CellOccupied`] if the cell holds a mark.
    pub fn check(placement: &Placement, state: &GameState) -> Result<(), PlaceError> {
        if state.board().is_empty(placement.position()) {
            Ok(())
        } else {
            Err(PlaceError::CellOccupied(placement.position()))
        }
    }
}

/// Precondition: the placement's mark must be the one whose turn it is.
pub struct MarksTurn;

impl MarksTurn {
    /// Fails with [`PlaceError::WrongTurn`] for an out-of-turn mark.
    pub fn check(placement: &Placement, state: &GameState) -> Result<(), PlaceError> {
        if placement.mark() == *state.current_turn() {
            Ok(())
        } else {
            Err(PlaceError::WrongTurn(placement.mark()))
        }
    }
}

/// Composite precondition: game not over, cell empty, right mark.
///
/// Checked in that order, so a click on an occupied cell of a finished
/// game reports [`PlaceError::GameOver`].
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for a placement.
    #[instrument(level = "trace", skip(state))]
    pub fn check(placement: &Placement, state: &GameState) -> Result<(), PlaceError> {
        GameNotOver::check(state)?;
        CellIsEmpty::check(placement, state)?;
        MarksTurn::check(placement, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: exactly one cell changed, from empty to the mover's mark.
///
/// Together with the precondition this keeps the board monotonic: an
/// occupied cell is never rewritten.
pub struct SingleCellWritten;

impl SingleCellWritten {
    /// Compares the boards before and after a placement.
    pub fn check(before: &GameState, after: &GameState) -> Result<(), PlaceError> {
        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| before.board().get(*pos) != after.board().get(*pos))
            .collect();

        match changed.as_slice() {
            [pos] if before.board().is_empty(*pos)
                && after.board().get(*pos) == Cell::Occupied(*before.current_turn()) =>
            {
                Ok(())
            }
            [pos] => Err(PlaceError::ContractViolation(format!(
                "Cell {pos} changed from {:?} to {:?}",
                before.board().get(*pos),
                after.board().get(*pos)
            ))),
            _ => Err(PlaceError::ContractViolation(format!(
                "Expected exactly one cell to change, {} changed",
                changed.len()
            ))),
        }
    }
}

/// Contract for placements.
///
/// Preconditions:
/// - Game is in progress
/// - Target cell is empty
/// - Mark matches the current turn
///
/// Postconditions:
/// - Exactly one cell written, holding the mover's mark
/// - All [`GameInvariants`] hold on the new state
pub struct PlacementContract;

impl Contract<GameState, Placement> for PlacementContract {
    fn pre(state: &GameState, action: &Placement) -> Result<(), PlaceError> {
        LegalPlacement::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), PlaceError> {
        SingleCellWritten::check(before, after)?;
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Placement postcondition failed");
            PlaceError::ContractViolation(format!("Postcondition failed: {descriptions}"))
        })
    }
}
