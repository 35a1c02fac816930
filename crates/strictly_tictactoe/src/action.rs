//! Placement events and the errors raised when one is rejected.

use super::{Mark, Outcome, Position};
use serde::{Deserialize, Serialize};

/// A mark being placed at a position.
///
/// Placements are domain events: they carry the intent of a move and are
/// validated against a [`GameState`](crate::GameState) before application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    mark: Mark,
    position: Position,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the mark being placed.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the target position.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Reason a placement was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// Raw cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The placement's mark is not the one whose turn it is.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),

    /// A postcondition failed after applying the placement.
    #[display("Contract violation: {}", _0)]
    ContractViolation(String),
}

impl std::error::Error for PlaceError {}

impl PlaceError {
    /// Checks if this is a rule rejection that `place` treats as a no-op.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, PlaceError::CellOccupied(_) | PlaceError::GameOver(_))
    }
}
