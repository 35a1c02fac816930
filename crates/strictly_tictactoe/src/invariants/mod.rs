//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that every reachable [`GameState`]
//! satisfies. They back the placement postconditions and can validate
//! snapshots that did not come from an engine (e.g. deserialized ones).

use crate::GameState;

mod balanced_marks;
mod outcome_consistent;
mod single_winner;

pub use balanced_marks::BalancedMarksInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use single_winner::SingleWinnerInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of invariants; every violation is reported,
/// not just the first.
pub trait InvariantSet<S> {
    /// Returns Ok(()) if all invariants hold, or every violation found.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

/// All tic-tac-toe state invariants as a composable set.
pub type GameInvariants = (
    BalancedMarksInvariant,
    OutcomeConsistentInvariant,
    SingleWinnerInvariant,
);

impl GameState {
    /// Checks this snapshot against every game invariant.
    pub fn validate(&self) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Placement, Position};

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        assert!(GameState::new().validate().is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_placements() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            state = state
                .apply(Placement::new(*state.current_turn(), pos))
                .expect("legal placement");
        }
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut state = GameState::new();
        // O has three in a row without X ever moving, and the game claims
        // to be in progress.
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            state.board.set(pos, Cell::Occupied(Mark::O));
        }

        let violations = state.validate().unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == BalancedMarksInvariant::description())
        );
        assert!(
            violations
                .iter()
                .any(|v| v.description == OutcomeConsistentInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (BalancedMarksInvariant, SingleWinnerInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
