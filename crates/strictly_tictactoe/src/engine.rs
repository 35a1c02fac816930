//! The tic-tac-toe game engine.
//!
//! [`GameState::apply`] is the pure transition; [`GameEngine`] owns the
//! current state, applies placements requested by a view, and notifies
//! win observers.

use super::action::{PlaceError, Placement};
use super::contracts::{Contract, PlacementContract};
use super::observer::WinObserver;
use super::rules::{check_winner, is_full};
use super::{Cell, GameState, Outcome, Position};
use tracing::{debug, error, info, instrument, warn};

impl GameState {
    /// Applies a placement, returning the next state.
    ///
    /// Preconditions are always checked. Postconditions are checked in debug
    /// builds, and in release builds with the `strict-contracts` feature.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::GameOver`] if the outcome is already terminal
    /// - [`PlaceError::CellOccupied`] if the target cell holds a mark
    /// - [`PlaceError::WrongTurn`] if the mark is not the current turn
    pub fn apply(&self, placement: Placement) -> Result<GameState, PlaceError> {
        PlacementContract::pre(self, &placement)?;

        let mut next = *self;
        next.board
            .set(placement.position(), Cell::Occupied(placement.mark()));

        if let Some(winner) = check_winner(&next.board) {
            next.outcome = Outcome::Won(winner);
        } else if is_full(&next.board) {
            next.outcome = Outcome::Draw;
        } else {
            next.current_turn = placement.mark().opponent();
        }

        #[cfg(any(debug_assertions, feature = "strict-contracts"))]
        PlacementContract::post(self, &next)?;

        Ok(next)
    }
}

/// Stateful tic-tac-toe engine owned by a single view.
///
/// Illegal clicks (occupied cell, finished game) are silent no-ops through
/// [`place`](Self::place); [`try_place`](Self::try_place) reports them.
pub struct GameEngine {
    state: GameState,
    observers: Vec<Box<dyn WinObserver>>,
}

impl GameEngine {
    /// Creates an engine with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            observers: Vec::new(),
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Registers an observer called when a game is won.
    ///
    /// Observers survive [`reset`](Self::reset) and are called in
    /// registration order.
    pub fn on_win(&mut self, observer: impl WinObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Places the current turn's mark at a raw cell index (0-8).
    ///
    /// Placing on an occupied cell or after the game ended returns the
    /// unchanged state.
    ///
    /// # Panics
    ///
    /// In debug builds, if `index` is outside 0-8. Release builds log a
    /// warning and return the unchanged state.
    #[instrument(skip(self), fields(turn = %self.state.current_turn))]
    pub fn place(&mut self, index: usize) -> GameState {
        let position = match Position::try_from(index) {
            Ok(position) => position,
            Err(err) => {
                if cfg!(debug_assertions) {
                    panic!("{err}");
                }
                warn!(index, "Ignoring placement at out-of-range cell index");
                return self.state;
            }
        };

        match self.try_place(position) {
            Ok(state) => state,
            Err(err) if err.is_illegal_move() => {
                debug!(%err, "Placement ignored");
                self.state
            }
            Err(err) => {
                error!(%err, "Placement rejected");
                self.state
            }
        }
    }

    /// Places the current turn's mark at `position`.
    ///
    /// # Errors
    ///
    /// Returns the [`PlaceError`] from [`GameState::apply`]; the engine state
    /// is unchanged on error.
    #[instrument(skip(self), fields(turn = %self.state.current_turn))]
    pub fn try_place(&mut self, position: Position) -> Result<GameState, PlaceError> {
        let placement = Placement::new(self.state.current_turn, position);
        let next = self.state.apply(placement)?;
        self.state = next;
        debug!(%placement, "Placement accepted");

        match next.outcome {
            Outcome::Won(mark) => {
                info!(winner = %mark, "Game won\n{}", next.board);
                for observer in &mut self.observers {
                    observer.on_win(mark);
                }
            }
            Outcome::Draw => info!("Game drawn\n{}", next.board),
            Outcome::InProgress => {}
        }

        Ok(next)
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self), fields(outcome = %self.state.outcome))]
    pub fn reset(&mut self) -> GameState {
        self.state = GameState::new();
        info!("Game reset");
        self.state
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
