//! Strictly Tic-Tac-Toe - a contract-checked tic-tac-toe rules engine
//!
//! The engine owns one game: a 3x3 board, whose turn it is, and the outcome.
//! A view drives it with [`GameEngine::place`] and [`GameEngine::reset`],
//! renders from [`GameEngine::state`], and subscribes to wins with
//! [`GameEngine::on_win`].
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`], [`Outcome`], [`GameState`]
//! - **Rules**: pure win/draw detection over a board ([`rules`])
//! - **Contracts**: placement pre/postconditions ([`contracts`])
//! - **Invariants**: properties every reachable state satisfies ([`invariants`])
//! - **Engine**: [`GameEngine`], the stateful owner used by a view
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new();
//! engine.on_win(|mark: Mark| println!("{mark} wins!"));
//!
//! for cell in [0, 4, 1, 3, 2] {
//!     engine.place(cell);
//! }
//! assert_eq!(*engine.state().outcome(), Outcome::Won(Mark::X));
//!
//! let fresh = engine.reset();
//! assert_eq!(*fresh.current_turn(), Mark::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod observer;
mod position;
pub mod rules;
mod types;

pub use action::{PlaceError, Placement};
pub use engine::GameEngine;
pub use observer::WinObserver;
pub use position::Position;
pub use rules::check_winner;
pub use types::{Board, Cell, GameState, Mark, Outcome};
