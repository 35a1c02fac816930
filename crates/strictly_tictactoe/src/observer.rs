//! Win notifications for the view layer.

use super::Mark;

/// Receives a notification when a game is won.
///
/// [`GameEngine`](crate::GameEngine) calls `on_win` synchronously, exactly
/// once per game, on the transition into [`Outcome::Won`](crate::Outcome::Won).
/// Any `FnMut(Mark)` closure is an observer.
pub trait WinObserver {
    /// Called with the winning mark.
    fn on_win(&mut self, mark: Mark);
}

impl<F> WinObserver for F
where
    F: FnMut(Mark),
{
    fn on_win(&mut self, mark: Mark) {
        self(mark)
    }
}
