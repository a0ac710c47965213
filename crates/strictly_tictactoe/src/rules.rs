//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search can call them directly on any position.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_lines};

use super::{Board, Outcome, Player, Score};
use tracing::warn;

/// Returns true if the game is over: somebody has a line or no squares remain.
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || board.active_player().is_none()
}

/// Zero-sum utility of a terminal board: +1 if X won, -1 if O won, 0 otherwise.
///
/// Only meaningful for terminal boards. Non-terminal boards score 0.
pub fn utility(board: &Board) -> Score {
    if !is_terminal(board) {
        warn!(board = %board, "Utility requested for a non-terminal board");
    }
    match check_winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Outcome of the game, or `None` while it is still in progress.
pub fn outcome(board: &Board) -> Option<Outcome> {
    match check_winner(board) {
        Some(player) => Some(Outcome::Winner(player)),
        None if board.is_full() => Some(Outcome::Draw),
        None => None,
    }
}

impl Board {
    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self)
    }

    /// Returns true if the game on this board is over.
    pub fn is_terminal(&self) -> bool {
        is_terminal(self)
    }

    /// Terminal utility from X's perspective. See [`utility`].
    pub fn utility(&self) -> Score {
        utility(self)
    }

    /// Outcome of the game, if it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        outcome(self)
    }
}
