//! Strictly Tic-Tac-Toe - pure game logic for 3x3 tic-tac-toe.
//!
//! Boards are small `Copy` values. Every transformation returns a new
//! board, so a search can hold a position and all of its ancestors at once.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`] and [`Board`]
//! - **Positions**: the nine cells as a [`Position`] enum, row-major
//! - **Rules**: winner, terminal and utility evaluation in [`rules`]
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Player, Position};
//!
//! # fn example() -> Result<(), strictly_tictactoe::MoveError> {
//! let board = Board::new();
//! assert_eq!(board.active_player(), Some(Player::X));
//!
//! let board = board.apply(Position::Center)?;
//! assert_eq!(board.active_player(), Some(Player::O));
//! assert_eq!(board.legal_moves().len(), 8);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{MoveError, ParseBoardError};
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, Player, Score, Square};

/// Alias for clarity in search code: a move is the cell it targets.
pub type Move = Position;
