//! Errors raised by board transformations and parsing.

use super::Position;
use derive_more::{Display, Error};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target square is already occupied.
    ///
    /// Signals a caller bug: candidate moves should come from
    /// [`Board::legal_moves`](crate::Board::legal_moves).
    #[display("Invalid move: square {} is already occupied", position)]
    InvalidMove {
        /// The occupied position.
        position: Position,
    },
}

/// Error that can occur when parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character that is not a mark, an empty marker or a separator.
    #[display("Unexpected board character {:?}", found)]
    InvalidCell {
        /// The offending character.
        found: char,
    },

    /// The text did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", found)]
    WrongLength {
        /// Number of squares read.
        found: usize,
    },
}
