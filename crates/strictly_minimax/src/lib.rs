//! Strictly Minimax - optimal tic-tac-toe play via alpha-beta search.
//!
//! The engine explores the game tree produced by [`strictly_tictactoe`]
//! and returns the move that is optimal for the player to move, assuming
//! both sides play perfectly from there on.
//!
//! # Architecture
//!
//! - **Search**: [`Searcher`] with [`best_move`](Searcher::best_move) and
//!   [`value`](Searcher::value), plus free-function shortcuts
//! - **Config**: [`SearchConfig`] selects pruned or exhaustive evaluation
//! - **Play-out**: [`Searcher::play_out`] lets both sides follow the engine
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{best_move, value, NEG_INFINITY, POS_INFINITY};
//! use strictly_tictactoe::{Board, Position};
//!
//! let board: Board = "XX. .O. ..O".parse().unwrap();
//! assert_eq!(best_move(&board), Some(Position::TopRight));
//! assert_eq!(value(&board, NEG_INFINITY, POS_INFINITY), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod play;
mod search;
mod stats;

pub use config::{Algorithm, ConfigError, SearchConfig};
pub use play::{PlayOut, SearchError};
pub use search::{
    NEG_INFINITY, POS_INFINITY, ScoredMove, Searcher, best_move, minimax_value, value,
};
pub use stats::SearchStats;
