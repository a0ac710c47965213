//! Self-play: both sides follow the searcher to the end of the game.

use crate::search::Searcher;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Board, MoveError, Outcome, Position};
use tracing::{info, instrument};

/// A game played out by the searcher from some starting board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayOut {
    /// Moves chosen, in order.
    moves: Vec<Position>,
    /// Final board.
    board: Board,
    /// How the game ended.
    outcome: Outcome,
}

/// Error that can occur while playing a game out.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The searcher picked a move the board rejected.
    #[display("Search chose an illegal move: {}", _0)]
    IllegalMove(#[error(source)] MoveError),

    /// The searcher stopped before the game was decided.
    #[display("Play-out stopped on an unfinished board:\n{}", board)]
    Unfinished {
        /// Board the play-out stopped on.
        board: Board,
    },
}

impl From<MoveError> for SearchError {
    fn from(err: MoveError) -> Self {
        Self::IllegalMove(err)
    }
}

impl Searcher {
    /// Plays [`Searcher::best_move`] for both sides until the game ends.
    ///
    /// Under perfect play the final utility equals the starting board's
    /// minimax value.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn play_out(&mut self, board: &Board) -> Result<PlayOut, SearchError> {
        let mut current = *board;
        let mut moves = Vec::new();

        while let Some(position) = self.best_move(&current) {
            current = current.apply(position)?;
            moves.push(position);
        }

        let outcome = current
            .outcome()
            .ok_or(SearchError::Unfinished { board: current })?;

        info!(%outcome, moves = moves.len(), "Play-out finished");
        Ok(PlayOut {
            moves,
            board: current,
            outcome,
        })
    }
}
