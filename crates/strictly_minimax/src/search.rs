//! Minimax search with alpha-beta pruning.
//!
//! Scores are zero-sum from X's point of view: X maximizes, O minimizes.
//! Bounds travel down the recursion as plain arguments, so a cutoff in one
//! branch can never leak into a sibling.

use crate::config::{Algorithm, SearchConfig};
use crate::stats::SearchStats;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Board, Player, Position, Score};
use tracing::{debug, instrument, trace};

/// Lower bound standing in for negative infinity.
pub const NEG_INFINITY: Score = Score::MIN;

/// Upper bound standing in for positive infinity.
pub const POS_INFINITY: Score = Score::MAX;

/// A root move and the exact minimax value of the board it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The move.
    pub position: Position,
    /// Minimax value of the resulting board.
    pub score: Score,
}

/// Game-tree searcher.
///
/// Holds the configuration and the node counters; the search itself keeps
/// no state between nodes beyond what is passed down each call.
#[derive(Debug, Clone, Default, Getters)]
pub struct Searcher {
    /// Search configuration.
    config: SearchConfig,
    /// Counters accumulated since creation or the last reset.
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Clears the node counters.
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Returns the optimal move for the player to move, or `None` if the
    /// game is over.
    ///
    /// Each legal move is scored with [`Searcher::value`] over the full
    /// window. X takes the highest score and O the lowest; on ties the first
    /// move in row-major order wins.
    #[instrument(skip(self, board), fields(board = %board, algorithm = %self.config.algorithm()))]
    pub fn best_move(&mut self, board: &Board) -> Option<Position> {
        let player = match board.active_player() {
            Some(player) if !board.is_terminal() => player,
            _ => {
                debug!("No move on a finished game");
                return None;
            }
        };

        let mut best: Option<ScoredMove> = None;
        for candidate in self.score_moves(board) {
            let improves = match best {
                None => true,
                Some(current) => match player {
                    Player::X => candidate.score > current.score,
                    Player::O => candidate.score < current.score,
                },
            };
            if improves {
                best = Some(candidate);
            }
        }

        if let Some(chosen) = best {
            debug!(
                player = %player,
                position = %chosen.position,
                score = chosen.score,
                stats = %self.stats,
                "Best move selected"
            );
        }
        best.map(|chosen| chosen.position)
    }

    /// Scores every legal move from `board`, in row-major order.
    ///
    /// Empty for a finished game.
    #[instrument(level = "debug", skip(self, board), fields(board = %board))]
    pub fn score_moves(&mut self, board: &Board) -> Vec<ScoredMove> {
        if board.is_terminal() {
            return Vec::new();
        }

        board
            .successors()
            .map(|(position, child)| ScoredMove {
                position,
                score: self.value(&child, NEG_INFINITY, POS_INFINITY),
            })
            .collect()
    }

    /// Minimax value of `board` given the bounds already guaranteed
    /// elsewhere in the tree.
    ///
    /// Start with [`NEG_INFINITY`] and [`POS_INFINITY`] for an exact value.
    /// Requires `alpha < beta`. Under [`Algorithm::Minimax`] the bounds are
    /// ignored.
    pub fn value(&mut self, board: &Board, alpha: Score, beta: Score) -> Score {
        debug_assert!(alpha < beta, "empty search window [{alpha}, {beta}]");
        match self.config.algorithm() {
            Algorithm::AlphaBeta => self.alpha_beta(board, alpha, beta),
            Algorithm::Minimax => self.minimax(board),
        }
    }

    fn alpha_beta(&mut self, board: &Board, mut alpha: Score, mut beta: Score) -> Score {
        self.stats.nodes += 1;
        let player = match board.active_player() {
            Some(player) if !board.is_terminal() => player,
            _ => {
                self.stats.leaves += 1;
                return board.utility();
            }
        };

        match player {
            Player::X => {
                let mut best = NEG_INFINITY;
                for (position, child) in board.successors() {
                    best = best.max(self.alpha_beta(&child, alpha, beta));
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        self.stats.cutoffs += 1;
                        trace!(%position, alpha, beta, "Beta cutoff");
                        break;
                    }
                }
                best
            }
            Player::O => {
                let mut best = POS_INFINITY;
                for (position, child) in board.successors() {
                    best = best.min(self.alpha_beta(&child, alpha, beta));
                    beta = beta.min(best);
                    if beta <= alpha {
                        self.stats.cutoffs += 1;
                        trace!(%position, alpha, beta, "Alpha cutoff");
                        break;
                    }
                }
                best
            }
        }
    }

    fn minimax(&mut self, board: &Board) -> Score {
        self.stats.nodes += 1;
        let player = match board.active_player() {
            Some(player) if !board.is_terminal() => player,
            _ => {
                self.stats.leaves += 1;
                return board.utility();
            }
        };

        let scores = board
            .successors()
            .map(|(_, child)| self.minimax(&child))
            .collect::<Vec<_>>();
        match player {
            Player::X => scores.into_iter().max().unwrap_or(NEG_INFINITY),
            Player::O => scores.into_iter().min().unwrap_or(POS_INFINITY),
        }
    }
}

/// Optimal move for the player to move, using a default searcher.
pub fn best_move(board: &Board) -> Option<Position> {
    Searcher::default().best_move(board)
}

/// Alpha-beta value of `board` within `[alpha, beta]`, using a default
/// searcher.
pub fn value(board: &Board, alpha: Score, beta: Score) -> Score {
    Searcher::default().value(board, alpha, beta)
}

/// Exact value of `board` by exhaustive minimax, without pruning.
pub fn minimax_value(board: &Board) -> Score {
    Searcher::new(SearchConfig::new(Algorithm::Minimax)).value(board, NEG_INFINITY, POS_INFINITY)
}
