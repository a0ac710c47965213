//! Core domain types for tic-tac-toe.

use super::action::{MoveError, ParseBoardError};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, trace};

/// Zero-sum score from X's perspective: positive favors X, negative favors O.
pub type Score = i32;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes).
    X,
    /// Player O (goes second, minimizes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used by the text form of a board.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: [`Board::apply`] returns a fresh board and leaves
/// `self` untouched. Whose turn it is never gets stored; it is derived from
/// how many squares are occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from raw squares in row-major order.
    ///
    /// No reachability check is made, so positions that cannot arise in
    /// play (both players with a line, wrong mark counts) are allowed.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Replays a move sequence from the empty board.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::new(), |board, &pos| board.apply(pos))
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| **s != Square::Empty)
            .count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Returns the player whose mark goes down next.
    ///
    /// X moves on an even occupied count (including zero), O on an odd one.
    /// A full board has no next player.
    pub fn active_player(&self) -> Option<Player> {
        match self.occupied_count() {
            9 => None,
            n if n % 2 == 0 => Some(Player::X),
            _ => Some(Player::O),
        }
    }

    /// Returns the empty positions in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Returns the board that results from the active player marking `pos`.
    ///
    /// The mark is taken from `self`, before the move changes whose turn it
    /// is. `self` is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the square is already occupied.
    pub fn apply(&self, pos: Position) -> Result<Self, MoveError> {
        match (self.get(pos), self.active_player()) {
            (Square::Empty, Some(player)) => Ok(self.place(pos, player)),
            _ => {
                trace!(position = %pos, "Rejected move on occupied square");
                Err(MoveError::InvalidMove { position: pos })
            }
        }
    }

    /// Legal moves paired with the boards they produce, in row-major order.
    ///
    /// Equivalent to calling [`Board::apply`] on each of
    /// [`Board::legal_moves`], without the error path.
    pub fn successors(&self) -> impl Iterator<Item = (Position, Board)> {
        let board = *self;
        let player = board.active_player();
        Position::ALL.into_iter().filter_map(move |pos| {
            let player = player?;
            board
                .is_empty(pos)
                .then(|| (pos, board.place(pos, player)))
        })
    }

    /// Copy of `self` with `pos` marked for `player`.
    fn place(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(player);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for square in cells {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses nine squares: `X`/`O` for marks, `.`, `-` or `_` for empty.
/// Whitespace and `|` are ignored, so both `"XO.\n.X.\n..O"` and
/// `"X|O|.  .|X|.  .|.|O"` work.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '-' | '_' => Ok(Square::Empty),
                found => Err(ParseBoardError::InvalidCell { found }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let found = squares.len();
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| ParseBoardError::WrongLength { found })?;

        Ok(Self::from_squares(squares))
    }
}
