//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight winning lines, in the order they are checked.
///
/// Lines through the center come first, then the two through the top-left
/// corner, then the two through the bottom-right corner.
pub const LINES: [[Position; 3]; 8] = [
    // Through the center
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::Center, Position::BottomLeft],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    // Through the top-left corner
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    // Through the bottom-right corner
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
];

/// Returns the player owning all three squares of `line`, if any.
fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    match (board.get(a), board.get(b), board.get(c)) {
        (Square::Occupied(p1), Square::Occupied(p2), Square::Occupied(p3))
            if p1 == p2 && p2 == p3 =>
        {
            Some(p1)
        }
        _ => None,
    }
}

/// Every completed line on the board with its owner, in check order.
///
/// Boards reached by legal play never mix owners here, though one move can
/// complete two lines at once.
pub fn winning_lines(board: &Board) -> impl Iterator<Item = ([Position; 3], Player)> + '_ {
    LINES
        .into_iter()
        .filter_map(move |line| line_owner(board, line).map(|player| (line, player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the owner of the first completed line in
/// [`LINES`] order, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_lines(board).next().map(|(_, player)| player)
}
