//! Shape rules for each piece type.
//!
//! Each function takes the board, the mover's color and the two squares and
//! returns whether the displacement fits the piece. They assume the common
//! checks in [`is_legal_move`](super::is_legal_move) have passed: the squares
//! differ and `to` does not hold one of the mover's pieces.

use super::path_blocked;
use crate::Board;
use chessboard_core::{Color, Square};

/// Pawns advance one square straight ahead onto an empty square, two from
/// their start row when both squares are empty, and capture one square
/// diagonally forward. There is no en passant.
pub fn pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    let forward = color.pawn_direction();

    match d_col {
        0 => {
            if board.occupied(to) {
                return false;
            }
            if d_row == forward {
                return true;
            }
            d_row == 2 * forward
                && from.row() == color.pawn_start_row()
                && from
                    .offset(forward, 0)
                    .is_some_and(|mid| !board.occupied(mid))
        }
        -1 | 1 => d_row == forward && board.side_of(to) == Some(color.opposite()),
        _ => false,
    }
}

/// Rooks move along a row or column with nothing in between.
pub fn rook_move(board: &Board, _color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    ((d_row == 0) != (d_col == 0)) && !path_blocked(board, from, to)
}

/// Knights jump in an L: two squares one way, one the other.
pub fn knight_move(_board: &Board, _color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

/// Bishops move along a diagonal with nothing in between.
pub fn bishop_move(board: &Board, _color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row != 0 && d_row.abs() == d_col.abs() && !path_blocked(board, from, to)
}

/// Queens move as a rook or a bishop.
pub fn queen_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    rook_move(board, color, from, to) || bishop_move(board, color, from, to)
}

/// Kings step to any adjacent square. There is no castling.
pub fn king_move(_board: &Board, _color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0)
}
