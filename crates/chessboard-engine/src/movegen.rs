//! Move enumeration and application.
//!
//! Enumeration is brute force over destination squares; every candidate is
//! run through [`is_legal_move`], so the generated lists agree with the
//! legality check by construction.

use crate::rules::is_legal_move;
use crate::Board;
use chessboard_core::{Color, Move, Piece, Square};

/// Returns every square the piece on `from` may legally move to.
///
/// Empty when `from` is empty or holds an opponent's piece.
pub fn legal_destinations(board: &Board, turn: Color, from: Square) -> Vec<Square> {
    if board.side_of(from) != Some(turn) {
        return Vec::new();
    }
    Square::all()
        .filter(|&to| is_legal_move(board, turn, from, to))
        .collect()
}

/// Returns every legal move for the side to move.
pub fn legal_moves(board: &Board, turn: Color) -> Vec<Move> {
    board
        .squares_of(turn)
        .flat_map(|from| {
            legal_destinations(board, turn, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Moves the piece on `m.from` to `m.to` and empties `m.from`.
///
/// Returns whatever stood on the destination. No legality checks are made.
pub fn apply_move(board: &mut Board, m: Move) -> Option<Piece> {
    let moving = board.get(m.from);
    let captured = board.get(m.to);
    board.set(m.to, moving);
    board.set(m.from, None);
    captured
}
