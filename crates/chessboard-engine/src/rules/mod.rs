//! Move legality.
//!
//! [`is_legal_move`] is the single entry point. It applies the checks every
//! move shares (distinct squares, a piece of the side to move, no
//! self-capture) and then defers to the shape rule for the moving piece's
//! type in [`pieces`].
//!
//! There is no check detection: a king may move into, or be left in, check.

mod pieces;

pub use pieces::{bishop_move, king_move, knight_move, pawn_move, queen_move, rook_move};

use crate::Board;
use chessboard_core::{Color, PieceKind, Square};

/// Returns true if `turn` may move the piece on `from` to `to`.
///
/// Never panics. A move is illegal when the squares are equal, when `from`
/// is empty or holds an opponent's piece, when `to` holds one of the mover's
/// own pieces, or when the piece's shape rule rejects it.
pub fn is_legal_move(board: &Board, turn: Color, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }

    let Some(moving) = board.get(from) else {
        return false;
    };
    if moving.color != turn {
        return false;
    }

    if board.side_of(to) == Some(turn) {
        return false;
    }

    match moving.kind {
        PieceKind::Pawn => pawn_move(board, turn, from, to),
        PieceKind::Rook => rook_move(board, turn, from, to),
        PieceKind::Knight => knight_move(board, turn, from, to),
        PieceKind::Bishop => bishop_move(board, turn, from, to),
        PieceKind::Queen => queen_move(board, turn, from, to),
        PieceKind::King => king_move(board, turn, from, to),
    }
}

/// Returns true if any square strictly between `from` and `to` is occupied.
///
/// Walks one square at a time along `(signum Δrow, signum Δcol)`. The
/// endpoints are never examined. Only meaningful when the squares share a
/// row, column, or diagonal.
pub fn path_blocked(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let distance = d_row.abs().max(d_col.abs());

    (1..distance)
        .filter_map(|k| from.offset(k * step_row, k * step_col))
        .any(|sq| board.occupied(sq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessboard_core::Piece;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    #[test]
    fn same_square_is_illegal() {
        let board = Board::startpos();
        for from in Square::all() {
            assert!(!is_legal_move(&board, Color::White, from, from));
            assert!(!is_legal_move(&board, Color::Black, from, from));
        }
    }

    #[test]
    fn empty_source_is_illegal() {
        let board = Board::startpos();
        assert!(!is_legal_move(&board, Color::White, sq(4, 4), sq(3, 4)));
    }

    #[test]
    fn opponent_piece_cannot_be_moved() {
        let board = Board::startpos();
        // Black pawn double step, attempted on White's turn.
        assert!(!is_legal_move(&board, Color::White, sq(1, 3), sq(3, 3)));
        assert!(is_legal_move(&board, Color::Black, sq(1, 3), sq(3, 3)));
    }

    #[test]
    fn self_capture_is_illegal() {
        let board = Board::startpos();
        assert!(!is_legal_move(&board, Color::White, sq(7, 1), sq(6, 3)));
        assert!(!is_legal_move(&board, Color::White, sq(7, 0), sq(6, 0)));
        assert!(!is_legal_move(&board, Color::White, sq(7, 4), sq(6, 4)));
        assert!(!is_legal_move(&board, Color::Black, sq(0, 3), sq(0, 4)));
    }

    #[test]
    fn knight_opening_moves() {
        let board = Board::startpos();
        assert!(is_legal_move(&board, Color::White, sq(7, 1), sq(5, 2)));
        assert!(is_legal_move(&board, Color::White, sq(7, 1), sq(5, 0)));
        assert!(!is_legal_move(&board, Color::White, sq(7, 1), sq(6, 2)));
        assert!(is_legal_move(&board, Color::Black, sq(0, 6), sq(2, 5)));
    }

    #[test]
    fn sliders_blocked_at_start() {
        let board = Board::startpos();
        assert!(!is_legal_move(&board, Color::White, sq(7, 0), sq(5, 0)));
        assert!(!is_legal_move(&board, Color::White, sq(7, 2), sq(5, 4)));
        assert!(!is_legal_move(&board, Color::White, sq(7, 3), sq(4, 3)));
        assert!(!is_legal_move(&board, Color::Black, sq(0, 5), sq(2, 7)));
    }

    #[test]
    fn king_adjacent_squares() {
        let board = board("8/8/8/8/3K4/8/8/7k");
        let king = sq(4, 3);
        for to in Square::all() {
            let (dr, dc) = king.delta(to);
            let expected = to != king && dr.abs() <= 1 && dc.abs() <= 1;
            assert_eq!(is_legal_move(&board, Color::White, king, to), expected, "{to}");
        }
    }

    #[test]
    fn king_may_move_into_check() {
        // The rook on row 3 attacks (3,3); no check detection rejects it.
        let board = board("7k/8/8/r7/3K4/8/8/8");
        assert!(is_legal_move(&board, Color::White, sq(4, 3), sq(3, 3)));
    }

    #[test]
    fn capture_of_opponent_allowed() {
        let board = board("4k3/8/8/3p4/8/8/8/3RK3");
        assert!(is_legal_move(&board, Color::White, sq(7, 3), sq(3, 3)));
        assert!(!is_legal_move(&board, Color::White, sq(7, 3), sq(2, 3)));
    }

    #[test]
    fn path_blocked_ignores_endpoints() {
        let mut board = Board::empty();
        let pawn = Some(Piece::new(Color::White, chessboard_core::PieceKind::Pawn));
        board.set(sq(0, 0), pawn);
        board.set(sq(0, 7), pawn);
        assert!(!path_blocked(&board, sq(0, 0), sq(0, 7)));

        board.set(sq(0, 4), pawn);
        assert!(path_blocked(&board, sq(0, 0), sq(0, 7)));
        assert!(path_blocked(&board, sq(0, 7), sq(0, 0)));
        assert!(!path_blocked(&board, sq(0, 0), sq(0, 4)));
    }

    #[test]
    fn path_blocked_diagonal() {
        let board = board("8/8/8/8/3p4/8/8/8");
        assert!(path_blocked(&board, sq(7, 0), sq(1, 6)));
        assert!(path_blocked(&board, sq(1, 6), sq(7, 0)));
        assert!(!path_blocked(&board, sq(7, 0), sq(5, 2)));
        assert!(!path_blocked(&board, sq(7, 7), sq(0, 0)));
    }

    #[test]
    fn adjacent_squares_never_blocked() {
        let board = Board::startpos();
        assert!(!path_blocked(&board, sq(6, 4), sq(5, 4)));
        assert!(!path_blocked(&board, sq(7, 2), sq(6, 3)));
    }
}
