//! Game state: the board plus the side to move.
//!
//! [`Game`] is the single source of truth that the controller mutates. A move
//! is either accepted (board updated, turn flipped once) or rejected with a
//! [`GameError`] and no state change.

use crate::movegen::{apply_move, legal_destinations};
use crate::rules::is_legal_move;
use crate::Board;
use chessboard_core::{Color, Move, Piece, Square};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The source square holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The source square holds a piece of the side not to move.
    #[error("the piece on {square} does not belong to {side}")]
    NotYourPiece { square: Square, side: Color },
    /// The piece cannot make this move.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
}

/// The result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The opponent's piece that stood on the destination, if any.
    pub captured: Option<Piece>,
}

/// A two-player game on one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::startpos(),
            side_to_move: Color::White,
        }
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side whose turn it is.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns true if the side to move may play `from` to `to`.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        is_legal_move(&self.board, self.side_to_move, from, to)
    }

    /// Returns the squares the piece on `from` may move to this turn.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(&self.board, self.side_to_move, from)
    }

    /// Plays a move for the side to move.
    ///
    /// On success the piece is moved, any captured piece removed, and the
    /// turn passes to the other side. On failure nothing changes.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        let mv = Move::new(from, to);
        let piece = self.board.get(from).ok_or(GameError::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            return Err(GameError::NotYourPiece {
                square: from,
                side: self.side_to_move,
            });
        }
        if !self.is_legal(from, to) {
            tracing::trace!(%mv, side = %self.side_to_move, "move rejected");
            return Err(GameError::IllegalMove(mv));
        }

        let captured = apply_move(&mut self.board, mv);
        tracing::debug!(%mv, %piece, captured = ?captured, "move played");
        self.side_to_move = self.side_to_move.opposite();

        Ok(MoveOutcome {
            mv,
            piece,
            captured,
        })
    }

    /// Resets to the starting position with White to move.
    pub fn reset(&mut self) {
        *self = Game::new();
    }
}
