//! Board state: the occupant of each of the 64 squares.

use chessboard_core::{Color, Piece, PieceKind, Placement, PlacementError, Square};
use std::fmt;

/// Piece order along each back row, column 0 first.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 grid of optional pieces.
///
/// A square holds at most one piece; empty squares are `None`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn startpos() -> Self {
        let mut board = Self::empty();
        for color in Color::ALL {
            let back = color.back_row() as usize * 8;
            let pawns = color.pawn_start_row() as usize * 8;
            for (col, kind) in BACK_ROW.into_iter().enumerate() {
                board.squares[back + col] = Some(Piece::new(color, kind));
                board.squares[pawns + col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// Creates a board from a placement string (row 0 first).
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let parsed = Placement::parse(placement)?;
        Ok(Board {
            squares: parsed.squares,
        })
    }

    /// Converts the board to a placement string.
    pub fn to_placement(&self) -> String {
        Placement::write(&self.squares)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Overwrites the occupant of a square.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index() as usize] = piece;
    }

    /// Returns the side owning the piece on the given square, if any.
    #[inline]
    pub fn side_of(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Returns true if the square holds a piece.
    #[inline]
    pub fn occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Iterates over occupied squares and their pieces, row 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the squares holding pieces of the given color.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.color == color)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            let line: String = (0..8)
                .map(|col| {
                    self.squares[row * 8 + col]
                        .map(|piece| piece.to_char())
                        .unwrap_or('.')
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}
