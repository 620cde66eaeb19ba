//! Piece placement strings.
//!
//! The format is the first field of FEN: eight `/`-separated rows, row 0
//! (Black's back row) first. Letters are pieces, digits count empty squares.

use crate::Piece;
use thiserror::Error;

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: usize },

    #[error("row {row} has {squares} squares, expected 8")]
    InvalidRowLength { row: usize, squares: usize },
}

/// Parsed piece placement, indexed by [`Square::index`](crate::Square::index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub squares: [Option<Piece>; 64],
}

impl Placement {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses a placement string.
    pub fn parse(s: &str) -> Result<Self, PlacementError> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::InvalidRowCount(rows.len()));
        }

        let mut squares = [None; 64];
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in text.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += run as usize;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if col < 8 {
                        squares[row * 8 + col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter { ch, row });
                }
            }
            if col != 8 {
                return Err(PlacementError::InvalidRowLength { row, squares: col });
            }
        }

        Ok(Placement { squares })
    }

    /// Serializes squares back into a placement string.
    pub fn write(squares: &[Option<Piece>; 64]) -> String {
        let mut out = String::with_capacity(71);
        for row in 0..8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for col in 0..8 {
                match squares[row * 8 + col] {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Self::write(&self.squares))
    }
}
