//! Core types for the chess board.
//!
//! This crate provides the value types shared by the engine and the browser
//! bindings:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates (row 0 is Black's back row)
//! - [`Move`] for move representation
//! - [`Placement`] parsing and serialization

mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use placement::{Placement, PlacementError};
pub use square::{Square, SquareError};
