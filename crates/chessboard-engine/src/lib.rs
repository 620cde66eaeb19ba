//! Move legality and game state for a click-to-move chess board.
//!
//! This crate provides:
//! - [`Board`] - the 8×8 grid of optional pieces
//! - [`rules`] - per-piece move legality with path obstruction
//! - [`Game`] - board plus side to move, with typed move rejection
//! - [`Controller`] - click-to-select / click-to-move state machine and the
//!   per-square render contract
//!
//! The rules cover piece movement only. There is no check, checkmate,
//! castling, en passant or promotion.
//!
//! # Example
//!
//! ```
//! use chessboard_core::{Color, Square};
//! use chessboard_engine::{rules, Board, Game};
//!
//! let board = Board::startpos();
//! let e2 = Square::new(6, 4).unwrap();
//! let e4 = Square::new(4, 4).unwrap();
//! assert!(rules::is_legal_move(&board, Color::White, e2, e4));
//!
//! let mut game = Game::new();
//! game.make_move(e2, e4).unwrap();
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

mod board;
mod config;
mod controller;
mod game;
pub mod movegen;
pub mod rules;

pub use board::Board;
pub use config::{ControllerConfig, IllegalMovePolicy};
pub use controller::{Cell, ClickOutcome, Controller, Selection, Shade};
pub use game::{Game, GameError, MoveOutcome};
pub use movegen::{apply_move, legal_destinations, legal_moves};
pub use rules::{is_legal_move, path_blocked};
