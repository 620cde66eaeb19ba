//! Click-to-select, click-to-move interaction.
//!
//! The [`Controller`] turns a stream of square clicks into selections and
//! moves against a [`Game`]. It owns the transient [`Selection`] and the
//! render contract ([`Controller::cells`]); drawing and event wiring live in
//! the browser bindings.
//!
//! Selection rules:
//! - with nothing selected, clicking a piece of the side to move selects it;
//! - clicking the selected square again deselects it;
//! - clicking another piece of the side to move switches the selection;
//! - any other click is a move attempt. Legal attempts are played and clear
//!   the selection. Rejected attempts keep or clear it per
//!   [`IllegalMovePolicy`].

use crate::config::{ControllerConfig, IllegalMovePolicy};
use crate::game::{Game, MoveOutcome};
use chessboard_core::{Piece, Square};

/// The square a player picked up a piece from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    /// The piece on `square` when it was selected.
    pub piece: Piece,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened.
    Ignored,
    /// A piece is now selected.
    Selected(Selection),
    /// The selection was dropped without moving.
    Deselected,
    /// The selected piece moved.
    Moved(MoveOutcome),
    /// The move attempt was illegal. `selection` is what remains selected.
    Rejected { selection: Option<Selection> },
}

impl ClickOutcome {
    /// Returns true if the board or selection changed and should be redrawn.
    pub fn needs_redraw(&self) -> bool {
        match self {
            ClickOutcome::Ignored => false,
            ClickOutcome::Rejected { selection } => selection.is_none(),
            _ => true,
        }
    }

    /// Returns a short name for the outcome, as reported to JavaScript.
    pub fn name(&self) -> &'static str {
        match self {
            ClickOutcome::Ignored => "ignored",
            ClickOutcome::Selected(_) => "selected",
            ClickOutcome::Deselected => "deselected",
            ClickOutcome::Moved(_) => "moved",
            ClickOutcome::Rejected { .. } => "rejected",
        }
    }
}

/// Square shading, alternating from a light top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

/// Everything needed to draw one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub square: Square,
    pub piece: Option<Piece>,
    pub shade: Shade,
    pub selected: bool,
    /// A legal destination for the selected piece. Only set when
    /// [`ControllerConfig::highlight_targets`] is on.
    pub target: bool,
}

/// Turns square clicks into selections and moves on a [`Game`].
#[derive(Debug, Clone, Default)]
pub struct Controller {
    game: Game,
    selection: Option<Selection>,
    config: ControllerConfig,
}

impl Controller {
    /// Creates a controller over a new game.
    pub fn new(config: ControllerConfig) -> Self {
        Self::with_game(Game::new(), config)
    }

    /// Creates a controller over an existing game.
    pub fn with_game(game: Game, config: ControllerConfig) -> Self {
        Controller {
            game,
            selection: None,
            config,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the current selection, if any.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Returns the config this controller was created with.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Handles a click on `square`.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        let side = self.game.side_to_move();
        let clicked = self.game.board().get(square);
        let own_piece = clicked.filter(|piece| piece.color == side);

        let Some(current) = self.selection else {
            return match own_piece {
                Some(piece) => self.select(square, piece),
                None => ClickOutcome::Ignored,
            };
        };

        if square == current.square {
            tracing::debug!(square = %square, "deselected");
            self.selection = None;
            return ClickOutcome::Deselected;
        }
        if let Some(piece) = own_piece {
            return self.select(square, piece);
        }

        match self.game.make_move(current.square, square) {
            Ok(outcome) => {
                self.selection = None;
                ClickOutcome::Moved(outcome)
            }
            Err(err) => {
                tracing::trace!(error = %err, "click rejected");
                if self.config.on_illegal == IllegalMovePolicy::ClearSelection {
                    self.selection = None;
                }
                ClickOutcome::Rejected {
                    selection: self.selection,
                }
            }
        }
    }

    /// Drops the current selection, if any.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// Restarts the game and clears the selection. The config is kept.
    pub fn reset(&mut self) {
        self.game.reset();
        self.selection = None;
    }

    /// Returns one cell per square, row 0 first.
    pub fn cells(&self) -> Vec<Cell> {
        let targets = match self.selection {
            Some(sel) if self.config.highlight_targets => {
                self.game.legal_destinations(sel.square)
            }
            _ => Vec::new(),
        };
        let selected = self.selection.map(|sel| sel.square);

        Square::all()
            .map(|square| Cell {
                square,
                piece: self.game.board().get(square),
                shade: if square.is_light() {
                    Shade::Light
                } else {
                    Shade::Dark
                },
                selected: selected == Some(square),
                target: targets.contains(&square),
            })
            .collect()
    }

    fn select(&mut self, square: Square, piece: Piece) -> ClickOutcome {
        let selection = Selection { square, piece };
        tracing::debug!(square = %square, piece = %piece, "selected");
        self.selection = Some(selection);
        ClickOutcome::Selected(selection)
    }
}
