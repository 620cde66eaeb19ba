//! WebAssembly bindings for the chess board.
//!
//! This crate exposes the click-to-move board to JavaScript and can draw it
//! into a page itself.
//!
//! # Usage
//!
//! ```javascript
//! import init, { ChessBoard } from 'chessboard-wasm';
//!
//! await init();
//!
//! const board = new ChessBoard({ onIllegal: "keepSelection", logLevel: "debug" });
//! board.mount("chessboard");
//!
//! // Or drive it by hand:
//! board.click(6, 4);   // "selected"
//! board.click(4, 4);   // "moved"
//! console.log(board.sideToMove()); // "black"
//! ```

mod render;

use chessboard_core::{Piece, Square};
use chessboard_engine::{Controller, ControllerConfig};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Options accepted by the `ChessBoard` constructor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardOptions {
    #[serde(flatten)]
    controller: ControllerConfig,
    #[serde(default)]
    log_level: Option<String>,
}

/// One square as seen from JavaScript.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CellView {
    row: u8,
    col: u8,
    piece: Option<String>,
    glyph: Option<String>,
    class_name: String,
}

/// A chess board that can be clicked on from JavaScript.
#[wasm_bindgen]
pub struct ChessBoard {
    controller: Rc<RefCell<Controller>>,
    root: Option<Element>,
}

#[wasm_bindgen]
impl ChessBoard {
    /// Creates a board in the starting position.
    ///
    /// `options` may be omitted. Recognized fields are `onIllegal`
    /// (`"clearSelection"` or `"keepSelection"`), `highlightTargets` and
    /// `logLevel`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<ChessBoard, JsError> {
        let options: BoardOptions = if options.is_undefined() || options.is_null() {
            BoardOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
        };

        if let Some(level) = options.log_level.as_deref() {
            let filter = log::LevelFilter::from_str(level)
                .map_err(|_| JsError::new(&format!("invalid log level: {}", level)))?;
            // tracing events reach console_log as log records.
            log::set_max_level(filter);
        }

        Ok(ChessBoard::with_config(options.controller))
    }

    /// Handles a click on (row, col) and returns what happened:
    /// `"ignored"`, `"selected"`, `"deselected"`, `"moved"` or `"rejected"`.
    ///
    /// Coordinates off the board are ignored.
    pub fn click(&mut self, row: i32, col: i32) -> String {
        let Ok(square) = Square::try_new(row, col) else {
            tracing::warn!(row, col, "click outside the board");
            return "ignored".to_string();
        };
        let outcome = self.controller.borrow_mut().click(square);
        if outcome.needs_redraw() {
            self.redraw();
        }
        outcome.name().to_string()
    }

    /// Returns the character code of the piece on (row, col), e.g. `"P"` for
    /// a white pawn or `"k"` for the black king, or null if empty.
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, row: i32, col: i32) -> Option<String> {
        self.piece(row, col).map(|p| p.to_char().to_string())
    }

    /// Returns the Unicode symbol of the piece on (row, col), or null.
    #[wasm_bindgen(js_name = glyphAt)]
    pub fn glyph_at(&self, row: i32, col: i32) -> Option<String> {
        self.piece(row, col).map(|p| p.glyph().to_string())
    }

    /// Returns the side to move ("white" or "black").
    #[wasm_bindgen(js_name = sideToMove)]
    pub fn side_to_move(&self) -> String {
        self.controller.borrow().game().side_to_move().name().to_string()
    }

    /// Returns `[row, col]` of the selected square, or null.
    pub fn selected(&self) -> Option<Vec<u8>> {
        self.controller
            .borrow()
            .selection()
            .map(|sel| vec![sel.square.row(), sel.square.col()])
    }

    /// Drops the current selection.
    pub fn deselect(&mut self) {
        self.controller.borrow_mut().deselect();
        self.redraw();
    }

    /// Returns the squares the piece on (row, col) may move to this turn, as
    /// an array of `[row, col]` pairs.
    #[wasm_bindgen(js_name = legalTargets)]
    pub fn legal_targets(&self, row: i32, col: i32) -> Result<JsValue, JsError> {
        let targets: Vec<[u8; 2]> = self.targets(row, col);
        serde_wasm_bindgen::to_value(&targets).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the piece placement, row 0 first
    /// (e.g. `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`).
    #[wasm_bindgen(js_name = toPlacement)]
    pub fn to_placement(&self) -> String {
        self.controller.borrow().game().board().to_placement()
    }

    /// Returns one object per square, row 0 first, with `row`, `col`,
    /// `piece`, `glyph` and `className`.
    pub fn cells(&self) -> Result<JsValue, JsError> {
        let views: Vec<CellView> = self
            .controller
            .borrow()
            .cells()
            .iter()
            .map(|cell| CellView {
                row: cell.square.row(),
                col: cell.square.col(),
                piece: cell.piece.map(|p| p.to_char().to_string()),
                glyph: cell.piece.map(|p| p.glyph().to_string()),
                class_name: render::class_name(cell),
            })
            .collect();
        serde_wasm_bindgen::to_value(&views).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Restarts the game.
    pub fn reset(&mut self) {
        self.controller.borrow_mut().reset();
        self.redraw();
    }

    /// Draws the board into the element with the given id and handles clicks
    /// on it from then on.
    pub fn mount(&mut self, element_id: &str) -> Result<(), JsError> {
        if self.root.is_some() {
            return Err(JsError::new("board is already mounted"));
        }
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsError::new("no document available"))?;
        let root = document
            .get_element_by_id(element_id)
            .ok_or_else(|| JsError::new(&format!("no element with id '{}'", element_id)))?;

        render::attach(&self.controller, &root).map_err(render::js_error)?;
        render::draw(&self.controller.borrow(), &root).map_err(render::js_error)?;
        tracing::info!(element_id, "board mounted");
        self.root = Some(root);
        Ok(())
    }
}

impl ChessBoard {
    /// Creates a board from an already parsed config.
    pub fn with_config(config: ControllerConfig) -> Self {
        ChessBoard {
            controller: Rc::new(RefCell::new(Controller::new(config))),
            root: None,
        }
    }

    fn piece(&self, row: i32, col: i32) -> Option<Piece> {
        let square = Square::try_new(row, col).ok()?;
        self.controller.borrow().game().board().get(square)
    }

    fn targets(&self, row: i32, col: i32) -> Vec<[u8; 2]> {
        let Ok(square) = Square::try_new(row, col) else {
            return Vec::new();
        };
        self.controller
            .borrow()
            .game()
            .legal_destinations(square)
            .into_iter()
            .map(|sq| [sq.row(), sq.col()])
            .collect()
    }

    fn redraw(&self) {
        if let Some(root) = &self.root {
            if let Err(err) = render::draw(&self.controller.borrow(), root) {
                tracing::error!(error = ?err, "redraw failed");
            }
        }
    }
}

/// Initialization function called when WASM module loads.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A logger may already be installed when several modules share a page.
    console_log::init_with_level(log::Level::Info).ok();
}
