//! DOM drawing and click wiring.
//!
//! Each square becomes a `<div class="square white|black">` carrying
//! `data-row` / `data-col` and the piece symbol. A single listener on the
//! board element maps clicks back to squares.

use chessboard_core::Square;
use chessboard_engine::{Cell, Controller, Shade};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

/// Returns the CSS classes for a cell.
pub(crate) fn class_name(cell: &Cell) -> String {
    let mut class = String::from(match cell.shade {
        Shade::Light => "square white",
        Shade::Dark => "square black",
    });
    if cell.selected {
        class.push_str(" selected");
    }
    if cell.target {
        class.push_str(" target");
    }
    class
}

/// Replaces the children of `root` with one element per square.
pub(crate) fn draw(controller: &Controller, root: &Element) -> Result<(), JsValue> {
    let document = root
        .owner_document()
        .ok_or_else(|| JsValue::from_str("board element is not in a document"))?;

    root.set_inner_html("");
    for cell in controller.cells() {
        let div = document.create_element("div")?;
        div.set_class_name(&class_name(&cell));
        div.set_attribute("data-row", &cell.square.row().to_string())?;
        div.set_attribute("data-col", &cell.square.col().to_string())?;
        if let Some(piece) = cell.piece {
            div.set_text_content(Some(&piece.glyph().to_string()));
        }
        root.append_child(&div)?;
    }
    Ok(())
}

/// Installs the click listener on `root`. The listener lives as long as the
/// page.
pub(crate) fn attach(controller: &Rc<RefCell<Controller>>, root: &Element) -> Result<(), JsValue> {
    let controller = Rc::clone(controller);
    let board = root.clone();

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(square) = clicked_square(&event) else {
            return;
        };
        let outcome = controller.borrow_mut().click(square);
        tracing::debug!(square = %square, outcome = outcome.name(), "board clicked");
        if outcome.needs_redraw() {
            if let Err(err) = draw(&controller.borrow(), &board) {
                tracing::error!(error = ?err, "redraw failed");
            }
        }
    });

    root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Finds the square element under a click and reads its coordinates.
fn clicked_square(event: &Event) -> Option<Square> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let cell = target.closest(".square").ok()??;
    let row = cell.get_attribute("data-row")?.parse().ok()?;
    let col = cell.get_attribute("data-col")?.parse().ok()?;
    Square::try_new(row, col).ok()
}

pub(crate) fn js_error(value: JsValue) -> JsError {
    JsError::new(&format!("{:?}", value))
}
