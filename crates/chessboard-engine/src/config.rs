//! Controller configuration.
//!
//! Deserialized from a plain JavaScript object by the browser bindings, so
//! field names are camelCase and every field has a default.

use serde::Deserialize;

/// What happens to the current selection when a move attempt is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IllegalMovePolicy {
    /// Keep the piece selected until a legal move or an explicit deselect.
    KeepSelection,
    /// Drop the selection on every rejected attempt.
    #[default]
    ClearSelection,
}

/// Click handling options. Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControllerConfig {
    /// What a rejected move attempt does to the selection.
    pub on_illegal: IllegalMovePolicy,
    /// Mark the legal destinations of the selected piece when rendering.
    pub highlight_targets: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            on_illegal: IllegalMovePolicy::ClearSelection,
            highlight_targets: false,
        }
    }
}
