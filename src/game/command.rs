//! Side effects the engine asks its collaborators to perform.

use super::button::{Button, HighlightStyle};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single call into the display or audio collaborators.
///
/// The engine never touches the outside world itself; it queues commands in
/// the order they must be carried out and the shell drains them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Play the button's preloaded sound, fading out over its length
    PlaySound(Button),
    /// Add the style's class to the button
    Highlight { button: Button, style: HighlightStyle },
    /// Remove the style's class from the button
    ClearHighlight { button: Button, style: HighlightStyle },
    /// Play the horizontal shake on the board
    ShakeBoard,
    /// Write the two-digit counter text
    SetCounter(String),
    /// Switch the strict-mode indicators on or off
    SetStrictIndicator(bool),
    /// Show a transient message; the engine dismisses it after `duration`
    ShowMessage { text: String, duration: Duration },
    DismissMessage,
}
