//! Board buttons and transition reasons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four colored buttons on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Red,
    Yellow,
    Blue,
    Green,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Red, Button::Yellow, Button::Blue, Button::Green];

    /// Lowercase color name, also the key sounds are stored under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    /// Identifier of the button's element on the board, e.g. `btn-red`.
    pub fn element_id(&self) -> String {
        format!("btn-{}", self.name())
    }

    /// Inverse of [`Button::element_id`].
    pub fn from_element_id(id: &str) -> Option<Self> {
        id.strip_prefix("btn-").and_then(|name| name.parse().ok())
    }

    /// Map a draw in `0..4` to a button.
    ///
    /// Out of range values fold onto green.
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => Self::Yellow,
            1 => Self::Red,
            2 => Self::Blue,
            _ => Self::Green,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A string that names no button.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown button '{0}', expected red, yellow, blue or green")]
pub struct ParseButtonError(pub String);

impl FromStr for Button {
    type Err = ParseButtonError;

    /// Accepts the color name, its first letter or the element id, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = lowered.strip_prefix("btn-").unwrap_or(&lowered);
        match name {
            "red" | "r" => Ok(Self::Red),
            "yellow" | "y" => Ok(Self::Yellow),
            "blue" | "b" => Ok(Self::Blue),
            "green" | "g" => Ok(Self::Green),
            _ => Err(ParseButtonError(s.to_string())),
        }
    }
}

/// Why a state was entered.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PlayerMove {
    /// The player reproduced the whole sequence
    Right,
    /// The player pressed a button out of sequence
    Wrong,
    /// A fresh game, or a fresh round of input
    Start,
}

/// Visual style applied while a button is lit.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum HighlightStyle {
    Highlighted,
    Wrong,
}

impl HighlightStyle {
    /// Class toggled on the button element.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Highlighted => "highlighted",
            Self::Wrong => "wrong",
        }
    }
}
