//! Display collaborator.

use crate::game::Button;
use std::fmt;

/// Board element addressed by a class change.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Element {
    Board,
    Button(Button),
    /// The strict-mode switch, marked `off` while strict mode is disabled
    StrictToggle,
    /// Page background, marked `strict` while strict mode is enabled
    Overlay,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board => f.write_str("board"),
            Self::Button(button) => write!(f, "{}", button.element_id()),
            Self::StrictToggle => f.write_str("strict-toggle"),
            Self::Overlay => f.write_str("overlay"),
        }
    }
}

/// Where the game is drawn.
///
/// Elements are expected to exist for the whole game; implementations
/// that cannot find one should fail when they are built, not here.
pub trait Surface {
    fn add_class(&mut self, element: Element, class: &str);
    fn remove_class(&mut self, element: Element, class: &str);
    fn set_counter(&mut self, text: &str);
    /// Short horizontal shake of the board
    fn shake_board(&mut self);
    fn show_message(&mut self, text: &str);
    fn dismiss_message(&mut self);
}
