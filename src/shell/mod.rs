//! Imperative shell around the game engine.
//!
//! The engine only queues [`Command`](crate::game::Command)s. This module
//! defines the collaborators that carry them out and the async [`Driver`]
//! that feeds the engine real time and player input.

mod audio;
mod driver;
mod input;
mod surface;
pub mod terminal;

pub use audio::{AudioBackend, AudioError, SoundBank};
pub use driver::Driver;
pub use input::{forward_inputs, parse_line, Input, InputError};
pub use surface::{Element, Surface};
