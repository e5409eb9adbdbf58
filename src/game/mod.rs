//! The Simon game itself.
//!
//! [`SimonGame`] owns a [`GameModel`] (the step sequence and everything the
//! states share) and a [`Stateful`](crate::core::Stateful) holding the
//! active [`Phase`]:
//!
//! - [`ReplayState`] grows the sequence and plays it back, or reacts to a
//!   failed round according to strict mode
//! - [`PlayState`] checks the player's presses against the sequence
//!
//! The engine is deterministic. Time only moves when the caller passes a
//! later `now`, and all output is a queue of [`Command`]s.

mod button;
mod command;
mod engine;
mod model;
mod phase;
mod play;
mod replay;
mod steps;

pub use button::{Button, HighlightStyle, ParseButtonError, PlayerMove};
pub use command::Command;
pub use engine::SimonGame;
pub use model::GameModel;
pub use phase::{Phase, PhaseKind};
pub use play::PlayState;
pub use replay::{ReplayState, WIN_MESSAGE};
pub use steps::{RandomSteps, StepSource};
