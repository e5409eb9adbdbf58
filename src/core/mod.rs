//! Generic state machine building blocks.
//!
//! - `State` / `Stateful`: the single-current-state holder with enter/exit hooks
//! - `StateHistory`: ordered record of the transitions performed
//! - `Timeline`: the non-blocking delay primitive the game schedules on
//!
//! Nothing here knows about the game itself.

mod error;
mod history;
mod state;
mod timeline;

pub use error::StateError;
pub use history::{StateHistory, StateTransition};
pub use state::{State, Stateful};
pub use timeline::Timeline;
