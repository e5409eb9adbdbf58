//! Simon: the memory game, as a deterministic state machine.
//!
//! The game shows a growing sequence of colored button flashes; the player
//! repeats it; a correct round grows the sequence, a wrong press either
//! replays it or, in strict mode, starts over.
//!
//! The crate follows a "pure core, imperative shell" split:
//!
//! - [`core`]: a generic state holder with enter/exit hooks, transition
//!   history and a non-blocking delay primitive
//! - [`game`]: the Simon engine. It never blocks and never touches I/O;
//!   time is passed in and side effects come out as [`game::Command`]s
//! - [`shell`]: collaborator traits for display and audio, plus a tokio
//!   driver that runs the engine in real time
//! - [`config`]: timing constants and sound sources, loaded from TOML or JSON
//!
//! # Example
//!
//! ```rust
//! use simon::config::GameConfig;
//! use simon::game::{Button, PhaseKind, PlayerMove, SimonGame};
//! use std::time::Duration;
//!
//! let ms = Duration::from_millis;
//! let mut game = SimonGame::with_step_source(&GameConfig::default(), || Button::Green)?;
//!
//! game.advance(ms(1150));
//! assert_eq!(game.phase(), Some(PhaseKind::Play));
//!
//! // Wrong press: the sequence is kept and replayed.
//! game.press(Button::Red, ms(1200));
//! game.advance(ms(1650));
//! let last = game.history().last().unwrap();
//! assert_eq!((last.to, last.info), (PhaseKind::Replay, PlayerMove::Wrong));
//! assert_eq!(game.step_count(), 1);
//! # Ok::<(), simon::config::ConfigError>(())
//! ```

pub mod config;
pub mod core;
pub mod game;
pub mod shell;

// Re-export commonly used types
pub use config::GameConfig;
pub use core::{State, StateError, StateHistory, StateTransition, Stateful};
pub use game::{Button, Command, PlayerMove, SimonGame};
