//! The `State` trait and the `Stateful` holder.
//!
//! A `Stateful` owns exactly one active state value. Transitions run the
//! old state's `exit` hook to completion before the new state's `enter` hook
//! starts, and every transition is recorded in a [`StateHistory`].

use super::error::StateError;
use super::history::{StateHistory, StateTransition};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A state driven by a [`Stateful`] holder.
///
/// `T` is the payload handed to `enter`, describing why the transition
/// happened. Hooks receive the shared context mutably; they must not try to
/// transition on their own. Instead they leave a request in the context and
/// let the owner apply it once the hook has returned.
///
/// # Example
///
/// ```rust
/// use simon::core::{State, Stateful};
///
/// #[derive(Debug)]
/// struct Idle;
///
/// impl State<u8> for Idle {
///     type Context = Vec<String>;
///     type Kind = ();
///
///     fn kind(&self) -> Self::Kind {}
///
///     fn enter(&mut self, log: &mut Vec<String>, info: u8) {
///         log.push(format!("enter {info}"));
///     }
///
///     fn exit(&mut self, log: &mut Vec<String>) {
///         log.push("exit".to_string());
///     }
/// }
///
/// let mut log = Vec::new();
/// let mut machine = Stateful::new();
/// machine.set_state(&mut log, Idle, 1);
/// machine.set_state(&mut log, Idle, 2);
/// assert_eq!(log, vec!["enter 1", "exit", "enter 2"]);
/// ```
pub trait State<T> {
    /// Shared data the hooks operate on.
    type Context;

    /// Cheap label identifying which state this is, used for history.
    type Kind: Copy + PartialEq + Debug + Serialize + DeserializeOwned;

    fn kind(&self) -> Self::Kind;

    /// Called when this state becomes the current one.
    fn enter(&mut self, ctx: &mut Self::Context, info: T);

    /// Called when this state stops being the current one.
    fn exit(&mut self, ctx: &mut Self::Context);
}

/// Holder of the single current state.
pub struct Stateful<S: State<T>, T> {
    current: Option<S>,
    history: StateHistory<S::Kind, T>,
}

impl<S: State<T>, T: Clone + Debug> Stateful<S, T> {
    /// Create a holder with no current state.
    pub fn new() -> Self {
        Self {
            current: None,
            history: StateHistory::new(),
        }
    }

    /// The current state.
    ///
    /// Fails with [`StateError::NotStarted`] if no transition ever happened.
    pub fn state(&self) -> Result<&S, StateError> {
        self.current.as_ref().ok_or(StateError::NotStarted)
    }

    pub fn state_mut(&mut self) -> Result<&mut S, StateError> {
        self.current.as_mut().ok_or(StateError::NotStarted)
    }

    /// Kind of the current state, if any.
    pub fn kind(&self) -> Option<S::Kind> {
        self.current.as_ref().map(|state| state.kind())
    }

    /// Replace the current state.
    ///
    /// Exits the current state (if any), swaps in `next` and enters it with
    /// `info`. Calling this from inside a hook of the same holder is not
    /// possible by construction: the holder is borrowed for the whole swap.
    pub fn set_state(&mut self, ctx: &mut S::Context, next: S, info: T) {
        let from = match self.current.as_mut() {
            Some(current) => {
                current.exit(ctx);
                Some(current.kind())
            }
            None => None,
        };

        let to = next.kind();
        tracing::debug!(?from, ?to, ?info, "state transition");

        self.history = std::mem::take(&mut self.history).record(StateTransition {
            from,
            to,
            info: info.clone(),
            timestamp: Utc::now(),
        });

        self.current.insert(next).enter(ctx, info);
    }

    /// All transitions performed so far.
    pub fn history(&self) -> &StateHistory<S::Kind, T> {
        &self.history
    }

    pub fn transition_count(&self) -> usize {
        self.history.len()
    }

    /// Forget recorded transitions; the current state is kept.
    pub fn clear_history(&mut self) {
        self.history = StateHistory::new();
    }
}

impl<S: State<T>, T: Clone + Debug> Default for Stateful<S, T> {
    fn default() -> Self {
        Self::new()
    }
}
