//! State transition history tracking.
//!
//! Every transition performed by a [`Stateful`](super::Stateful) holder is
//! appended here, together with the payload that caused it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// `K` labels the states, `T` is the transition payload.
///
/// # Example
///
/// ```rust
/// use simon::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Some("Replay"),
///     to: "Play",
///     info: 0u8,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, "Play");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<K, T> {
    /// The state being left, `None` for the very first transition
    pub from: Option<K>,
    /// The state being entered
    pub to: K,
    /// Payload handed to the entered state
    pub info: T,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// `record` consumes the history and hands back the extended one, so a
/// history value is never changed behind a shared reference.
///
/// # Example
///
/// ```rust
/// use simon::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: None,
///         to: 'a',
///         info: (),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Some('a'),
///         to: 'b',
///         info: (),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec![&'a', &'b']);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<K, T> {
    transitions: Vec<StateTransition<K, T>>,
}

impl<K, T> Default for StateHistory<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> StateHistory<K, T> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<K, T>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Starts with the `from` state of the first transition when there is
    /// one, followed by the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&K> {
        let mut path = Vec::new();
        if let Some(from) = self.transitions.first().and_then(|t| t.from.as_ref()) {
            path.push(from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Wall-clock time between the first and last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<K, T>] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition<K, T>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
