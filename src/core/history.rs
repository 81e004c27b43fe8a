//! Key transition history tracking.
//!
//! Provides an optionally bounded record of the transitions a
//! calculator went through, one entry per accepted key.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single key-driven transition.
///
/// # Example
///
/// ```rust
/// use abacus::core::StateTransition;
/// use abacus::{handle_key, CalculatorState, Key};
/// use chrono::Utc;
///
/// let from = CalculatorState::default();
/// let to = handle_key(&from, Key::Digit(7));
///
/// let transition = StateTransition {
///     key: "7".to_string(),
///     from,
///     to,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to.entry(), "7");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Canonical label of the key that caused the transition
    pub key: String,
    /// The state before the key was applied
    pub from: S,
    /// The state after the key was applied
    pub to: S,
    /// When the key was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of transitions.
///
/// [`record`](Self::record) returns a new history with the transition
/// appended and leaves the original untouched; [`push`](Self::push) appends
/// in place. When a limit is set, the oldest transitions are dropped so that
/// at most `limit` remain.
///
/// # Example
///
/// ```rust
/// use abacus::core::{StateHistory, StateTransition};
/// use abacus::{handle_key, CalculatorState, Key};
/// use chrono::Utc;
///
/// let start = CalculatorState::default();
/// let one = handle_key(&start, Key::Digit(1));
/// let two = handle_key(&one, Key::Digit(2));
///
/// let history = StateHistory::new()
///     .record(StateTransition { key: "1".into(), from: start, to: one.clone(), timestamp: Utc::now() })
///     .record(StateTransition { key: "2".into(), from: one, to: two, timestamp: Utc::now() });
///
/// assert_eq!(history.keys(), vec!["1", "2"]);
/// assert_eq!(history.last().map(|t| t.to.entry()), Some("12"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create a new empty history that keeps at most `limit` transitions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// Copies the retained transitions; use [`push`](Self::push) when the
    /// old history is not needed.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// Append a transition in place, evicting the oldest beyond the limit.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push_back(transition);
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }

    /// Duration between the oldest and newest retained transitions.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition<S>> {
        &self.transitions
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Labels of the retained keys, oldest first.
    pub fn keys(&self) -> Vec<&str> {
        self.transitions.iter().map(|t| t.key.as_str()).collect()
    }
}
