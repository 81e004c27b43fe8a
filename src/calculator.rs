//! Calculator shell that owns the current state.
//!
//! The engine functions are pure; `Calculator` is the imperative shell that
//! holds the latest state, swaps it on each key, and keeps the history.

use crate::config::CalculatorConfig;
use crate::core::{State, StateHistory, StateTransition};
use crate::display::DisplaySnapshot;
use crate::engine::{apply_key, CalculatorState, Key};
use chrono::Utc;

/// A running calculator session.
pub struct Calculator {
    current: CalculatorState,
    history: StateHistory<CalculatorState>,
    config: CalculatorConfig,
    errors: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator in the initial state with the default config.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Create a calculator without validating `config`; use
    /// [`CalculatorBuilder`](crate::CalculatorBuilder) for checked construction.
    pub(crate) fn with_config(config: CalculatorConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::new(),
        };
        Self {
            current: CalculatorState::initial(),
            history,
            config,
            errors: 0,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &CalculatorState {
        &self.current
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &StateHistory<CalculatorState> {
        &self.history
    }

    /// Number of evaluations that sent the calculator into the error state.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Render the current state at the configured precision.
    pub fn display(&self) -> DisplaySnapshot {
        DisplaySnapshot::with_precision(&self.current, self.config.significant_digits)
    }

    /// Apply one key and return the new state.
    pub fn press(&mut self, key: Key) -> &CalculatorState {
        let outcome = apply_key(&self.current, key);

        if let Some(failure) = &outcome.failure {
            self.errors += 1;
            tracing::info!(key = %key, error = %failure, "entered error state");
        }
        tracing::debug!(
            key = %key,
            mode = outcome.state.name(),
            entry = outcome.state.entry(),
            "key applied"
        );

        let from = std::mem::replace(&mut self.current, outcome.state);
        if self.config.record_history {
            self.history.push(StateTransition {
                key: key.label(),
                from,
                to: self.current.clone(),
                timestamp: Utc::now(),
            });
        }
        &self.current
    }

    /// Apply a button label. Returns `false`, leaving the state untouched,
    /// when the label is not a recognized key.
    pub fn press_label(&mut self, label: &str) -> bool {
        match label.parse::<Key>() {
            Ok(key) => {
                self.press(key);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "ignoring key");
                false
            }
        }
    }

    /// Apply labels in order, returning how many were recognized.
    pub fn press_all<'a, I>(&mut self, labels: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels
            .into_iter()
            .filter(|label| self.press_label(label))
            .count()
    }

    /// Clear-all.
    pub fn reset(&mut self) -> &CalculatorState {
        self.press(Key::Clear)
    }
}
