//! The calculator's atomic state record.

use super::key::Operator;
use crate::core::State;
use serde::{Deserialize, Serialize};

/// Entry text shown while in the error state.
pub const ERROR_MARKER: &str = "Error";

/// Entry text of a freshly cleared calculator.
pub const INITIAL_ENTRY: &str = "0";

/// Left operand and operator captured when an operator key is pressed.
///
/// Holding both in one value keeps the stored operand and the pending
/// operator set and cleared together.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PendingOperation {
    pub operand: String,
    pub op: Operator,
}

/// Complete engine state.
///
/// Every key press produces a whole new record; fields are never updated
/// one at a time from outside the engine.
///
/// Invariants:
/// - `entry` is never empty. It is either [`ERROR_MARKER`] or an optional
///   leading `-`, digits, and at most one `.`.
/// - In the error state there is no pending operation and the next digit
///   starts a fresh entry.
///
/// Deserialization checks these and fails with [`StateError`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawCalculatorState")]
pub struct CalculatorState {
    entry: String,
    pending: Option<PendingOperation>,
    awaiting_new_entry: bool,
}

/// Reasons a deserialized state is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StateError {
    #[error("entry must not be empty")]
    EmptyEntry,

    #[error("entry '{0}' is not a number")]
    MalformedEntry(String),

    #[error("stored operand '{0}' is not a number")]
    MalformedOperand(String),

    #[error("error state cannot carry a pending operation")]
    PendingInError,

    #[error("error state must await a new entry")]
    ErrorNotAwaiting,
}

/// Unchecked wire form of [`CalculatorState`].
#[derive(Deserialize)]
struct RawCalculatorState {
    entry: String,
    pending: Option<PendingOperation>,
    awaiting_new_entry: bool,
}

impl TryFrom<RawCalculatorState> for CalculatorState {
    type Error = StateError;

    fn try_from(raw: RawCalculatorState) -> Result<Self, Self::Error> {
        if raw.entry.is_empty() {
            return Err(StateError::EmptyEntry);
        }
        if raw.entry == ERROR_MARKER {
            if raw.pending.is_some() {
                return Err(StateError::PendingInError);
            }
            if !raw.awaiting_new_entry {
                return Err(StateError::ErrorNotAwaiting);
            }
        } else if !is_number_text(&raw.entry) {
            return Err(StateError::MalformedEntry(raw.entry));
        }
        if let Some(pending) = &raw.pending {
            if !is_number_text(&pending.operand) {
                return Err(StateError::MalformedOperand(pending.operand.clone()));
            }
        }

        Ok(Self::new(raw.entry, raw.pending, raw.awaiting_new_entry))
    }
}

/// Optional leading `-`, then digits with at most one `.`, at least one digit.
fn is_number_text(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    body.chars().any(|c| c.is_ascii_digit())
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
        && body.matches('.').count() <= 1
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}

impl CalculatorState {
    /// `{entry: "0", no pending operation, awaiting new entry}`.
    pub fn initial() -> Self {
        Self {
            entry: INITIAL_ENTRY.to_string(),
            pending: None,
            awaiting_new_entry: true,
        }
    }

    /// The sticky error state.
    pub(crate) fn error() -> Self {
        Self {
            entry: ERROR_MARKER.to_string(),
            pending: None,
            awaiting_new_entry: true,
        }
    }

    pub(crate) fn new(
        entry: String,
        pending: Option<PendingOperation>,
        awaiting_new_entry: bool,
    ) -> Self {
        Self {
            entry,
            pending,
            awaiting_new_entry,
        }
    }

    /// Same chain, new entry text and flag.
    pub(crate) fn with_entry(&self, entry: String, awaiting_new_entry: bool) -> Self {
        Self {
            entry,
            pending: self.pending.clone(),
            awaiting_new_entry,
        }
    }

    /// Raw text of the value being typed or displayed.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Left operand of the active chain, if any.
    pub fn stored_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    /// Operator awaiting its right operand, if any.
    pub fn pending_op(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.op)
    }

    /// Whether the next digit or decimal point starts a fresh entry.
    pub fn awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }
}

impl State for CalculatorState {
    fn name(&self) -> &str {
        if self.is_error() {
            "Error"
        } else {
            "Normal"
        }
    }

    fn is_error(&self) -> bool {
        self.entry == ERROR_MARKER
    }
}
