//! Output fields handed to the presentation layer.

use crate::engine::{format_with_precision, CalculatorState, DEFAULT_SIGNIFICANT_DIGITS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three strings a renderer needs, derived from a [`CalculatorState`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Pending operator symbol, empty when none.
    pub operator: String,
    /// Formatted stored operand, empty unless a chain is active.
    pub stored_operand: String,
    /// Formatted current entry; `"Error"` in the error state.
    pub entry: String,
}

impl DisplaySnapshot {
    /// Derive the display fields at the default precision.
    ///
    /// ```rust
    /// use abacus::{handle_label, CalculatorState, DisplaySnapshot};
    ///
    /// let state = ["1", "2", "+"]
    ///     .iter()
    ///     .fold(CalculatorState::default(), |s, l| handle_label(&s, l));
    /// let display = DisplaySnapshot::from_state(&state);
    /// assert_eq!(display.operator, "+");
    /// assert_eq!(display.stored_operand, "12");
    /// assert_eq!(display.entry, "12");
    /// ```
    pub fn from_state(state: &CalculatorState) -> Self {
        Self::with_precision(state, DEFAULT_SIGNIFICANT_DIGITS)
    }

    pub fn with_precision(state: &CalculatorState, digits: usize) -> Self {
        Self {
            operator: state
                .pending_op()
                .map(|op| op.symbol().to_string())
                .unwrap_or_default(),
            stored_operand: state
                .stored_operand()
                .map(|operand| format_with_precision(operand, digits))
                .unwrap_or_default(),
            entry: format_with_precision(state.entry(), digits),
        }
    }
}

impl fmt::Display for DisplaySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operator.is_empty() {
            write!(f, "{}", self.entry)
        } else {
            write!(f, "{} {} | {}", self.stored_operand, self.operator, self.entry)
        }
    }
}
