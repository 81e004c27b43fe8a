//! Calculator engine: keys, the state record, and pure transitions.
//!
//! The engine owns no mutable state. [`handle_key`] takes a state and a key
//! and returns the next state; the evaluator and display formatter are plain
//! functions that the presentation layer may also call directly.

mod evaluate;
mod format;
mod key;
mod state;
mod transition;

pub use evaluate::{evaluate, percent, EvalError};
pub use format::{format_display, format_with_precision, DEFAULT_SIGNIFICANT_DIGITS};
pub use key::{Key, KeyError, Operator, BACKSPACE_LABEL, CLEAR_LABEL, TOGGLE_SIGN_LABEL};
pub use state::{CalculatorState, PendingOperation, StateError, ERROR_MARKER, INITIAL_ENTRY};
pub use transition::{apply_key, handle_key, handle_label, Outcome};
