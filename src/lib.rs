//! Abacus: a pure functional four-function calculator engine
//!
//! Abacus follows the "pure core, imperative shell" philosophy. Every key
//! press is a pure transition from one immutable [`CalculatorState`] to the
//! next; the [`Calculator`] shell only holds the latest state and its history.
//!
//! # Core Concepts
//!
//! - **Keys**: digits, decimal point, the four operators, equals, clear-all,
//!   backspace, sign toggle and percent
//! - **State**: one atomic record of entry text, pending operation and the
//!   awaiting-new-entry flag
//! - **Chaining**: operators fold strictly left to right, one pending at a time
//! - **Error state**: division by zero or a non-finite result shows `Error`
//!   until a digit, decimal point or clear-all
//!
//! # Example
//!
//! ```rust
//! use abacus::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.press_all(["5", "×", "6", "−", "4", "="]);
//! assert_eq!(calc.display().entry, "26");
//!
//! calc.press_all(["8", "÷", "0", "="]);
//! assert_eq!(calc.display().entry, "Error");
//!
//! calc.press_label("AC");
//! assert_eq!(calc.display().entry, "0");
//! ```

pub mod builder;
pub mod calculator;
pub mod config;
pub mod core;
pub mod display;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use calculator::Calculator;
pub use config::{CalculatorConfig, ConfigError};
pub use display::DisplaySnapshot;
pub use engine::{
    evaluate, format_display, format_with_precision, handle_key, handle_label, CalculatorState,
    EvalError, Key, KeyError, Operator, StateError,
};
