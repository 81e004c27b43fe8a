//! Core state-tracking types.
//!
//! This module contains the pure building blocks shared by the engine and
//! the calculator shell:
//! - State inspection via the `State` trait
//! - Immutable, optionally bounded transition history
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
