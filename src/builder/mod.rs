//! Builder API for checked calculator construction.

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
