//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::calculator::Calculator;
use crate::config::CalculatorConfig;

/// Builder for constructing a [`Calculator`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use abacus::CalculatorBuilder;
///
/// let mut calc = CalculatorBuilder::new()
///     .significant_digits(6)
///     .history_limit(100)
///     .build()
///     .unwrap();
///
/// calc.press_all(["2", "÷", "3", "="]);
/// assert_eq!(calc.display().entry, "0.666667");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Significant digits shown for non-integer values.
    pub fn significant_digits(mut self, digits: usize) -> Self {
        self.config.significant_digits = digits;
        self
    }

    /// Enable or disable transition history.
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Keep at most `limit` transitions.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Build the calculator.
    /// Returns every configuration problem at once if validation fails.
    pub fn build(self) -> Result<Calculator, BuildError> {
        self.config.check().map_err(BuildError::InvalidConfig)?;
        Ok(Calculator::with_config(self.config))
    }
}
