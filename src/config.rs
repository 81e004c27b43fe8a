//! Calculator configuration.
//!
//! Configuration is validated with Stillwater's `Validation` so that every
//! problem is reported at once instead of stopping at the first.

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

use crate::engine::DEFAULT_SIGNIFICANT_DIGITS;

/// Transitions retained by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Largest meaningful display precision for an `f64`.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Problems found while validating a [`CalculatorConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("significant_digits must be between 1 and {max} (got {value})")]
    SignificantDigitsOutOfRange { value: usize, max: usize },

    #[error("history_limit must be greater than zero")]
    ZeroHistoryLimit,

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Tunable behavior of a [`Calculator`](crate::Calculator).
///
/// # Example
///
/// ```rust
/// use abacus::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json(r#"{ "significant_digits": 8 }"#).unwrap();
/// assert_eq!(config.significant_digits, 8);
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, Some(1000));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Significant digits shown for non-integer values.
    pub significant_digits: usize,
    /// Whether key transitions are recorded.
    pub record_history: bool,
    /// Keep at most this many transitions; unbounded when `None`.
    ///
    /// Defaults to [`DEFAULT_HISTORY_LIMIT`].
    pub history_limit: Option<usize>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            record_history: true,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl CalculatorConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check every rule, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let digits = if (1..=MAX_SIGNIFICANT_DIGITS).contains(&self.significant_digits) {
            Validation::success(())
        } else {
            Validation::fail(ConfigError::SignificantDigitsOutOfRange {
                value: self.significant_digits,
                max: MAX_SIGNIFICANT_DIGITS,
            })
        };

        let limit = match self.history_limit {
            Some(0) => Validation::fail(ConfigError::ZeroHistoryLimit),
            _ => Validation::success(()),
        };

        Validation::all_vec(vec![digits, limit]).map(|_| ())
    }

    /// [`validate`](Self::validate) flattened into a `Result`.
    pub fn check(&self) -> Result<(), Vec<ConfigError>> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}
