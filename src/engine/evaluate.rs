//! Binary operation evaluator.
//!
//! Pure functions over operand text. Results are the exact `f64` outcome of
//! the operation in canonical textual form; rounding is left to
//! [`format_display`](super::format_display).

use super::key::Operator;

/// Reasons an evaluation cannot produce a number.
///
/// The engine collapses every variant into the same error state; the
/// distinction exists for diagnostics and tests.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("Operand '{0}' is not a finite number")]
    InvalidOperand(String),

    #[error("Division by zero")]
    DivideByZero,

    #[error("Result of {lhs} {op} {rhs} is not finite")]
    NonFiniteResult { lhs: String, op: Operator, rhs: String },
}

/// Evaluate `a op b`.
///
/// # Example
///
/// ```rust
/// use abacus::{evaluate, EvalError, Operator};
///
/// assert_eq!(evaluate("12", Operator::Add, "7"), Ok("19".to_string()));
/// assert_eq!(evaluate("8", Operator::Divide, "0"), Err(EvalError::DivideByZero));
/// ```
pub fn evaluate(a: &str, op: Operator, b: &str) -> Result<String, EvalError> {
    let lhs = parse_operand(a)?;
    let rhs = parse_operand(b)?;

    let value = match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                tracing::trace!(lhs = a, "division by zero");
                return Err(EvalError::DivideByZero);
            }
            lhs / rhs
        }
    };

    if !value.is_finite() {
        tracing::trace!(lhs = a, op = %op, rhs = b, "non-finite result");
        return Err(EvalError::NonFiniteResult {
            lhs: a.to_string(),
            op,
            rhs: b.to_string(),
        });
    }

    Ok(number_text(value))
}

/// Divide an operand by 100.
pub fn percent(text: &str) -> Result<String, EvalError> {
    parse_operand(text).map(|value| number_text(value / 100.0))
}

/// Parse operand text into a finite number.
pub(crate) fn parse_operand(text: &str) -> Result<f64, EvalError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            tracing::trace!(operand = text, "invalid operand");
            Err(EvalError::InvalidOperand(text.to_string()))
        }
    }
}

/// Canonical text for a finite number: shortest round-trip digits, no
/// exponent, and `-0` written as `0`.
pub(crate) fn number_text(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
