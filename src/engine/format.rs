//! Display formatting for entry and operand text.

use super::evaluate::number_text;
use super::state::ERROR_MARKER;

/// Significant digits kept for non-integer values.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 12;

/// Format a value for display with [`DEFAULT_SIGNIFICANT_DIGITS`].
///
/// ```rust
/// use abacus::format_display;
///
/// assert_eq!(format_display("0.30000000000000004"), "0.3");
/// assert_eq!(format_display("19"), "19");
/// assert_eq!(format_display(""), "0");
/// assert_eq!(format_display("Error"), "Error");
/// ```
pub fn format_display(value: &str) -> String {
    format_with_precision(value, DEFAULT_SIGNIFICANT_DIGITS)
}

/// Format a value for display, rounding non-integers to `digits`
/// significant digits and dropping insignificant trailing zeros.
///
/// Never touches engine state.
pub fn format_with_precision(value: &str, digits: usize) -> String {
    if value == ERROR_MARKER {
        return ERROR_MARKER.to_string();
    }
    if value.is_empty() {
        return "0".to_string();
    }

    let number = match value.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => return ERROR_MARKER.to_string(),
    };

    if number.fract() == 0.0 {
        return number_text(number);
    }

    // Scientific notation with `digits - 1` fraction digits rounds to
    // exactly `digits` significant digits.
    let precision = digits.max(1) - 1;
    let rounded = format!("{:.*e}", precision, number)
        .parse::<f64>()
        .unwrap_or(number);
    number_text(rounded)
}
