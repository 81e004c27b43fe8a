//! Key events and operator symbols.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four binary operators, in canonical form.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Canonical ASCII symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Normalize a canonical symbol or a display synonym (`−`, `×`, `÷`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "×" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single key press.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Digit `0`..=`9`.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    ToggleSign,
    Percent,
}

/// Label used by the presentation layer for the backspace key.
pub const BACKSPACE_LABEL: &str = "⌫";

/// Label used by the presentation layer for the clear-all key.
pub const CLEAR_LABEL: &str = "AC";

/// Label used by the presentation layer for the sign-toggle key.
pub const TOGGLE_SIGN_LABEL: &str = "±";

/// Errors raised when a key label cannot be interpreted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeyError {
    #[error("Unrecognized key label '{0}'")]
    Unrecognized(String),
}

impl Key {
    /// Interpret a button label, returning `None` for anything outside the
    /// fixed key set.
    ///
    /// ```rust
    /// use abacus::{Key, Operator};
    ///
    /// assert_eq!(Key::from_label("×"), Some(Key::Operator(Operator::Multiply)));
    /// assert_eq!(Key::from_label("AC"), Some(Key::Clear));
    /// assert_eq!(Key::from_label("sqrt"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        if let Some(op) = Operator::from_symbol(label) {
            return Some(Self::Operator(op));
        }
        match label {
            "." => Some(Self::Decimal),
            "=" => Some(Self::Equals),
            CLEAR_LABEL => Some(Self::Clear),
            BACKSPACE_LABEL => Some(Self::Backspace),
            TOGGLE_SIGN_LABEL => Some(Self::ToggleSign),
            "%" => Some(Self::Percent),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).map(|d| Self::Digit(d as u8)),
                    _ => None,
                }
            }
        }
    }

    /// Map a typed character onto a key.
    ///
    /// Only digits, the operator symbols (including synonyms), `.`, `=` and
    /// `%` have keyboard equivalents.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            '%' => Some(Self::Percent),
            _ => {
                let mut buf = [0u8; 4];
                Operator::from_symbol(c.encode_utf8(&mut buf)).map(Self::Operator)
            }
        }
    }

    /// Canonical label for this key, as recorded in history.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => CLEAR_LABEL.to_string(),
            Self::Backspace => BACKSPACE_LABEL.to_string(),
            Self::ToggleSign => TOGGLE_SIGN_LABEL.to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| KeyError::Unrecognized(s.to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse_from_single_characters() {
        for d in 0..=9u8 {
            assert_eq!(Key::from_label(&d.to_string()), Some(Key::Digit(d)));
        }
        assert_eq!(Key::from_label("10"), None);
        assert_eq!(Key::from_label(""), None);
    }

    #[test]
    fn operator_synonyms_normalize() {
        assert_eq!(Key::from_label("−"), Some(Key::Operator(Operator::Subtract)));
        assert_eq!(Key::from_label("×"), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_label("÷"), Some(Key::Operator(Operator::Divide)));
        assert_eq!(Key::from_label("+"), Some(Key::Operator(Operator::Add)));
    }

    #[test]
    fn function_keys_parse() {
        assert_eq!(Key::from_label("AC"), Some(Key::Clear));
        assert_eq!(Key::from_label("⌫"), Some(Key::Backspace));
        assert_eq!(Key::from_label("±"), Some(Key::ToggleSign));
        assert_eq!(Key::from_label("%"), Some(Key::Percent));
        assert_eq!(Key::from_label("="), Some(Key::Equals));
        assert_eq!(Key::from_label("."), Some(Key::Decimal));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(Key::from_label("C"), None);
        assert_eq!(
            "MR".parse::<Key>(),
            Err(KeyError::Unrecognized("MR".to_string()))
        );
    }

    #[test]
    fn keyboard_chars_cover_digits_and_operators_only() {
        assert_eq!(Key::from_char('7'), Some(Key::Digit(7)));
        assert_eq!(Key::from_char('÷'), Some(Key::Operator(Operator::Divide)));
        assert_eq!(Key::from_char('-'), Some(Key::Operator(Operator::Subtract)));
        assert_eq!(Key::from_char('%'), Some(Key::Percent));
        assert_eq!(Key::from_char('c'), None);
        assert_eq!(Key::from_char('\n'), None);
    }

    #[test]
    fn labels_roundtrip_through_parsing() {
        let keys = [
            Key::Digit(4),
            Key::Decimal,
            Key::Operator(Operator::Multiply),
            Key::Equals,
            Key::Clear,
            Key::Backspace,
            Key::ToggleSign,
            Key::Percent,
        ];
        for key in keys {
            assert_eq!(key.label().parse::<Key>(), Ok(key));
        }
    }
}
