//! Pure key transition function.
//!
//! `handle_key` maps a state and a key to the next state. It never fails:
//! evaluation errors become the sticky error state.

use super::evaluate::{evaluate, percent, EvalError};
use super::key::{Key, Operator};
use super::state::{CalculatorState, PendingOperation, INITIAL_ENTRY};
use crate::core::State;

/// Result of applying one key, with the evaluation failure (if any) that
/// forced the error state.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub state: CalculatorState,
    pub failure: Option<EvalError>,
}

impl Outcome {
    fn ok(state: CalculatorState) -> Self {
        Self {
            state,
            failure: None,
        }
    }

    fn failed(failure: EvalError) -> Self {
        Self {
            state: CalculatorState::error(),
            failure: Some(failure),
        }
    }
}

/// Apply `key` to `state`, producing the next state.
///
/// # Example
///
/// ```rust
/// use abacus::{handle_key, CalculatorState, Key, Operator};
///
/// let keys = [
///     Key::Digit(1),
///     Key::Digit(2),
///     Key::Operator(Operator::Add),
///     Key::Digit(7),
///     Key::Equals,
/// ];
/// let state = keys
///     .into_iter()
///     .fold(CalculatorState::default(), |s, k| handle_key(&s, k));
/// assert_eq!(state.entry(), "19");
/// ```
pub fn handle_key(state: &CalculatorState, key: Key) -> CalculatorState {
    apply_key(state, key).state
}

/// Apply a button label. Unrecognized labels leave the state unchanged.
pub fn handle_label(state: &CalculatorState, label: &str) -> CalculatorState {
    match Key::from_label(label) {
        Some(key) => handle_key(state, key),
        None => state.clone(),
    }
}

/// Like [`handle_key`], but also reports why an error state was entered.
pub fn apply_key(state: &CalculatorState, key: Key) -> Outcome {
    if state.is_error() {
        return apply_in_error(state, key);
    }

    match key {
        Key::Digit(digit) => Outcome::ok(press_digit(state, digit)),
        Key::Decimal => Outcome::ok(press_decimal(state)),
        Key::Backspace => Outcome::ok(backspace(state)),
        Key::ToggleSign => Outcome::ok(toggle_sign(state)),
        Key::Percent => match percent(state.entry()) {
            Ok(value) => Outcome::ok(state.with_entry(value, false)),
            Err(err) => Outcome::failed(err),
        },
        Key::Operator(op) => press_operator(state, op),
        Key::Equals => press_equals(state),
        Key::Clear => Outcome::ok(CalculatorState::initial()),
    }
}

fn apply_in_error(state: &CalculatorState, key: Key) -> Outcome {
    match key {
        Key::Digit(_) | Key::Decimal => apply_key(&CalculatorState::initial(), key),
        Key::Clear | Key::Backspace | Key::ToggleSign => Outcome::ok(CalculatorState::initial()),
        // "Error" is not a finite number, so percent re-enters the error state.
        Key::Percent => Outcome::ok(CalculatorState::error()),
        Key::Operator(_) | Key::Equals => Outcome::ok(state.clone()),
    }
}

fn press_digit(state: &CalculatorState, digit: u8) -> CalculatorState {
    let Some(digit) = char::from_digit(u32::from(digit), 10) else {
        return state.clone();
    };

    let entry = if state.awaiting_new_entry() || state.entry() == INITIAL_ENTRY {
        digit.to_string()
    } else {
        format!("{}{}", state.entry(), digit)
    };
    state.with_entry(entry, false)
}

fn press_decimal(state: &CalculatorState) -> CalculatorState {
    if state.awaiting_new_entry() {
        state.with_entry("0.".to_string(), false)
    } else if state.entry().contains('.') {
        state.clone()
    } else {
        state.with_entry(format!("{}.", state.entry()), false)
    }
}

fn backspace(state: &CalculatorState) -> CalculatorState {
    if state.awaiting_new_entry() || state.entry().chars().count() <= 1 {
        return state.with_entry(INITIAL_ENTRY.to_string(), true);
    }

    let mut entry = state.entry().to_string();
    entry.pop();
    if entry.is_empty() || entry == "-" {
        state.with_entry(INITIAL_ENTRY.to_string(), true)
    } else {
        state.with_entry(entry, false)
    }
}

fn toggle_sign(state: &CalculatorState) -> CalculatorState {
    let entry = state.entry();
    if entry == "0" || entry == "0." {
        return state.clone();
    }

    let toggled = match entry.strip_prefix('-') {
        Some(magnitude) => magnitude.to_string(),
        None => format!("-{entry}"),
    };
    state.with_entry(toggled, state.awaiting_new_entry())
}

fn press_operator(state: &CalculatorState, op: Operator) -> Outcome {
    let entry = state.entry().to_string();

    let Some(pending) = state.pending() else {
        let pending = PendingOperation {
            operand: entry.clone(),
            op,
        };
        return Outcome::ok(CalculatorState::new(entry, Some(pending), true));
    };

    // Operator right after an operator: the last choice wins.
    if state.awaiting_new_entry() {
        let pending = PendingOperation {
            operand: pending.operand.clone(),
            op,
        };
        return Outcome::ok(CalculatorState::new(entry, Some(pending), true));
    }

    match evaluate(&pending.operand, pending.op, &entry) {
        Ok(result) => {
            let pending = PendingOperation {
                operand: result.clone(),
                op,
            };
            Outcome::ok(CalculatorState::new(result, Some(pending), true))
        }
        Err(err) => Outcome::failed(err),
    }
}

fn press_equals(state: &CalculatorState) -> Outcome {
    let Some(pending) = state.pending() else {
        return Outcome::ok(state.clone());
    };

    // No right operand typed yet: repeat the stored operand.
    let rhs = if state.awaiting_new_entry() {
        pending.operand.as_str()
    } else {
        state.entry()
    };

    match evaluate(&pending.operand, pending.op, rhs) {
        Ok(result) => Outcome::ok(CalculatorState::new(result, None, true)),
        Err(err) => Outcome::failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(labels: &[&str]) -> CalculatorState {
        labels
            .iter()
            .fold(CalculatorState::default(), |state, label| {
                handle_label(&state, label)
            })
    }

    #[test]
    fn digits_append_after_first() {
        let state = run(&["1", "2", "3"]);
        assert_eq!(state.entry(), "123");
        assert!(!state.awaiting_new_entry());
    }

    #[test]
    fn digit_replaces_lone_zero() {
        assert_eq!(run(&["0", "0", "7"]).entry(), "7");
    }

    #[test]
    fn decimal_starts_fresh_entry_with_zero() {
        let state = run(&["."]);
        assert_eq!(state.entry(), "0.");
        assert!(!state.awaiting_new_entry());
        assert_eq!(run(&["0", ".", "5"]).entry(), "0.5");
    }

    #[test]
    fn second_decimal_is_ignored() {
        assert_eq!(run(&["1", ".", "2", ".", "3"]).entry(), "1.23");
    }

    #[test]
    fn backspace_removes_last_character() {
        let state = run(&["1", "2", "⌫"]);
        assert_eq!(state.entry(), "1");
        assert!(!state.awaiting_new_entry());
    }

    #[test]
    fn backspace_on_single_character_resets() {
        let state = run(&["7", "⌫"]);
        assert_eq!(state.entry(), "0");
        assert!(state.awaiting_new_entry());
    }

    #[test]
    fn backspace_to_lone_minus_resets() {
        let state = run(&["5", "±", "⌫"]);
        assert_eq!(state.entry(), "0");
        assert!(state.awaiting_new_entry());
    }

    #[test]
    fn backspace_after_operator_keeps_chain() {
        let state = run(&["9", "+", "⌫"]);
        assert_eq!(state.entry(), "0");
        assert_eq!(state.stored_operand(), Some("9"));
        assert_eq!(state.pending_op(), Some(Operator::Add));
    }

    #[test]
    fn sign_toggle_ignores_zero() {
        assert_eq!(run(&["±"]).entry(), "0");
        assert_eq!(run(&[".", "±"]).entry(), "0.");
    }

    #[test]
    fn sign_toggle_flips_prefix() {
        assert_eq!(run(&["4", "2", "±"]).entry(), "-42");
        assert_eq!(run(&["4", "2", "±", "±"]).entry(), "42");
    }

    #[test]
    fn percent_divides_entry_and_continues_editing() {
        let state = run(&["5", "±", "%"]);
        assert_eq!(state.entry(), "-0.05");
        assert!(!state.awaiting_new_entry());

        let state = run(&["5", "0", "%", "1"]);
        assert_eq!(state.entry(), "0.51");
    }

    #[test]
    fn percent_leaves_chain_untouched() {
        let state = run(&["2", "0", "0", "+", "1", "0", "%"]);
        assert_eq!(state.entry(), "0.1");
        assert_eq!(state.stored_operand(), Some("200"));
    }

    #[test]
    fn first_operator_captures_entry() {
        let state = run(&["1", "2", "+"]);
        assert_eq!(state.stored_operand(), Some("12"));
        assert_eq!(state.pending_op(), Some(Operator::Add));
        assert_eq!(state.entry(), "12");
        assert!(state.awaiting_new_entry());
    }

    #[test]
    fn later_operator_replaces_pending_one() {
        let state = run(&["6", "+", "×"]);
        assert_eq!(state.stored_operand(), Some("6"));
        assert_eq!(state.pending_op(), Some(Operator::Multiply));
        assert_eq!(state, run(&["6", "×"]));
    }

    #[test]
    fn operator_after_operand_folds_chain() {
        let state = run(&["5", "×", "6", "−"]);
        assert_eq!(state.entry(), "30");
        assert_eq!(state.stored_operand(), Some("30"));
        assert_eq!(state.pending_op(), Some(Operator::Subtract));
        assert!(state.awaiting_new_entry());
    }

    #[test]
    fn chained_evaluation_runs_left_to_right() {
        assert_eq!(run(&["5", "×", "6", "−", "4", "="]).entry(), "26");
        assert_eq!(run(&["2", "+", "3", "×", "4", "="]).entry(), "20");
    }

    #[test]
    fn equals_without_chain_is_noop() {
        let before = run(&["4", "2"]);
        assert_eq!(handle_key(&before, Key::Equals), before);
    }

    #[test]
    fn equals_right_after_operator_repeats_operand() {
        assert_eq!(run(&["7", "+", "="]).entry(), "14");
        assert_eq!(run(&["3", "×", "="]).entry(), "9");
    }

    #[test]
    fn equals_clears_chain() {
        let state = run(&["1", "2", "+", "7", "="]);
        assert_eq!(state.entry(), "19");
        assert!(state.pending().is_none());
        assert!(state.awaiting_new_entry());
    }

    #[test]
    fn division_by_zero_enters_error() {
        let outcome = apply_key(&run(&["8", "÷", "0"]), Key::Equals);
        assert!(outcome.state.is_error());
        assert!(outcome.state.pending().is_none());
        assert_eq!(outcome.failure, Some(EvalError::DivideByZero));
    }

    #[test]
    fn division_by_zero_via_operator_enters_error() {
        let state = run(&["8", "÷", "0", "+"]);
        assert!(state.is_error());
        assert!(state.pending().is_none());
        assert!(state.awaiting_new_entry());
    }

    #[test]
    fn digit_or_decimal_leaves_error() {
        let state = run(&["8", "÷", "0", "=", "4"]);
        assert_eq!(state.entry(), "4");
        assert!(!state.awaiting_new_entry());

        let state = run(&["8", "÷", "0", "=", "."]);
        assert_eq!(state.entry(), "0.");
    }

    #[test]
    fn operators_and_equals_do_nothing_in_error() {
        let error = run(&["8", "÷", "0", "="]);
        assert_eq!(handle_label(&error, "+"), error);
        assert_eq!(handle_label(&error, "="), error);
        assert_eq!(handle_label(&error, "%"), error);
    }

    #[test]
    fn percent_in_error_stays_in_error() {
        let error = run(&["8", "÷", "0", "="]);
        let outcome = apply_key(&error, Key::Percent);
        assert!(outcome.state.is_error());
        assert_eq!(outcome.failure, None);
        assert_ne!(handle_label(&error, "±"), outcome.state);
    }

    #[test]
    fn reset_keys_leave_error_for_initial_state() {
        let error = run(&["8", "÷", "0", "="]);
        for label in ["AC", "⌫", "±"] {
            assert_eq!(handle_label(&error, label), CalculatorState::initial());
        }
    }

    #[test]
    fn clear_resets_everything() {
        assert_eq!(run(&["1", "+", "2", "AC"]), CalculatorState::initial());
    }

    #[test]
    fn unknown_label_is_ignored() {
        let state = run(&["3"]);
        assert_eq!(handle_label(&state, "M+"), state);
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let state = run(&["3"]);
        assert_eq!(handle_key(&state, Key::Digit(12)), state);
    }
}
