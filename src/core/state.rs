//! Core State trait for recorded engine states.
//!
//! Any state record that flows through [`StateHistory`](super::StateHistory)
//! implements this trait, which exposes pure inspection methods only.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state records produced by key-driven transitions.
///
/// All methods are pure. A state is an immutable value; every transition
/// produces a new one rather than mutating the old.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: states are compared in tests and for no-op detection
/// - `Debug`: states are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states can be exported for inspection
///
/// # Example
///
/// ```rust
/// use abacus::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
///     Blown,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///             Self::Blown => "Blown",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Blown)
///     }
/// }
///
/// assert!(Lamp::Blown.is_error());
/// assert_eq!(Lamp::On.name(), "On");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the macro-state this value belongs to, for display and logging.
    fn name(&self) -> &str;

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Busy,
        Broken,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
                Self::Broken => "Broken",
            }
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Plain;

    impl State for Plain {
        fn name(&self) -> &str {
            "Plain"
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Busy.name(), "Busy");
        assert_eq!(TestState::Broken.name(), "Broken");
    }

    #[test]
    fn is_error_identifies_error_states() {
        assert!(!TestState::Idle.is_error());
        assert!(!TestState::Busy.is_error());
        assert!(TestState::Broken.is_error());
    }

    #[test]
    fn is_error_defaults_to_false() {
        assert!(!Plain.is_error());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Busy;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
