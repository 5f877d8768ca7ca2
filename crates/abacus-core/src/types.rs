//! # Calculator Types
//!
//! Symbols the engine understands and the values it reports back.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Calculator Types                                │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    EntryKey     │   │    Operator     │   │   RemoveMode    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Digit(0..=9)   │   │  Add      +     │   │  AllClear  AC   │       │
//! │  │  Point     .    │   │  Subtract -     │   │  ClearEntry CE  │       │
//! │  └────────┬────────┘   │  Multiply x     │   └─────────────────┘       │
//! │           │            │  Divide   ÷     │                              │
//! │           │            │  Equal    =     │                              │
//! │           │            └────────┬────────┘                              │
//! │           └──────────┬──────────┘                                       │
//! │                      ▼                                                  │
//! │               Key (one button press, resolved)                          │
//! │                                                                         │
//! │  DisplaySnapshot: what the screens show after each call                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Key codes and key identifiers are NOT handled here; the UI layer resolves
//! them into these symbols before calling the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::DECIMAL_POINT;

// =============================================================================
// Operator
// =============================================================================

/// An operator button.
///
/// `Equal` is an operator like the others: it closes the pending operation
/// instead of opening a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
}

impl Operator {
    /// Every operator in keypad order.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Equal,
    ];

    /// Returns the button label for this operator.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "x",
            Operator::Divide => "÷",
            Operator::Equal => "=",
        }
    }

    /// Applies the operator with `lhs` as the accumulator and `rhs` as the
    /// operand.
    ///
    /// Division follows IEEE 754: `x / 0` is infinite and `0 / 0` is NaN.
    /// `Equal` takes the operand as the result.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::Operator;
    ///
    /// assert_eq!(Operator::Subtract.apply(10.0, 4.0), 6.0);
    /// assert!(Operator::Divide.apply(5.0, 0.0).is_infinite());
    /// assert_eq!(Operator::Equal.apply(10.0, 4.0), 4.0);
    /// ```
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
            Operator::Equal => rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    /// Parses a button label. The ASCII spellings `*` and `/` are accepted
    /// next to the keypad's `x` and `÷`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "x" | "X" | "*" | "×" => Ok(Operator::Multiply),
            "÷" | "/" => Ok(Operator::Divide),
            "=" => Ok(Operator::Equal),
            other => Err(CoreError::UnknownOperator(other.to_string())),
        }
    }
}

// =============================================================================
// Entry Key
// =============================================================================

/// A key that edits the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKey {
    /// A decimal digit. Values above 9 are ignored by the engine.
    Digit(u8),

    /// The decimal point.
    Point,
}

impl EntryKey {
    /// Returns the character this key appends, if it is a valid key.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::EntryKey;
    ///
    /// assert_eq!(EntryKey::Digit(7).as_char(), Some('7'));
    /// assert_eq!(EntryKey::Point.as_char(), Some('.'));
    /// assert_eq!(EntryKey::Digit(12).as_char(), None);
    /// ```
    pub fn as_char(&self) -> Option<char> {
        match self {
            EntryKey::Digit(d) => char::from_digit(u32::from(*d), 10),
            EntryKey::Point => Some(DECIMAL_POINT),
        }
    }
}

impl TryFrom<char> for EntryKey {
    type Error = CoreError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch == DECIMAL_POINT {
            return Ok(EntryKey::Point);
        }
        ch.to_digit(10)
            .map(|d| EntryKey::Digit(d as u8))
            .ok_or_else(|| CoreError::UnknownKey(ch.to_string()))
    }
}

impl FromStr for EntryKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => EntryKey::try_from(ch),
            _ => Err(CoreError::UnknownKey(s.to_string())),
        }
    }
}

// =============================================================================
// Key
// =============================================================================

/// One resolved button press of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Digit or decimal point.
    Entry(EntryKey),

    /// Arithmetic operator or equals.
    Operator(Operator),

    /// The clear button; what it clears depends on [`RemoveMode`].
    Remove,
}

impl From<EntryKey> for Key {
    fn from(key: EntryKey) -> Self {
        Key::Entry(key)
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Key::Operator(op)
    }
}

impl FromStr for Key {
    type Err = CoreError;

    /// Parses a button value as rendered on the keypad.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::{EntryKey, Key, Operator};
    ///
    /// assert_eq!("7".parse::<Key>().unwrap(), Key::Entry(EntryKey::Digit(7)));
    /// assert_eq!("÷".parse::<Key>().unwrap(), Key::Operator(Operator::Divide));
    /// assert_eq!("AC".parse::<Key>().unwrap(), Key::Remove);
    /// assert!("%".parse::<Key>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(RemoveMode::AllClear.as_str())
            || s.eq_ignore_ascii_case(RemoveMode::ClearEntry.as_str())
        {
            return Ok(Key::Remove);
        }
        if let Ok(op) = s.parse::<Operator>() {
            return Ok(Key::Operator(op));
        }
        s.parse::<EntryKey>()
            .map(Key::Entry)
            .map_err(|_| CoreError::UnknownKey(s.to_string()))
    }
}

// =============================================================================
// Remove Mode
// =============================================================================

/// What the clear button does when pressed.
///
/// ## Toggling
/// ```text
///   digit entered ──────► ClearEntry ("CE")
///   clear / calculation ─► AllClear  ("AC")
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RemoveMode {
    /// Discard the whole calculation.
    #[default]
    #[serde(rename = "ac")]
    AllClear,

    /// Discard only the operand being typed.
    #[serde(rename = "ce")]
    ClearEntry,
}

impl RemoveMode {
    /// Returns the button label ("AC" or "CE").
    pub const fn label(&self) -> &'static str {
        match self {
            RemoveMode::AllClear => "AC",
            RemoveMode::ClearEntry => "CE",
        }
    }

    /// Returns the lowercase identifier used in data attributes.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RemoveMode::AllClear => "ac",
            RemoveMode::ClearEntry => "ce",
        }
    }
}

impl fmt::Display for RemoveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Display Snapshot
// =============================================================================

/// Everything a UI needs to repaint after an engine call.
///
/// The output is carried as text so that `Infinity` and `NaN` survive JSON,
/// which has no encoding for non-finite numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DisplaySnapshot {
    /// Input screen text ("0" when nothing is typed).
    pub input: String,

    /// Output screen text.
    pub output: String,

    /// Current behaviour of the clear button.
    pub remove_mode: RemoveMode,

    /// Operator waiting for its second operand, if any.
    pub pending_operator: Option<Operator>,
}

impl DisplaySnapshot {
    /// Label for the clear button.
    pub fn remove_label(&self) -> &'static str {
        self.remove_mode.label()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parsing() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("-".parse::<Operator>().unwrap(), Operator::Subtract);
        assert_eq!("x".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!("=".parse::<Operator>().unwrap(), Operator::Equal);
        assert!("^".parse::<Operator>().is_err());
    }

    #[test]
    fn test_operator_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(4.0, 2.0), 6.0);
        assert_eq!(Operator::Subtract.apply(4.0, 6.0), -2.0);
        assert_eq!(Operator::Multiply.apply(6.0, 6.0), 36.0);
        assert_eq!(Operator::Divide.apply(9.0, 3.0), 3.0);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
        assert_eq!(Operator::Divide.apply(-5.0, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_entry_key_from_char() {
        assert_eq!(EntryKey::try_from('0').unwrap(), EntryKey::Digit(0));
        assert_eq!(EntryKey::try_from('9').unwrap(), EntryKey::Digit(9));
        assert_eq!(EntryKey::try_from('.').unwrap(), EntryKey::Point);
        assert!(matches!(
            EntryKey::try_from('a'),
            Err(CoreError::UnknownKey(s)) if s == "a"
        ));
        assert!("12".parse::<EntryKey>().is_err());
        assert!("".parse::<EntryKey>().is_err());
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("ac".parse::<Key>().unwrap(), Key::Remove);
        assert_eq!("CE".parse::<Key>().unwrap(), Key::Remove);
        assert_eq!(".".parse::<Key>().unwrap(), Key::Entry(EntryKey::Point));
        assert_eq!("=".parse::<Key>().unwrap(), Key::Operator(Operator::Equal));
        assert!(matches!("?".parse::<Key>(), Err(CoreError::UnknownKey(_))));
    }

    #[test]
    fn test_remove_mode_labels() {
        assert_eq!(RemoveMode::default(), RemoveMode::AllClear);
        assert_eq!(RemoveMode::AllClear.label(), "AC");
        assert_eq!(RemoveMode::ClearEntry.label(), "CE");
        assert_eq!(RemoveMode::ClearEntry.to_string(), "CE");
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = DisplaySnapshot {
            input: "0".to_string(),
            output: "Infinity".to_string(),
            remove_mode: RemoveMode::ClearEntry,
            pending_operator: Some(Operator::Divide),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["input"], "0");
        assert_eq!(json["output"], "Infinity");
        assert_eq!(json["removeMode"], "ce");
        assert_eq!(json["pendingOperator"], "divide");
        assert_eq!(snapshot.remove_label(), "CE");
    }
}
