//! # Keyboard Mapping
//!
//! Resolves `KeyboardEvent.key` values from the webview into engine keys.
//!
//! ```text
//!   "0".."9"          ──► Digit
//!   "." ","           ──► Point
//!   "+" "-"           ──► Add / Subtract
//!   "*" "x" "X"       ──► Multiply
//!   "/" "÷"           ──► Divide
//!   "Enter" "="       ──► Equal
//!   "Delete" "Escape" ──► Remove button
//! ```
//!
//! Numpad keys report the same `key` values as the main row, so they need no
//! entries of their own.

use abacus_core::{EntryKey, Key, Operator};

/// Returns the engine key for a keyboard key, or `None` if the keypad has no
/// button for it.
pub fn key_for(key: &str) -> Option<Key> {
    let resolved = match key {
        "." | "," => Key::Entry(EntryKey::Point),
        "+" => Key::Operator(Operator::Add),
        "-" => Key::Operator(Operator::Subtract),
        "*" | "x" | "X" => Key::Operator(Operator::Multiply),
        "/" | "÷" => Key::Operator(Operator::Divide),
        "Enter" | "=" => Key::Operator(Operator::Equal),
        "Delete" | "Escape" => Key::Remove,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_ascii_digit() => Key::Entry(EntryKey::try_from(ch).ok()?),
                _ => return None,
            }
        }
    };
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        for d in 0..=9u8 {
            assert_eq!(key_for(&d.to_string()), Some(Key::Entry(EntryKey::Digit(d))));
        }
    }

    #[test]
    fn test_point_aliases() {
        assert_eq!(key_for("."), Some(Key::Entry(EntryKey::Point)));
        assert_eq!(key_for(","), Some(Key::Entry(EntryKey::Point)));
    }

    #[test]
    fn test_operator_aliases() {
        assert_eq!(key_for("*"), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(key_for("X"), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(key_for("÷"), Some(Key::Operator(Operator::Divide)));
        assert_eq!(key_for("/"), Some(Key::Operator(Operator::Divide)));
        assert_eq!(key_for("Enter"), Some(Key::Operator(Operator::Equal)));
        assert_eq!(key_for("="), Some(Key::Operator(Operator::Equal)));
    }

    #[test]
    fn test_remove_keys() {
        assert_eq!(key_for("Delete"), Some(Key::Remove));
        assert_eq!(key_for("Escape"), Some(Key::Remove));
    }

    #[test]
    fn test_unmapped_keys() {
        for key in ["", "a", "Shift", "F5", "%", "12", "Backspace", "٣"] {
            assert_eq!(key_for(key), None, "{key:?} should be unmapped");
        }
    }
}
