//! # Calculator Commands
//!
//! Commands driving the calculator engine from the keypad and keyboard.
//!
//! ## Button Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Keypad Interaction                                   │
//! │                                                                         │
//! │  button.numeric  ──── data-value ────► press_digit("7")                │
//! │  button.operator ──── data-value ────► press_operator("÷")             │
//! │  button.remove   ────────────────────► press_remove()                  │
//! │  window keydown  ──── event.key ─────► handle_key("Enter")             │
//! │                                                 │                       │
//! │                                                 ▼                       │
//! │                                   DisplaySnapshot { input, output,      │
//! │                                     removeMode, pendingOperator }       │
//! │                                                 │                       │
//! │                                                 ▼                       │
//! │                              frontend repaints screens + AC/CE label    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the snapshot taken under the same lock as the key
//! press, so the frontend never paints a state between two presses.

use abacus_core::{DisplaySnapshot, EntryKey, Operator};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CalculatorState, ConfigState};
use crate::ui::{key_for, widget};

/// Gets the current screens and clear button state.
pub fn get_display(calc: &CalculatorState) -> DisplaySnapshot {
    debug!("get_display command");
    calc.with_calculator(|c| c.snapshot())
}

/// Appends a digit or decimal point.
///
/// ## Arguments
/// * `symbol` - `"0"`..`"9"` or `"."`
///
/// ## Errors
/// `UNKNOWN_SYMBOL` if `symbol` is not a keypad entry key.
pub fn press_digit(calc: &CalculatorState, symbol: &str) -> Result<DisplaySnapshot, ApiError> {
    debug!(symbol = %symbol, "press_digit command");

    let key: EntryKey = symbol.parse()?;
    Ok(calc.with_calculator_mut(|c| {
        c.append_digit(key);
        c.snapshot()
    }))
}

/// Presses an operator button, including "=".
///
/// ## Arguments
/// * `symbol` - `"+"`, `"-"`, `"x"`, `"÷"` or `"="` (`"*"` and `"/"` also accepted)
///
/// ## Errors
/// `UNKNOWN_SYMBOL` if `symbol` is not an operator.
pub fn press_operator(calc: &CalculatorState, symbol: &str) -> Result<DisplaySnapshot, ApiError> {
    debug!(symbol = %symbol, "press_operator command");

    let op: Operator = symbol.parse()?;
    Ok(calc.with_calculator_mut(|c| {
        c.apply_operator(op);
        c.snapshot()
    }))
}

/// Clears the operand being typed.
pub fn clear_entry(calc: &CalculatorState) -> DisplaySnapshot {
    debug!("clear_entry command");

    calc.with_calculator_mut(|c| {
        c.clear_entry();
        c.snapshot()
    })
}

/// Discards the whole calculation.
pub fn clear_all(calc: &CalculatorState) -> DisplaySnapshot {
    debug!("clear_all command");

    calc.with_calculator_mut(|c| {
        c.clear_all();
        c.snapshot()
    })
}

/// Presses the AC/CE button; what it clears depends on its current mode.
pub fn press_remove(calc: &CalculatorState) -> DisplaySnapshot {
    debug!("press_remove command");

    calc.with_calculator_mut(|c| {
        c.press_remove();
        c.snapshot()
    })
}

/// Handles a keyboard event.
///
/// ## Arguments
/// * `key` - `KeyboardEvent.key` from the webview
///
/// ## Returns
/// The new display, or `None` when the key has no button or the keyboard is
/// disabled in the configuration. The frontend skips repainting on `None`.
pub fn handle_key(
    calc: &CalculatorState,
    config: &ConfigState,
    key: &str,
) -> Option<DisplaySnapshot> {
    if !config.keyboard_enabled {
        debug!(key = %key, "Keyboard disabled, key ignored");
        return None;
    }

    let Some(resolved) = key_for(key) else {
        debug!(key = %key, "Unmapped key ignored");
        return None;
    };

    debug!(key = %key, ?resolved, "handle_key command");
    Some(calc.with_calculator_mut(|c| {
        c.press(resolved);
        c.snapshot()
    }))
}

/// Renders the whole calculator as HTML for the current state.
///
/// ## When Used
/// - First paint, replacing the contents of `#app`
pub fn render_calculator(calc: &CalculatorState) -> String {
    debug!("render_calculator command");

    let snapshot = calc.with_calculator(|c| c.snapshot());
    widget::calculator(&snapshot).to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use abacus_core::RemoveMode;

    /// Presses each whitespace-separated symbol as a keypad button.
    fn click(calc: &CalculatorState, symbols: &str) -> DisplaySnapshot {
        let mut last = get_display(calc);
        for symbol in symbols.split_whitespace() {
            last = match symbol {
                "AC" | "CE" => press_remove(calc),
                s if s.parse::<Operator>().is_ok() => press_operator(calc, s).unwrap(),
                s => press_digit(calc, s).unwrap(),
            };
        }
        last
    }

    #[test]
    fn test_initial_display() {
        let snapshot = get_display(&CalculatorState::default());
        assert_eq!(snapshot.input, "0");
        assert_eq!(snapshot.output, "0");
        assert_eq!(snapshot.remove_label(), "AC");
        assert_eq!(snapshot.pending_operator, None);
    }

    #[test]
    fn test_simple_calculation() {
        let calc = CalculatorState::default();
        let snapshot = click(&calc, "1 2 + 3 =");
        assert_eq!(snapshot.output, "15");
        assert_eq!(snapshot.input, "0");
        assert_eq!(snapshot.remove_mode, RemoveMode::AllClear);
    }

    #[test]
    fn test_pending_operator_reported() {
        let calc = CalculatorState::default();
        let snapshot = click(&calc, "6 x");
        assert_eq!(snapshot.pending_operator, Some(Operator::Multiply));
        assert_eq!(snapshot.output, "6");
    }

    #[test]
    fn test_unknown_symbols_are_rejected() {
        let calc = CalculatorState::default();

        let err = press_digit(&calc, "12").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownSymbol);

        let err = press_operator(&calc, "^").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownSymbol);

        // Nothing changed
        assert_eq!(get_display(&calc), get_display(&CalculatorState::default()));
    }

    #[test]
    fn test_remove_toggles_between_entry_and_all() {
        let calc = CalculatorState::default();
        click(&calc, "8 + 5");
        assert_eq!(get_display(&calc).remove_label(), "CE");

        // CE keeps the chain
        let snapshot = press_remove(&calc);
        assert_eq!(snapshot.input, "0");
        assert_eq!(snapshot.output, "8");
        assert_eq!(snapshot.remove_label(), "AC");

        // AC drops it
        let snapshot = press_remove(&calc);
        assert_eq!(snapshot.output, "0");
        assert_eq!(snapshot.pending_operator, None);
    }

    #[test]
    fn test_clear_entry_and_clear_all() {
        let calc = CalculatorState::default();
        click(&calc, "9 ÷ 4");

        let snapshot = clear_entry(&calc);
        assert_eq!(snapshot.output, "9");
        assert_eq!(snapshot.pending_operator, Some(Operator::Divide));

        let snapshot = clear_all(&calc);
        assert_eq!(snapshot.output, "0");
        assert_eq!(snapshot.pending_operator, None);
    }

    #[test]
    fn test_handle_key_sequence() {
        let calc = CalculatorState::default();
        let config = ConfigState::default();

        for key in ["7", "*", "6"] {
            assert!(handle_key(&calc, &config, key).is_some());
        }
        let snapshot = handle_key(&calc, &config, "Enter").unwrap();
        assert_eq!(snapshot.output, "42");

        let snapshot = handle_key(&calc, &config, "Escape").unwrap();
        assert_eq!(snapshot.output, "0");
    }

    #[test]
    fn test_handle_key_ignores_unmapped_keys() {
        let calc = CalculatorState::default();
        assert_eq!(handle_key(&calc, &ConfigState::default(), "Shift"), None);
        assert_eq!(get_display(&calc).input, "0");
    }

    #[test]
    fn test_handle_key_respects_disabled_keyboard() {
        let calc = CalculatorState::default();
        let config = ConfigState {
            keyboard_enabled: false,
            ..ConfigState::default()
        };
        assert_eq!(handle_key(&calc, &config, "5"), None);
        assert_eq!(get_display(&calc).input, "0");
    }

    #[test]
    fn test_precision_comes_from_config() {
        let config = ConfigState {
            precision: 4,
            ..ConfigState::default()
        };
        let calc = CalculatorState::new(config.build_calculator());
        let snapshot = click(&calc, "1 ÷ 3 =");
        assert_eq!(snapshot.output, "0.3333");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let calc = CalculatorState::default();
        let snapshot = click(&calc, "5 ÷ 0 =");
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["output"], "Infinity");
        assert_eq!(json["removeMode"], "ac");
        assert!(json["pendingOperator"].is_null());
    }

    #[test]
    fn test_render_calculator_tracks_state() {
        let calc = CalculatorState::default();
        click(&calc, "3 .");
        let html = render_calculator(&calc);
        assert!(html.contains("<div class=\"input-screen\">3.</div>"));
        assert!(html.contains("data-remove-type=\"ce\">CE</button>"));
    }
}
