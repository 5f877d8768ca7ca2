//! # Calculator Engine
//!
//! The operation state machine behind the keypad.
//!
//! ## State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Calculator                                      │
//! │                                                                         │
//! │  input: InputBuffer      "12.5"   operand being typed                   │
//! │  memory: Option<Memory>  None until the first operator press            │
//! │  ├── accumulator         result carried to the next step                │
//! │  ├── pending_operator    waiting for its second operand                 │
//! │  ├── last_operator  ┐    replayed by repeated "="                       │
//! │  └── last_operand   ┘                                                   │
//! │  remove_mode             AC / CE                                        │
//! │  output                  what the output screen shows                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operator Transitions (first match wins)
//! ```text
//!  apply_operator(op), n = parsed input (if any)
//!       │
//!       ├─ no memory ─────────────────► memory = { n or 0, pending: op }
//!       │
//!       ├─ no pending, op is "=" ─────► repeat: last_operator with
//!       │                               (n or last_operand)
//!       │
//!       ├─ no pending ────────────────► forget last_operator, pending = op
//!       │
//!       ├─ op is "=" ─────────────────► remember (pending, n), compute with
//!       │                               (n or accumulator), pending = none
//!       │
//!       └─ otherwise ─────────────────► compute with (n or accumulator),
//!                                       pending = op
//! ```
//!
//! Nothing here returns an error. A missing operand falls back to remembered
//! state, division by zero shows `Infinity`, and a repeat with nothing
//! remembered shows `NaN`.

use crate::rounding::{format_number, round_half_away};
use crate::types::{DisplaySnapshot, EntryKey, Key, Operator, RemoveMode};
use crate::validation::validate_precision;
use crate::{CoreResult, DECIMAL_POINT, DEFAULT_PRECISION};

// =============================================================================
// Input Buffer
// =============================================================================

/// Characters typed for the current operand.
///
/// ## Invariants
/// - Only digits and at most one decimal point
/// - A leading point is stored as `"0."`
/// - Empty means nothing typed since the last reset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer(String);

impl InputBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key. Returns `false` when the key was ignored (second point,
    /// or a digit value above 9).
    pub fn push(&mut self, key: EntryKey) -> bool {
        let Some(ch) = key.as_char() else {
            return false;
        };

        if ch == DECIMAL_POINT {
            if self.0.contains(DECIMAL_POINT) {
                return false;
            }
            if self.0.is_empty() {
                self.0.push('0');
            }
        }

        self.0.push(ch);
        true
    }

    /// The raw buffer contents.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text for the input screen: the buffer, or `"0"` when empty.
    pub fn display(&self) -> &str {
        if self.0.is_empty() {
            "0"
        } else {
            &self.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Parses the buffer as an operand. `None` means "no operand supplied".
    pub fn parse(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        self.0.parse::<f64>().ok()
    }
}

// =============================================================================
// Memory
// =============================================================================

/// Accumulated state of an in-progress calculation chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Memory {
    /// Left-hand side of the next operation.
    pub accumulator: f64,

    /// Operator waiting for its right-hand side.
    pub pending_operator: Option<Operator>,

    /// Operator replayed when "=" is pressed again.
    pub last_operator: Option<Operator>,

    /// Operand replayed when "=" is pressed again.
    pub last_operand: Option<f64>,
}

impl Memory {
    fn start(accumulator: f64, operator: Operator) -> Self {
        Memory {
            accumulator,
            pending_operator: Some(operator),
            last_operator: None,
            last_operand: None,
        }
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// The calculator engine.
///
/// One instance per keypad. The caller owns it and feeds it resolved keys;
/// after every call the display getters (or [`Calculator::snapshot`]) tell the
/// UI what to paint.
#[derive(Debug, Clone)]
pub struct Calculator {
    input: InputBuffer,
    memory: Option<Memory>,
    remove_mode: RemoveMode,
    output: f64,
    precision: u32,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator rounding to [`DEFAULT_PRECISION`] places.
    pub fn new() -> Self {
        Calculator {
            input: InputBuffer::new(),
            memory: None,
            remove_mode: RemoveMode::AllClear,
            output: 0.0,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Creates a calculator rounding results to `precision` places.
    ///
    /// ## Errors
    /// Returns a validation error if `precision` exceeds
    /// [`MAX_PRECISION`](crate::MAX_PRECISION).
    pub fn with_precision(precision: u32) -> CoreResult<Self> {
        let precision = validate_precision(precision)?;
        Ok(Calculator {
            precision,
            ..Self::new()
        })
    }

    // =========================================================================
    // Key Handling
    // =========================================================================

    /// Appends a digit or the decimal point to the input buffer.
    ///
    /// A second decimal point is silently ignored; a point on an empty buffer
    /// becomes `"0."`. The clear button switches to "CE" for any point press
    /// and for accepted digits; an invalid digit value changes nothing.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::{Calculator, EntryKey};
    ///
    /// let mut calc = Calculator::new();
    /// calc.append_digit(EntryKey::Point);
    /// calc.append_digit(EntryKey::Digit(5));
    /// assert_eq!(calc.append_digit(EntryKey::Point), "0.5");
    /// ```
    pub fn append_digit(&mut self, key: EntryKey) -> &str {
        if self.input.push(key) || key == EntryKey::Point {
            self.remove_mode = RemoveMode::ClearEntry;
        }
        self.input.display()
    }

    /// Applies an operator press, including "=".
    pub fn apply_operator(&mut self, op: Operator) {
        let n = self.input.parse();

        let Some(memory) = self.memory.as_mut() else {
            let accumulator = n.unwrap_or(0.0);
            self.memory = Some(Memory::start(accumulator, op));
            self.show_result(accumulator);
            return;
        };

        match (memory.pending_operator, op) {
            // Repeat of "=": replay the remembered step on the latest result
            (None, Operator::Equal) => {
                let operator = memory.last_operator;
                let operand = n.or(memory.last_operand);
                self.operate(operator, operand, None);
            }

            // A new operator right after "=": nothing to compute yet
            (None, _) => {
                memory.last_operator = None;
                memory.pending_operator = Some(op);
            }

            (Some(pending), Operator::Equal) => {
                memory.last_operator = Some(pending);
                memory.last_operand = n;
                let operand = n.or(Some(memory.accumulator));
                self.operate(Some(pending), operand, None);
            }

            (Some(pending), _) => {
                let operand = n.or(Some(memory.accumulator));
                self.operate(Some(pending), operand, Some(op));
            }
        }
    }

    /// Clears the operand being typed; the calculation chain survives.
    pub fn clear_entry(&mut self) {
        self.reset_input();
    }

    /// Discards the whole calculation and zeroes the output screen.
    pub fn clear_all(&mut self) {
        self.memory = None;
        self.reset_input();
        self.output = 0.0;
    }

    /// Presses the clear button: "AC" clears everything, "CE" only the entry.
    pub fn press_remove(&mut self) {
        match self.remove_mode {
            RemoveMode::AllClear => self.clear_all(),
            RemoveMode::ClearEntry => self.clear_entry(),
        }
    }

    /// Dispatches one resolved key press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Entry(entry) => {
                self.append_digit(entry);
            }
            Key::Operator(op) => self.apply_operator(op),
            Key::Remove => self.press_remove(),
        }
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Current behaviour of the clear button.
    pub fn remove_mode(&self) -> RemoveMode {
        self.remove_mode
    }

    /// Label for the clear button ("AC" or "CE").
    pub fn current_remove_label(&self) -> &'static str {
        self.remove_mode.label()
    }

    /// The input buffer.
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// Input screen text.
    pub fn input_display(&self) -> &str {
        self.input.display()
    }

    /// Value on the output screen.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Output screen text.
    pub fn output_display(&self) -> String {
        format_number(self.output)
    }

    /// The calculation chain, absent before the first operator press.
    pub fn memory(&self) -> Option<&Memory> {
        self.memory.as_ref()
    }

    /// Decimal places results are rounded to.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Everything the UI needs to repaint.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            input: self.input_display().to_string(),
            output: self.output_display(),
            remove_mode: self.remove_mode,
            pending_operator: self.memory.and_then(|m| m.pending_operator),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Computes `accumulator <operator> operand`, rounds, and stores the
    /// result. A missing operator takes the operand as the result; a missing
    /// operand is NaN.
    fn operate(&mut self, operator: Option<Operator>, operand: Option<f64>, next: Option<Operator>) {
        let Some(memory) = self.memory.as_mut() else {
            return;
        };

        let operand = operand.unwrap_or(f64::NAN);
        let raw = operator
            .unwrap_or(Operator::Equal)
            .apply(memory.accumulator, operand);
        let result = round_half_away(raw, self.precision);

        memory.accumulator = result;
        memory.pending_operator = next;
        self.show_result(result);
    }

    fn show_result(&mut self, value: f64) {
        self.output = value;
        self.reset_input();
    }

    fn reset_input(&mut self) {
        self.input.clear();
        self.remove_mode = RemoveMode::AllClear;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
