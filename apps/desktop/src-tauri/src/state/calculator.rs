//! # Calculator State
//!
//! Owns the one calculator engine behind the keypad.
//!
//! ## Thread Safety
//! The engine is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every command reads or modifies the same engine
//! 2. Key presses must apply one at a time, in order
//! 3. Commands may be dispatched from more than one thread
//!
//! ## Key Press Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator State Operations                          │
//! │                                                                         │
//! │  Frontend Action          Command                 Engine Change         │
//! │  ───────────────          ───────                 ─────────────         │
//! │                                                                         │
//! │  Click "7" ──────────────► press_digit() ───────► input.push('7')      │
//! │                                                                         │
//! │  Click "+" ──────────────► press_operator() ────► apply_operator(Add)  │
//! │                                                                         │
//! │  Press Enter ────────────► handle_key() ────────► apply_operator(Equal)│
//! │                                                                         │
//! │  Click "AC"/"CE" ────────► press_remove() ──────► clear_all/clear_entry│
//! │                                                                         │
//! │  Repaint ────────────────► get_display() ───────► (read only)          │
//! │                                                                         │
//! │  NOTE: Every call locks, runs one engine call, snapshots, unlocks.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use abacus_core::Calculator;

/// Managed calculator state.
///
/// ## Why Not RwLock?
/// Almost every command is a key press that mutates the engine.
#[derive(Debug, Default)]
pub struct CalculatorState {
    calculator: Arc<Mutex<Calculator>>,
}

impl CalculatorState {
    /// Wraps an engine built elsewhere (usually from [`ConfigState`](super::ConfigState)).
    pub fn new(calculator: Calculator) -> Self {
        CalculatorState {
            calculator: Arc::new(Mutex::new(calculator)),
        }
    }

    /// Executes a function with read access to the engine.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = calc_state.with_calculator(|calc| calc.snapshot());
    /// ```
    pub fn with_calculator<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Calculator) -> R,
    {
        // A panic mid-call cannot leave the engine half-updated in a way
        // later presses cannot recover from, so poisoning is ignored.
        let calculator = self.calculator.lock().unwrap_or_else(PoisonError::into_inner);
        f(&calculator)
    }

    /// Executes a function with write access to the engine.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// calc_state.with_calculator_mut(|calc| calc.apply_operator(Operator::Add));
    /// ```
    pub fn with_calculator_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Calculator) -> R,
    {
        let mut calculator = self.calculator.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut calculator)
    }
}
