//! # abacus-core: Pure Calculator Logic for Abacus
//!
//! This crate is the **heart** of Abacus. It holds the calculator's operation
//! state machine with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Abacus Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Keypad ──► Key events ──► Input screen / Output screen       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ IPC                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Desktop Commands                             │   │
//! │  │    press_digit, press_operator, handle_key, clear_all, etc.     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ abacus-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  engine   │  │ rounding  │  │ validation│  │   │
//! │  │   │ Operator  │  │Calculator │  │ half away │  │ precision │  │   │
//! │  │   │ EntryKey  │  │  Memory   │  │  display  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO WINDOW • NO KEY CODES • NEVER PANICS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Symbols (Operator, EntryKey, Key) and display types
//! - [`engine`] - The calculator state machine
//! - [`rounding`] - Result rounding and number display
//! - [`error`] - Boundary error types
//! - [`validation`] - Configuration value checks
//!
//! ## Design Principles
//!
//! 1. **Infallible Engine**: every key press produces a defined next state
//! 2. **No I/O**: the engine never touches a window, a file or a logger
//! 3. **Explicit Ownership**: callers construct and own the engine instance
//! 4. **Errors at the Edges**: only symbol parsing and config checks can fail
//!
//! ## Example Usage
//!
//! ```rust
//! use abacus_core::{Calculator, EntryKey, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.append_digit(EntryKey::Digit(5));
//! calc.apply_operator(Operator::Add);
//! calc.append_digit(EntryKey::Digit(3));
//! calc.apply_operator(Operator::Equal);
//! assert_eq!(calc.output_display(), "8");
//!
//! // Pressing equals again repeats "+ 3"
//! calc.apply_operator(Operator::Equal);
//! assert_eq!(calc.output_display(), "11");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod rounding;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::{Calculator, InputBuffer, Memory};
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Decimal places results are rounded to unless configured otherwise.
pub const DEFAULT_PRECISION: u32 = 2;

/// Largest accepted rounding precision.
///
/// Beyond ten places the shifted value starts losing integer precision for
/// ordinary magnitudes, so rounding stops being meaningful.
pub const MAX_PRECISION: u32 = 10;

/// The decimal point character accepted by the input buffer.
pub const DECIMAL_POINT: char = '.';
