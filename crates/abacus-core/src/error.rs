//! # Error Types
//!
//! Boundary error types for abacus-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  abacus-core errors (this file)                                        │
//! │  ├── CoreError        - Unknown symbols from the UI layer              │
//! │  └── ValidationError  - Configuration value failures                   │
//! │                                                                         │
//! │  Desktop errors (in app)                                               │
//! │  ├── ConfigError      - Config file read/parse/write                   │
//! │  └── ApiError         - What frontend sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Engine Never Errors
//! Once a symbol has been resolved, every engine call succeeds. An unparseable
//! or missing operand is a "soft" condition handled inside the state machine
//! by falling back to remembered state, and division by zero yields a
//! non-finite result. These types only describe failures at the edges.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning UI symbols into engine input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A key symbol does not name a digit, point, operator or clear button.
    ///
    /// ## When This Occurs
    /// - The frontend sends a button value that was never on the keypad
    /// - A command is invoked by hand with a typo
    #[error("Unknown key symbol: {0:?}")]
    UnknownKey(String),

    /// An operator symbol is not one of `+ - x ÷ =`.
    #[error("Unknown operator symbol: {0:?}")]
    UnknownOperator(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },

    /// Invalid format (e.g., a precision that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
