//! # Validation Module
//!
//! Checks for configuration values that reach the engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Config file / environment (desktop shell)                    │
//! │  ├── TOML / env parsing                                                │
//! │  └── Falls back to defaults with a warning                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Range checks before a value configures an engine                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine                                                       │
//! │  └── Accepts every key press; nothing left to validate                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use abacus_core::validation::{parse_precision, validate_precision};
//!
//! assert_eq!(validate_precision(2).unwrap(), 2);
//! assert!(validate_precision(11).is_err());
//! assert_eq!(parse_precision(" 4 ").unwrap(), 4);
//! ```

use crate::error::ValidationError;
use crate::MAX_PRECISION;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a rounding precision (decimal places).
///
/// ## Rules
/// - Must be between 0 and [`MAX_PRECISION`] inclusive
pub fn validate_precision(precision: u32) -> ValidationResult<u32> {
    if precision > MAX_PRECISION {
        return Err(ValidationError::OutOfRange {
            field: "precision".to_string(),
            min: 0,
            max: i64::from(MAX_PRECISION),
            value: i64::from(precision),
        });
    }
    Ok(precision)
}

/// Parses and validates a precision given as text (environment variables).
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be a non-negative integer
/// - Must pass [`validate_precision`]
pub fn parse_precision(raw: &str) -> ValidationResult<u32> {
    let raw = raw.trim();
    let precision = raw
        .parse::<u32>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: "precision".to_string(),
            reason: format!("{raw:?} is not a non-negative integer ({e})"),
        })?;
    validate_precision(precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_precision_bounds() {
        assert_eq!(validate_precision(0).unwrap(), 0);
        assert_eq!(validate_precision(MAX_PRECISION).unwrap(), MAX_PRECISION);
        assert!(matches!(
            validate_precision(MAX_PRECISION + 1),
            Err(ValidationError::OutOfRange { value: 11, .. })
        ));
    }

    #[test]
    fn test_parse_precision() {
        assert_eq!(parse_precision("3").unwrap(), 3);
        assert_eq!(parse_precision(" 2\n").unwrap(), 2);
        assert!(matches!(
            parse_precision("-1"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_precision("two"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_precision("99"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
