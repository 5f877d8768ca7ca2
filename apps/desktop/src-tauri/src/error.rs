//! # API Error Type
//!
//! Unified error type for desktop commands, plus configuration errors.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Abacus                                 │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('press_operator', { symbol: '^' })                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<DisplaySnapshot, ApiError>                               │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown symbol? ─── CoreError::UnknownOperator ── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Engine call (never fails) ─── DisplaySnapshot ─────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) { e.code === 'UNKNOWN_SYMBOL' }                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Command errors must be serializable. `ApiError` carries a machine-readable
//! `code` and a human-readable `message`.

use std::path::PathBuf;

use abacus_core::CoreError;
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// API Error
// =============================================================================

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "UNKNOWN_SYMBOL",
///   "message": "Unknown operator symbol: \"^\""
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A key or operator symbol the keypad does not have
    UnknownSymbol,

    /// Input validation failed
    ValidationError,

    /// Configuration could not be read or written
    ConfigError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an unknown symbol error.
    pub fn unknown_symbol(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::UnknownSymbol, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownKey(_) | CoreError::UnknownOperator(_) => {
                ApiError::unknown_symbol(err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts configuration errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(e) => ApiError::validation(e.to_string()),
            other => {
                tracing::error!("Configuration failure: {}", other);
                ApiError::new(ErrorCode::ConfigError, other.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Config Error
// =============================================================================

/// Errors from loading or saving `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read or written.
    #[error("Config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`ConfigState`](crate::state::ConfigState).
    #[error("Config file {} is malformed: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// No platform config directory and no explicit path.
    #[error("No config path available")]
    NoConfigPath,

    /// A value failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] abacus_core::ValidationError),
}

/// Convenience type alias for configuration Results.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::ValidationError;

    #[test]
    fn test_core_error_maps_to_unknown_symbol() {
        let api: ApiError = CoreError::UnknownOperator("^".to_string()).into();
        assert_eq!(api.code, ErrorCode::UnknownSymbol);
        assert!(api.message.contains('^'));
    }

    #[test]
    fn test_validation_maps_to_validation_code() {
        let err = ValidationError::OutOfRange {
            field: "precision".to_string(),
            min: 0,
            max: 10,
            value: 42,
        };
        let api: ApiError = ConfigError::from(err).into();
        assert_eq!(api.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_api_error_serialization() {
        let api = ApiError::unknown_symbol("Unknown key symbol: \"%\"");
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["code"], "UNKNOWN_SYMBOL");
        assert_eq!(json["message"], "Unknown key symbol: \"%\"");
        assert_eq!(api.to_string(), "[UnknownSymbol] Unknown key symbol: \"%\"");
    }
}
