//! # Config Commands
//!
//! Commands for retrieving and persisting application configuration.

use std::path::PathBuf;

use tracing::debug;

use crate::error::ApiError;
use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (window title, whether to attach the keydown listener)
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Writes the running configuration to `config.toml`.
///
/// ## Arguments
/// * `path` - Explicit file; `None` uses `ABACUS_CONFIG_PATH` or the platform
///   config directory
///
/// ## Returns
/// The path written, for display in the frontend
///
/// ## Errors
/// - `VALIDATION_ERROR` if a value is out of range
/// - `CONFIG_ERROR` if the file cannot be written
pub fn save_config(config: &ConfigState, path: Option<PathBuf>) -> Result<String, ApiError> {
    debug!(?path, "save_config command");

    let written = config.save(path)?;
    Ok(written.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_get_config_returns_copy() {
        let config = ConfigState {
            precision: 4,
            ..ConfigState::default()
        };
        assert_eq!(get_config(&config), config);
    }

    #[test]
    fn test_config_json_is_camel_case() {
        let json = serde_json::to_value(get_config(&ConfigState::default())).unwrap();
        assert_eq!(json["precision"], 2);
        assert_eq!(json["keyboardEnabled"], true);
        assert_eq!(json["windowTitle"], "Abacus");
    }

    #[test]
    fn test_save_config_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = ConfigState {
            precision: 6,
            ..ConfigState::default()
        };

        let written = save_config(&config, Some(path.clone())).unwrap();
        assert_eq!(written, path.display().to_string());
        assert_eq!(ConfigState::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_save_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = ConfigState {
            precision: 42,
            ..ConfigState::default()
        };

        let err = save_config(&config, Some(path.clone())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(!path.exists());
    }

    #[test]
    fn test_save_config_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = save_config(&ConfigState::default(), Some(blocker.join("config.toml"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.contains("not-a-dir"));
    }
}
