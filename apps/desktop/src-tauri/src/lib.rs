//! # Abacus Desktop Library
//!
//! Desktop shell for the Abacus calculator: managed state, commands, keyboard
//! mapping and the widget tree. The webview itself is behind the `tauri-app`
//! feature; everything else builds and tests without it.
//!
//! ## Module Organization
//! ```text
//! abacus_desktop_lib/
//! ├── lib.rs          ◄─── You are here (logging, exports)
//! ├── app.rs          ◄─── Tauri setup & run (feature `tauri-app`)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── calculator.rs ◄─ Engine behind a Mutex
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── calculator.rs ◄─ Key press and render commands
//! │   └── config.rs   ◄─── Configuration retrieval & saving
//! ├── ui/
//! │   ├── keymap.rs   ◄─── Keyboard keys → engine keys
//! │   └── widget.rs   ◄─── Element tree and HTML
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod ui;

#[cfg(feature = "tauri-app")]
mod app;

#[cfg(feature = "tauri-app")]
pub use app::run;

use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,abacus=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=abacus=trace` - Show trace for abacus crates only
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Calling it again after a subscriber is installed does nothing.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!("tracing initialized twice without panicking");
    }

    #[test]
    fn test_frontend_keydown_does_not_double_press() {
        let page = include_str!("../../dist/index.html");
        let listener = page
            .split("addEventListener('keydown'")
            .nth(1)
            .unwrap_or_default();
        let prevent = listener.find("event.preventDefault()");
        let invoke = listener.find("invoke('handle_key'");
        assert!(prevent.is_some(), "keydown must cancel the default action");
        assert!(prevent < invoke, "default action must be cancelled before dispatch");
        assert!(page.contains("target.blur()"));
    }
}
