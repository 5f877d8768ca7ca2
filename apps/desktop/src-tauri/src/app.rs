//! # Tauri Application
//!
//! Registers the commands with Tauri and launches the window. Built only
//! with the `tauri-app` feature.

use tauri::{Manager, State};
use tracing::{error, info};

use abacus_core::DisplaySnapshot;

use crate::commands;
use crate::error::ApiError;
use crate::init_tracing;
use crate::state::{CalculatorState, ConfigState};

// =============================================================================
// Command Handlers
// =============================================================================

#[tauri::command]
fn get_display(calc: State<'_, CalculatorState>) -> DisplaySnapshot {
    commands::calculator::get_display(&calc)
}

#[tauri::command]
fn press_digit(
    calc: State<'_, CalculatorState>,
    symbol: String,
) -> Result<DisplaySnapshot, ApiError> {
    commands::calculator::press_digit(&calc, &symbol)
}

#[tauri::command]
fn press_operator(
    calc: State<'_, CalculatorState>,
    symbol: String,
) -> Result<DisplaySnapshot, ApiError> {
    commands::calculator::press_operator(&calc, &symbol)
}

#[tauri::command]
fn clear_entry(calc: State<'_, CalculatorState>) -> DisplaySnapshot {
    commands::calculator::clear_entry(&calc)
}

#[tauri::command]
fn clear_all(calc: State<'_, CalculatorState>) -> DisplaySnapshot {
    commands::calculator::clear_all(&calc)
}

#[tauri::command]
fn press_remove(calc: State<'_, CalculatorState>) -> DisplaySnapshot {
    commands::calculator::press_remove(&calc)
}

#[tauri::command]
fn handle_key(
    calc: State<'_, CalculatorState>,
    config: State<'_, ConfigState>,
    key: String,
) -> Option<DisplaySnapshot> {
    commands::calculator::handle_key(&calc, &config, &key)
}

#[tauri::command]
fn render_calculator(calc: State<'_, CalculatorState>) -> String {
    commands::calculator::render_calculator(&calc)
}

#[tauri::command]
fn get_config(config: State<'_, ConfigState>) -> ConfigState {
    commands::config::get_config(&config)
}

#[tauri::command]
fn save_config(config: State<'_, ConfigState>) -> Result<String, ApiError> {
    commands::config::save_config(&config, None)
}

// =============================================================================
// Startup
// =============================================================================

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,abacus=debug; override with RUST_LOG                │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • config.toml, then ABACUS_* environment variables                  │
/// │     • Falls back to defaults on any error                               │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CalculatorState: engine at the configured precision               │
/// │     • ConfigState: read-only settings                                   │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Title and launch window                                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting Abacus desktop calculator");

    let config = ConfigState::load_or_default(None);
    info!(
        precision = config.precision,
        keyboard = config.keyboard_enabled,
        "Configuration loaded"
    );

    let calculator = CalculatorState::new(config.build_calculator());
    let title = config.window_title.clone();

    let result = tauri::Builder::default()
        .manage(calculator)
        .manage(config)
        .setup(move |app| {
            if let Some(window) = app.get_webview_window("main") {
                window.set_title(&title)?;
            }
            info!("State initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Calculator commands
            get_display,
            press_digit,
            press_operator,
            clear_entry,
            clear_all,
            press_remove,
            handle_key,
            render_calculator,
            // Config commands
            get_config,
            save_config,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        error!("Error while running tauri application: {}", e);
        std::process::exit(1);
    }
}
