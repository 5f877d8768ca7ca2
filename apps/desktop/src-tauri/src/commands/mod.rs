//! # Commands Module
//!
//! All commands exposed to the webview frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── calculator.rs  ◄─── Key presses, clearing, rendering
//! └── config.rs      ◄─── Configuration retrieval & saving
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  const display = await invoke('press_operator', { symbol: '+' });       │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  app.rs (feature `tauri-app`)                                           │
//! │  ──────                                                                 │
//! │  #[tauri::command]                                                      │
//! │  fn press_operator(                                                     │
//! │      calc: State<'_, CalculatorState>,  ◄── Injected by Tauri          │
//! │      symbol: String,                    ◄── From invoke params         │
//! │  ) -> Result<DisplaySnapshot, ApiError>                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::calculator::press_operator(&calc, &symbol)                   │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: DisplaySnapshot                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The functions here take plain references to managed state, so tests call
//! them directly without a running webview.

pub mod calculator;
pub mod config;
