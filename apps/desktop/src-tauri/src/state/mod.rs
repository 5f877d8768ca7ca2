//! # State Module
//!
//! Manages application state for the desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types:
//!
//! 1. **Separation of Concerns**: the engine and the settings change for different reasons
//! 2. **Easier Testing**: commands take exactly the state they need
//! 3. **No Contention**: reading config never waits on a key press
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(calculator_state);                                  │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │              ┌───────────────┴───────────────┐                          │
//! │              ▼                               ▼                          │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │   CalculatorState    │        │     ConfigState      │              │
//! │  │                      │        │                      │              │
//! │  │  Arc<Mutex<          │        │  precision           │              │
//! │  │    Calculator        │        │  keyboard_enabled    │              │
//! │  │  >>                  │        │  window_title        │              │
//! │  └──────────────────────┘        └──────────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CalculatorState: Arc<Mutex<T>> serializes key presses               │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;

pub use calculator::CalculatorState;
pub use config::{ConfigState, CONFIG_PATH_ENV};
