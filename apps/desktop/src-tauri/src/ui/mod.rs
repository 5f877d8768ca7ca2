//! # UI Module
//!
//! Everything between the webview and the engine that is not a command:
//!
//! ```text
//! ui/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── keymap.rs   ◄─── KeyboardEvent.key → engine Key
//! └── widget.rs   ◄─── Element tree and HTML rendering
//! ```

pub mod keymap;
pub mod widget;

pub use keymap::key_for;
pub use widget::Element;
