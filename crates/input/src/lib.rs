//! Terminal input module (core-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_snake_types::GameAction`]; the core
//! decides what each action is allowed to do.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
