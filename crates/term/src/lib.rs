//! Terminal rendering module.
//!
//! Split into a pure view ([`GameView`], unit-testable, no I/O), a
//! framebuffer of styled cells, and a renderer that flushes framebuffers to
//! the terminal with changed-run diffing.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
