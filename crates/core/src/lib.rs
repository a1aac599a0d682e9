//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI, clocks, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Testable**: Time is fed in as elapsed milliseconds, never sampled
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Allocation-free tick and snapshot paths
//!
//! # Module Structure
//!
//! - [`state`]: complete game state and the fixed-timestep tick
//! - [`snapshot`]: render-facing copy of the state
//! - [`rng`]: seeded LCG used for food placement
//!
//! # Game Rules
//!
//! - The snake steps one cell per interval; the interval starts at 150ms and
//!   shrinks by 10ms every 5 points, floored at 50ms.
//! - Leaving the 20x20 grid or touching any body segment ends the game.
//! - Eating food grows the snake by one and relocates the food to a random
//!   free cell.
//! - Turn requests that reverse the current heading are ignored.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, GameAction};
//!
//! // Games start paused; the first pause toggle begins play.
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::TogglePause);
//!
//! game.apply_action(GameAction::Turn(Direction::Down));
//! game.tick(150);
//!
//! assert!(!game.game_over());
//! ```

pub mod rng;
pub mod snapshot;
pub mod state;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use state::{Body, GameState};
