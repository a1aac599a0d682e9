//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, UI rendering, tests).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 20x20 grid:
//!
//! - **Columns**: indexed 0-19
//! - **Rows**: indexed 0-19
//! - **Spawn cell**: (10, 10), the grid center
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Fixed timestep the binary drives the core with |
//! | `INITIAL_TICK_MS` | 150 | Interval between snake steps at score 0 |
//! | `SPEEDUP_STEP_MS` | 10 | Interval reduction per speedup |
//! | `MIN_TICK_MS` | 50 | Interval floor; the snake never moves faster |
//!
//! The interval shrinks by `SPEEDUP_STEP_MS` each time the score reaches a
//! multiple of `SPEEDUP_EVERY_POINTS`, clamped at `MIN_TICK_MS`.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, Point, GRID_SIZE};
//!
//! // A direction knows its 180-degree opposite
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! // Points step one cell at a time
//! let head = Point::new(10, 10);
//! assert_eq!(head.step(Direction::Right), Point::new(11, 10));
//!
//! // Parse a game action (for scripted drivers)
//! let action = GameAction::from_str("pause").unwrap();
//! assert_eq!(action, GameAction::TogglePause);
//!
//! assert_eq!(GRID_SIZE, 20);
//! ```

/// Playfield width and height in cells (the grid is square).
pub const GRID_SIZE: i8 = 20;

/// Upper bound on snake length: one segment per grid cell.
pub const MAX_SNAKE_LEN: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Fixed timestep the binary drives the simulation with (16ms ~ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Interval between snake steps at score 0.
pub const INITIAL_TICK_MS: u32 = 150;

/// Interval reduction applied at each speedup.
pub const SPEEDUP_STEP_MS: u32 = 10;

/// Interval floor in milliseconds.
pub const MIN_TICK_MS: u32 = 50;

/// A speedup fires each time the score reaches a multiple of this.
pub const SPEEDUP_EVERY_POINTS: u32 = 5;

/// Snake spawn cell (grid center).
pub const SPAWN: Point = Point::new(10, 10);

/// A grid cell position.
///
/// Coordinates are signed so that off-grid candidate positions (one step past
/// an edge) are representable; [`Point::in_bounds`] decides validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `direction` (may be off-grid).
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether this cell lies inside the playfield.
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_SIZE && self.y >= 0 && self.y < GRID_SIZE
    }
}

/// Snake heading.
///
/// The coordinate system is screen-oriented: y grows downward, so `Up`
/// decreases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Unit offset for one step in this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// The 180-degree opposite direction.
    ///
    /// A turn request equal to the opposite of the active direction is the
    /// one kind of input the game rejects.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are the only way input reaches the simulation. Each maps to
/// a specific state-machine transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading (rejected if it reverses the current one)
    Turn(Direction),
    /// Toggle the paused flag (resume from the initial paused state)
    TogglePause,
    /// Reinitialize all state and pause
    Restart,
}

impl GameAction {
    /// Parse action from string (for scripted drivers)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Turn(Direction::Left)));
    /// assert_eq!(GameAction::from_str("pause"), Some(GameAction::TogglePause));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(GameAction::TogglePause),
            "restart" => Some(GameAction::Restart),
            other => Direction::from_str(other).map(GameAction::Turn),
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(dir) => dir.as_str(),
            GameAction::TogglePause => "pause",
            GameAction::Restart => "restart",
        }
    }
}
