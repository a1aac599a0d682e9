//! Render-facing snapshot of the game state.
//!
//! Rendering collaborators consume this instead of poking at `GameState`
//! internals. `GameState::snapshot_into` refills a caller-owned snapshot
//! without allocating, so a render loop can keep one around.

use arrayvec::ArrayVec;

use tui_snake_types::{Direction, Point, INITIAL_TICK_MS, MAX_SNAKE_LEN, SPAWN};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    /// Snake segments, head at index 0.
    pub body: ArrayVec<Point, MAX_SNAKE_LEN>,
    pub food: Point,
    pub direction: Direction,
    pub score: u32,
    pub tick_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            body: ArrayVec::new(),
            food: SPAWN,
            direction: Direction::Right,
            score: 0,
            tick_interval_ms: INITIAL_TICK_MS,
            paused: true,
            game_over: false,
            episode_id: 0,
        }
    }
}
