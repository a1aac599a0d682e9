//! Game state module - the complete snake simulation
//!
//! Owns every mutable field of the game (body, food, heading, score, speed,
//! flags) and advances them with a fixed-timestep tick. No I/O, no clocks:
//! callers feed elapsed milliseconds in, so tests drive time synchronously.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use tui_snake_types::{
    Direction, GameAction, Point, INITIAL_TICK_MS, MAX_SNAKE_LEN, MIN_TICK_MS, SPAWN,
    SPEEDUP_EVERY_POINTS, SPEEDUP_STEP_MS,
};

/// Snake body storage: head first, fixed capacity, no heap traffic per step.
pub type Body = ArrayVec<Point, MAX_SNAKE_LEN>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Snake segments, head at index 0.
    body: Body,
    food: Point,
    direction: Direction,
    score: u32,
    /// Milliseconds between snake steps (shrinks as the score grows).
    tick_interval_ms: u32,
    /// Elapsed time accumulated toward the next step.
    tick_timer_ms: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    paused: bool,
    game_over: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The game starts paused; the first `TogglePause` begins play.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut body = Body::new();
        body.push(SPAWN);
        let food = free_cell(&mut rng, &body);

        Self {
            body,
            food,
            direction: Direction::Right,
            score: 0,
            tick_interval_ms: INITIAL_TICK_MS,
            tick_timer_ms: 0,
            episode_id: 0,
            paused: true,
            game_over: false,
            rng,
        }
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Overwrite the snake layout and heading.
    ///
    /// Deterministic setup hook for scenario tests and benches. Segments are
    /// head first, as in [`GameState::body`].
    pub fn set_snake(&mut self, segments: &[Point], direction: Direction) {
        debug_assert!(!segments.is_empty() && segments.len() <= MAX_SNAKE_LEN);
        self.body.clear();
        for &seg in segments {
            self.body.push(seg);
        }
        self.direction = direction;
    }

    /// Move the food to a fixed cell.
    ///
    /// Deterministic setup hook for scenario tests and benches.
    pub fn set_food(&mut self, food: Point) {
        debug_assert!(food.in_bounds());
        self.food = food;
    }

    /// Apply a game action. Returns whether the action changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => self.set_direction(dir),
            GameAction::TogglePause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                let seed = self.rng.state();
                let next_episode = self.episode_id.wrapping_add(1);
                *self = Self::new(seed);
                self.episode_id = next_episode;
                true
            }
        }
    }

    /// Request a new heading.
    ///
    /// Rejected while game over and for 180-degree reversals; anything else
    /// becomes the active direction consumed by the next step.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.game_over || requested == self.direction.opposite() {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Advance timers and step the snake when the interval elapses.
    ///
    /// Call once per frame with the elapsed milliseconds. Returns true when a
    /// step ran. While paused or game over this is a no-op, so the caller's
    /// timer can keep running without mutating state.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        self.tick_timer_ms += elapsed_ms;
        if self.tick_timer_ms < self.tick_interval_ms {
            return false;
        }

        // Zeroing (rather than subtracting) restarts the period, so a speed
        // change inside step() is measured fresh under the new interval.
        self.tick_timer_ms = 0;
        self.step();
        true
    }

    /// One simulation step: move, collide, eat, grow.
    fn step(&mut self) {
        let next = self.head().step(self.direction);

        if !next.in_bounds() {
            self.game_over = true;
            return;
        }

        // The scan covers the full pre-move body: stepping into the cell the
        // tail vacates this step still ends the game.
        if self.body.iter().any(|&seg| seg == next) {
            self.game_over = true;
            return;
        }

        self.body.insert(0, next);

        if next == self.food {
            self.score += 1;
            if self.score % SPEEDUP_EVERY_POINTS == 0 && self.tick_interval_ms > MIN_TICK_MS {
                self.tick_interval_ms =
                    (self.tick_interval_ms - SPEEDUP_STEP_MS).max(MIN_TICK_MS);
            }
            self.food = free_cell(&mut self.rng, &self.body);
        } else {
            self.body.pop();
        }
    }

    /// Fill a caller-owned snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        out.body.clear();
        let _ = out.body.try_extend_from_slice(&self.body);
        out.food = self.food;
        out.direction = self.direction;
        out.score = self.score;
        out.tick_interval_ms = self.tick_interval_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Draw grid cells until one misses the snake (rejection sampling).
///
/// A live game always has a free cell: wall or self collision ends the game
/// long before the body can cover the grid.
fn free_cell(rng: &mut SimpleRng, body: &[Point]) -> Point {
    debug_assert!(body.len() < MAX_SNAKE_LEN);
    loop {
        let candidate = Point::new(
            rng.next_range(tui_snake_types::GRID_SIZE as u32) as i8,
            rng.next_range(tui_snake_types::GRID_SIZE as u32) as i8,
        );
        if !body.iter().any(|&seg| seg == candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_snake_types::GRID_SIZE;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.body(), &[SPAWN]);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_interval_ms(), INITIAL_TICK_MS);
        assert!(state.paused());
        assert!(!state.game_over());
        assert_eq!(state.episode_id(), 0);
        assert!(state.food().in_bounds());
        assert_ne!(state.food(), SPAWN);
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut state = GameState::new(1);

        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.direction(), Direction::Right);

        assert!(state.set_direction(Direction::Up));
        assert!(!state.set_direction(Direction::Down));
        assert_eq!(state.direction(), Direction::Up);
    }

    #[test]
    fn test_pause_toggle_is_an_involution() {
        let mut state = GameState::new(1);
        assert!(state.paused());

        state.apply_action(GameAction::TogglePause);
        assert!(!state.paused());
        state.apply_action(GameAction::TogglePause);
        assert!(state.paused());
    }

    #[test]
    fn test_tick_accumulates_to_the_interval() {
        let mut state = GameState::new(1);
        state.apply_action(GameAction::TogglePause);

        // 16ms frames: nine frames stay short of 150ms, the tenth steps.
        for _ in 0..9 {
            assert!(!state.tick(16));
        }
        assert!(state.tick(16));
        assert_eq!(state.head(), SPAWN.step(Direction::Right));
    }

    #[test]
    fn test_tick_is_inert_while_paused() {
        let mut state = GameState::new(1);
        assert!(!state.tick(10_000));
        assert_eq!(state.head(), SPAWN);
    }

    #[test]
    fn test_input_ignored_after_game_over() {
        let mut state = GameState::new(1);
        state.set_snake(&[Point::new(GRID_SIZE - 1, 5)], Direction::Right);
        state.apply_action(GameAction::TogglePause);

        assert!(state.tick(INITIAL_TICK_MS));
        assert!(state.game_over());

        assert!(!state.apply_action(GameAction::Turn(Direction::Up)));
        assert!(!state.apply_action(GameAction::TogglePause));
        assert!(!state.tick(10_000));
    }

    #[test]
    fn test_restart_reinitializes_and_bumps_episode() {
        let mut state = GameState::new(12345);
        state.set_snake(&[Point::new(0, 5)], Direction::Up);
        state.apply_action(GameAction::TogglePause);
        state.tick(INITIAL_TICK_MS);
        assert!(state.game_over());

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.body(), &[SPAWN]);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_interval_ms(), INITIAL_TICK_MS);
        assert!(state.paused());
        assert!(!state.game_over());
    }

    #[test]
    fn test_food_placement_avoids_a_long_body() {
        let mut rng = SimpleRng::new(9);
        // Occupy most of a row to force at least some rejections over time.
        let mut body = Body::new();
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE - 1 {
                body.push(Point::new(x, y));
            }
        }

        for _ in 0..50 {
            let cell = free_cell(&mut rng, &body);
            assert!(cell.in_bounds());
            assert!(!body.contains(&cell));
        }
    }
}
