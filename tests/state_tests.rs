//! Simulation scenarios for the core state machine.

use tui_snake::core::GameState;
use tui_snake::types::{
    Direction, GameAction, Point, GRID_SIZE, INITIAL_TICK_MS, MIN_TICK_MS, SPAWN,
};

/// A fresh game that has been unpaused.
fn running_state(seed: u32) -> GameState {
    let mut state = GameState::new(seed);
    assert!(state.apply_action(GameAction::TogglePause));
    state
}

/// Advance exactly one snake step.
fn one_step(state: &mut GameState) {
    let interval = state.tick_interval_ms();
    assert!(state.tick(interval), "expected a step after {}ms", interval);
}

/// Park the snake at (1,1) heading right with food directly ahead, then step.
fn eat_once(state: &mut GameState) {
    state.set_snake(&[Point::new(1, 1)], Direction::Right);
    state.set_food(Point::new(2, 1));
    one_step(state);
}

#[test]
fn test_head_moves_one_cell_along_the_active_direction() {
    for dir in [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ] {
        let mut state = running_state(1);
        state.set_snake(&[SPAWN], dir);
        // Keep the food out of the way so the move is a pure translation.
        state.set_food(Point::new(0, 0));

        one_step(&mut state);

        let head = state.head();
        let moved = (head.x - SPAWN.x).abs() + (head.y - SPAWN.y).abs();
        assert_eq!(moved, 1, "one step in {:?} must move one cell", dir);
        assert_eq!(head, SPAWN.step(dir));
        assert_eq!(state.body().len(), 1);
    }
}

#[test]
fn test_eating_grows_scores_and_relocates_food() {
    let mut state = running_state(7);
    state.set_food(Point::new(11, 10));

    one_step(&mut state);

    assert_eq!(state.body(), &[Point::new(11, 10), Point::new(10, 10)]);
    assert_eq!(state.score(), 1);
    assert!(state.food().in_bounds());
    assert!(!state.body().contains(&state.food()));
}

#[test]
fn test_wall_collision_ends_the_game_without_moving() {
    let mut state = running_state(1);
    state.set_snake(&[Point::new(0, 5)], Direction::Left);

    one_step(&mut state);

    assert!(state.game_over());
    assert_eq!(state.body(), &[Point::new(0, 5)]);
}

#[test]
fn test_all_four_walls_are_fatal() {
    let cases = [
        (Point::new(0, 5), Direction::Left),
        (Point::new(GRID_SIZE - 1, 5), Direction::Right),
        (Point::new(5, 0), Direction::Up),
        (Point::new(5, GRID_SIZE - 1), Direction::Down),
    ];
    for (head, dir) in cases {
        let mut state = running_state(1);
        state.set_snake(&[head], dir);
        one_step(&mut state);
        assert!(state.game_over(), "{:?} into the wall should end the game", dir);
    }
}

#[test]
fn test_self_collision() {
    // Moving away from the body is legal.
    let body = [Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)];
    let mut state = running_state(1);
    state.set_snake(&body, Direction::Right);
    state.set_food(Point::new(0, 0));
    one_step(&mut state);
    assert!(!state.game_over());
    assert_eq!(
        state.body(),
        &[Point::new(6, 5), Point::new(5, 5), Point::new(4, 5)]
    );

    // Moving into the second segment is fatal, and the body stays put.
    let mut state = running_state(1);
    state.set_snake(&body, Direction::Left);
    one_step(&mut state);
    assert!(state.game_over());
    assert_eq!(state.body(), &body);
}

#[test]
fn test_moving_into_the_vacating_tail_cell_is_fatal() {
    // Square loop: the head's next cell is the tail, which would be vacated
    // this very step. The collision scan runs against the pre-move body, so
    // this still ends the game.
    let body = [
        Point::new(5, 5),
        Point::new(5, 6),
        Point::new(6, 6),
        Point::new(6, 5),
    ];
    let mut state = running_state(1);
    state.set_snake(&body, Direction::Right);

    one_step(&mut state);

    assert!(state.game_over());
    assert_eq!(state.body(), &body);
}

#[test]
fn test_speed_scales_with_score_down_to_the_floor() {
    let mut state = running_state(3);
    assert_eq!(state.tick_interval_ms(), INITIAL_TICK_MS);

    for _ in 0..4 {
        eat_once(&mut state);
    }
    assert_eq!(state.score(), 4);
    assert_eq!(state.tick_interval_ms(), INITIAL_TICK_MS);

    eat_once(&mut state);
    assert_eq!(state.score(), 5);
    assert_eq!(state.tick_interval_ms(), 140);

    // Ten speedups land exactly on the floor.
    for _ in 0..45 {
        eat_once(&mut state);
    }
    assert_eq!(state.score(), 50);
    assert_eq!(state.tick_interval_ms(), MIN_TICK_MS);

    // Further multiples of 5 do not go below the floor.
    for _ in 0..10 {
        eat_once(&mut state);
    }
    assert_eq!(state.score(), 60);
    assert_eq!(state.tick_interval_ms(), MIN_TICK_MS);
}

#[test]
fn test_food_is_never_placed_on_the_body() {
    for seed in 0..25 {
        let mut state = running_state(seed);
        for _ in 0..10 {
            eat_once(&mut state);
            assert!(
                !state.body().contains(&state.food()),
                "seed {} placed food on the snake",
                seed
            );
        }
    }
}

#[test]
fn test_reversal_request_leaves_direction_unchanged() {
    let mut state = running_state(1);
    assert_eq!(state.direction(), Direction::Right);

    assert!(!state.apply_action(GameAction::Turn(Direction::Left)));
    assert_eq!(state.direction(), Direction::Right);

    assert!(state.apply_action(GameAction::Turn(Direction::Down)));
    assert!(!state.apply_action(GameAction::Turn(Direction::Up)));
    assert_eq!(state.direction(), Direction::Down);
}

#[test]
fn test_pause_double_toggle_returns_to_the_same_state() {
    let mut state = running_state(1);

    state.apply_action(GameAction::TogglePause);
    state.apply_action(GameAction::TogglePause);
    assert!(!state.paused());

    // Ticks during the paused window must not have advanced anything.
    let head_before = state.head();
    let mut paused = running_state(1);
    paused.apply_action(GameAction::TogglePause);
    assert!(!paused.tick(INITIAL_TICK_MS * 4));
    assert_eq!(paused.head(), head_before);
}

#[test]
fn test_game_over_is_terminal_until_restart() {
    let mut state = running_state(1);
    state.set_snake(&[Point::new(0, 5)], Direction::Left);
    one_step(&mut state);
    assert!(state.game_over());

    assert!(!state.apply_action(GameAction::Turn(Direction::Up)));
    assert!(!state.apply_action(GameAction::TogglePause));
    assert!(!state.tick(INITIAL_TICK_MS * 10));
    assert!(state.game_over());

    assert!(state.apply_action(GameAction::Restart));
    assert!(!state.game_over());
    assert!(state.paused());
    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.body(), &[SPAWN]);
    assert_eq!(state.direction(), Direction::Right);
    assert_eq!(state.score(), 0);
    assert_eq!(state.tick_interval_ms(), INITIAL_TICK_MS);
}
