use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::types::{Direction, GameAction, Point};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);
    gs.apply_action(GameAction::TogglePause);
    let mut snap = GameSnapshot::default();

    // Warm-up.
    let _ = gs.tick(16);
    let _ = gs.apply_action(GameAction::Turn(Direction::Down));
    gs.snapshot_into(&mut snap);

    let allocs = with_alloc_counting(|| {
        // Plain ticks should be allocation-free.
        for _ in 0..200 {
            let _ = gs.tick(16);
        }

        // Eat/grow drives body growth and food placement.
        for _ in 0..50 {
            gs.set_snake(&[Point::new(1, 1)], Direction::Right);
            gs.set_food(Point::new(2, 1));
            let _ = gs.tick(gs.tick_interval_ms());
        }

        // Turns, restarts, and snapshots are per-frame operations.
        for _ in 0..50 {
            let _ = gs.apply_action(GameAction::Turn(Direction::Up));
            let _ = gs.apply_action(GameAction::Turn(Direction::Right));
            gs.snapshot_into(&mut snap);
            if gs.game_over() {
                let _ = gs.apply_action(GameAction::Restart);
                let _ = gs.apply_action(GameAction::TogglePause);
            }
        }
    });

    assert!(allocs == 0, "expected zero allocations, counted {}", allocs);
}
