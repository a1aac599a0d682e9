//! GameView: maps the game state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_snake_core::GameState;
use tui_snake_types::{Point, GRID_SIZE};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the snake playfield.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// Render into a caller-owned framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let field_w = (GRID_SIZE as u16) * self.cell_w;
        let field_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let field = CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG);

        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', field);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Grid dots for empty cells.
        let dot = CellStyle::new(Rgb::new(60, 60, 72), PLAYFIELD_BG);
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                self.put_cell(fb, start_x, start_y, Point::new(x, y), '·', dot);
            }
        }

        // Food.
        let food_style = CellStyle::new(Rgb::new(220, 70, 70), PLAYFIELD_BG);
        self.put_cell(fb, start_x, start_y, state.food(), '●', food_style);

        // Snake (tail first so the head wins any overlap in a lost game).
        let body_style = CellStyle::new(Rgb::new(90, 200, 110), PLAYFIELD_BG);
        let head_style = CellStyle::bold(Rgb::new(140, 240, 150), PLAYFIELD_BG);
        for &seg in state.body().iter().skip(1).rev() {
            self.fill_cell(fb, start_x, start_y, seg, '█', body_style);
        }
        self.fill_cell(fb, start_x, start_y, state.head(), '█', head_style);

        self.draw_side_panel(fb, state, viewport, start_x, start_y, frame_w);

        if state.game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if state.paused() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Single glyph centered in a grid cell (food, dots).
    fn put_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Point,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, cell);
        fb.put_char(px, py, ch, style);
    }

    /// Fill a whole grid cell (snake segments).
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Point,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, cell);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, cell: Point) -> (u16, u16) {
        let px = start_x + 1 + (cell.x as u16) * self.cell_w;
        let py = start_y + 1 + (cell.y as u16) * self.cell_h;
        (px, py)
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::bold(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", state.score()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{} ms", state.tick_interval_ms()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATUS", label);
        y = y.saturating_add(1);
        let status = if state.game_over() {
            "game over"
        } else if state.paused() {
            "paused"
        } else {
            "running"
        };
        fb.put_str(panel_x, y, status, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for line in [
            "arrows  steer",
            "space   pause",
            "r       restart",
            "q       quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::bold(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
        fb.put_str(x, mid_y, text, style);
    }
}
