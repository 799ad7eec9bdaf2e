//! LifeView: maps `core::LifeState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). The 25x80 grid sits inside a one-cell
//! border with the status line two rows below it.

use crate::core::LifeState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{LIFE_COLS, LIFE_ROWS};
use crate::viewport::Viewport;

pub const LIVE: char = '*';

#[derive(Debug, Clone, Copy)]
pub struct LifeView {
    border: CellStyle,
    live: CellStyle,
    text: CellStyle,
}

impl Default for LifeView {
    fn default() -> Self {
        Self {
            border: CellStyle::fg(Rgb::new(120, 120, 130)),
            live: CellStyle::fg(Rgb::new(100, 220, 120)).bold(),
            text: CellStyle::default(),
        }
    }
}

impl LifeView {
    /// Width and height of everything this view draws.
    pub fn frame_size() -> (u16, u16) {
        (LIFE_COLS as u16 + 2, LIFE_ROWS as u16 + 4)
    }

    pub fn render_into(&self, state: &LifeState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = Self::frame_size();
        let (ox, oy) = viewport.centered_origin(frame_w, frame_h);

        fb.draw_frame(ox, oy, frame_w, LIFE_ROWS as u16 + 2, '|', '-', self.border);

        let grid = state.grid();
        for row in 0..LIFE_ROWS {
            let Some(cells) = grid.row(row) else { continue };
            for (col, &alive) in cells.iter().enumerate() {
                if alive {
                    fb.put_char(ox + 1 + col as u16, oy + 1 + row as u16, LIVE, self.live);
                }
            }
        }

        let y = oy + frame_h - 1;
        let mut x = ox;
        fb.put_str(x, y, "Speed: ", self.text);
        x = fb.put_u64(x + 7, y, state.speed() as u64, self.text.bold());
        let hint = " | A/Z - speed, Space - exit | Gen: ";
        fb.put_str(x, y, hint, self.text);
        x = fb.put_u64(x + hint.len() as u16, y, state.generation(), self.text);
        let alive = " | Alive: ";
        fb.put_str(x, y, alive, self.text);
        fb.put_u64(x + alive.len() as u16, y, grid.population() as u64, self.text);
    }

    pub fn render(&self, state: &LifeState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }
}
