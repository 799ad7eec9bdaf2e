//! PongView: maps `core::PongState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). The playfield is drawn cell-for-cell at
//! 80x25, followed by the score lines and a key hint.

use crate::core::PongState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Player, FIELD_HEIGHT, FIELD_WIDTH};
use crate::viewport::Viewport;

pub const WALL: char = '|';
pub const BORDER: char = '-';
pub const BALL: char = '*';
pub const PADDLE: char = '|';

/// Rows below the playfield: two score lines, the win line, the hint.
const FOOTER_ROWS: u16 = 4;

#[derive(Debug, Clone, Copy)]
pub struct PongView {
    wall: CellStyle,
    ball: CellStyle,
    first: CellStyle,
    second: CellStyle,
    text: CellStyle,
}

impl Default for PongView {
    fn default() -> Self {
        Self {
            wall: CellStyle::fg(Rgb::new(160, 160, 170)),
            ball: CellStyle::fg(Rgb::new(240, 220, 80)).bold(),
            first: CellStyle::fg(Rgb::new(80, 220, 220)).bold(),
            second: CellStyle::fg(Rgb::new(220, 120, 220)).bold(),
            text: CellStyle::default(),
        }
    }
}

impl PongView {
    /// Width and height of everything this view draws.
    pub fn frame_size() -> (u16, u16) {
        (FIELD_WIDTH as u16, FIELD_HEIGHT as u16 + FOOTER_ROWS)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &PongState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = Self::frame_size();
        let (ox, oy) = viewport.centered_origin(frame_w, frame_h);

        let ball = state.ball();
        let left = state.paddle(Player::First);
        let right = state.paddle(Player::Second);

        for y in 0..FIELD_HEIGHT {
            for x in 0..FIELD_WIDTH {
                let (ch, style) = if x == 0 || x == FIELD_WIDTH - 1 {
                    (WALL, self.wall)
                } else if y == 0 || y == FIELD_HEIGHT - 1 {
                    (BORDER, self.wall)
                } else if x == ball.x && y == ball.y {
                    (BALL, self.ball)
                } else if x == left.column() && left.covers_row(y) {
                    (PADDLE, self.first)
                } else if x == right.column() && right.covers_row(y) {
                    (PADDLE, self.second)
                } else {
                    continue;
                };
                fb.put_char(ox + x as u16, oy + y as u16, ch, style);
            }
        }

        let score = state.score();
        let mut y = oy + FIELD_HEIGHT as u16;
        self.score_line(fb, ox, y, "Points First's player: ", score.first);
        y += 1;
        self.score_line(fb, ox, y, "Points Second's player: ", score.second);
        y += 1;

        if let Some(winner) = state.winner() {
            let msg = match winner {
                Player::First => "Win First player!",
                Player::Second => "Win Second player!",
            };
            fb.put_str(ox, y, msg, self.text.bold());
            y += 1;
            fb.put_str(ox, y, "R - new match, Q - quit", self.text);
        } else {
            y += 1;
            fb.put_str(ox, y, "A/Z, K/M - paddles, Space - ball, Q - quit", self.text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &PongState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn score_line(&self, fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: u32) {
        fb.put_str(x, y, label, self.text);
        fb.put_u64(x + label.chars().count() as u16, y, value as u64, self.text.bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Ball, Score};

    fn full_view() -> Viewport {
        let (w, h) = PongView::frame_size();
        Viewport::new(w, h)
    }

    #[test]
    fn walls_ball_and_paddles() {
        let state = PongState::new();
        let fb = PongView::default().render(&state, full_view());

        assert_eq!(fb.get(0, 0).unwrap().ch, WALL);
        assert_eq!(fb.get(79, 24).unwrap().ch, WALL);
        assert_eq!(fb.get(1, 0).unwrap().ch, BORDER);
        assert_eq!(fb.get(40, 24).unwrap().ch, BORDER);
        assert_eq!(fb.get(39, 12).unwrap().ch, BALL);
        for y in 5..=7 {
            assert_eq!(fb.get(3, y).unwrap().ch, PADDLE);
        }
        assert_eq!(fb.get(3, 8).unwrap().ch, ' ');
        for y in 17..=19 {
            assert_eq!(fb.get(76, y).unwrap().ch, PADDLE);
        }
        assert_eq!(fb.get(40, 12).unwrap().ch, ' ');
    }

    #[test]
    fn scores_and_win_message() {
        let mut state = PongState::new();
        state.set_score(Score {
            first: 7,
            second: 21,
        });
        state.set_ball(Ball::at(10, 10, 1, 1));
        let fb = PongView::default().render(&state, full_view());

        assert!(fb.row_text(25).starts_with("Points First's player: 7"));
        assert!(fb.row_text(26).starts_with("Points Second's player: 21"));
        assert!(fb.row_text(27).starts_with("Win Second player!"));
    }

    #[test]
    fn rendering_does_not_touch_state() {
        let state = PongState::new();
        let before = state.clone();
        let _ = PongView::default().render(&state, Viewport::new(120, 40));
        assert_eq!(state, before);
    }
}
