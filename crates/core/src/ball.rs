//! Ball - position and unit velocity on the Pong playfield

use crate::types::{BALL_START_X, BALL_START_Y, FIELD_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    pub x: i16,
    pub y: i16,
    /// Horizontal velocity, one of -1, 0, 1
    pub speed_x: i16,
    /// Vertical velocity, one of -1, 0, 1
    pub speed_y: i16,
}

impl Ball {
    /// Ball at the serve position, heading down and right
    pub fn new() -> Self {
        Self {
            x: BALL_START_X,
            y: BALL_START_Y,
            speed_x: 1,
            speed_y: 1,
        }
    }

    pub fn at(x: i16, y: i16, speed_x: i16, speed_y: i16) -> Self {
        Self {
            x,
            y,
            speed_x: speed_x.signum(),
            speed_y: speed_y.signum(),
        }
    }

    /// Move one step along the current velocity
    pub fn advance(&mut self) {
        self.x += self.speed_x;
        self.y += self.speed_y;
    }

    /// Reflect off the top/bottom rows just inside the border.
    ///
    /// Heading is forced down on row 1 and up on row `FIELD_HEIGHT - 2`.
    /// Returns true when the vertical velocity changed.
    pub fn bounce_walls(&mut self) -> bool {
        let before = self.speed_y;
        if self.y == FIELD_HEIGHT - 2 {
            self.speed_y = -1;
        } else if self.y == 1 {
            self.speed_y = 1;
        }
        self.speed_y != before
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}
