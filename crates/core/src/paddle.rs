//! Paddles - fixed-column vertical spans

use crate::types::{
    Player, FIELD_HEIGHT, FIELD_MIN_Y, LEFT_PADDLE_START, LEFT_PADDLE_X, PADDLE_HEIGHT,
    RIGHT_PADDLE_START, RIGHT_PADDLE_X,
};

/// A paddle occupies rows `start..=end()` on a fixed column.
///
/// The span always stays within `FIELD_MIN_Y..=FIELD_HEIGHT - 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paddle {
    column: i16,
    start: i16,
    /// +1 when the paddle faces right (left paddle), -1 when it faces left.
    facing: i16,
}

impl Paddle {
    /// Paddle for `player` at its starting position
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::First => Self {
                column: LEFT_PADDLE_X,
                start: LEFT_PADDLE_START,
                facing: 1,
            },
            Player::Second => Self {
                column: RIGHT_PADDLE_X,
                start: RIGHT_PADDLE_START,
                facing: -1,
            },
        }
    }

    pub fn column(&self) -> i16 {
        self.column
    }

    pub fn start(&self) -> i16 {
        self.start
    }

    pub fn end(&self) -> i16 {
        self.start + PADDLE_HEIGHT - 1
    }

    /// Column directly in front of the paddle, facing the centre line
    pub fn front_column(&self) -> i16 {
        self.column + self.facing
    }

    pub fn covers_row(&self, y: i16) -> bool {
        self.start <= y && y <= self.end()
    }

    /// Move one row up. Returns false at the top wall.
    pub fn move_up(&mut self) -> bool {
        if self.start > FIELD_MIN_Y {
            self.start -= 1;
            true
        } else {
            false
        }
    }

    /// Move one row down. Returns false at the bottom wall.
    pub fn move_down(&mut self) -> bool {
        if self.end() < FIELD_HEIGHT - 2 {
            self.start += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_spans() {
        let left = Paddle::for_player(Player::First);
        assert_eq!((left.start(), left.end()), (5, 7));
        assert_eq!(left.front_column(), LEFT_PADDLE_X + 1);

        let right = Paddle::for_player(Player::Second);
        assert_eq!((right.start(), right.end()), (17, 19));
        assert_eq!(right.front_column(), RIGHT_PADDLE_X - 1);
    }

    #[test]
    fn clamped_at_both_walls() {
        let mut p = Paddle::for_player(Player::First);
        while p.move_up() {}
        assert_eq!(p.start(), FIELD_MIN_Y);
        assert!(!p.move_up());

        while p.move_down() {}
        assert_eq!(p.end(), FIELD_HEIGHT - 2);
        assert!(!p.move_down());
    }

    #[test]
    fn covers_only_its_span() {
        let p = Paddle::for_player(Player::First);
        assert!(!p.covers_row(4));
        assert!(p.covers_row(5));
        assert!(p.covers_row(7));
        assert!(!p.covers_row(8));
    }
}
