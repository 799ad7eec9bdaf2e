//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by both games.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, rendering, input mapping).
//!
//! # Game of Life Grid
//!
//! - **Rows**: 25 (indexed 0-24)
//! - **Columns**: 80 (indexed 0-79)
//! - Edges wrap (toroidal topology)
//!
//! # Pong Playfield
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIELD_WIDTH` | 80 | Columns, including both side walls |
//! | `FIELD_HEIGHT` | 25 | Rows, including top/bottom border |
//! | `FIELD_MIN_Y` | 1 | Topmost row a paddle may occupy |
//! | `PADDLE_HEIGHT` | 3 | Paddle span length |
//! | `LEFT_PADDLE_X` | 3 | Player one's paddle column |
//! | `RIGHT_PADDLE_X` | 76 | Player two's paddle column |
//! | `WIN_SCORE` | 21 | Points needed to win a match |
//!
//! # Speed Levels
//!
//! The Life viewer sleeps between generations according to a discrete speed level:
//!
//! | Level | Delay |
//! |-------|-------|
//! | 1 | 2000ms |
//! | 2 | 1500ms |
//! | 3 | 1000ms |
//! | 4 | 750ms |
//! | 5 | 500ms |
//! | 6 | 350ms |
//! | 7 | 250ms |
//! | 8 | 150ms |
//! | 9 | 100ms |
//! | 10 | 50ms |
//!
//! # Examples
//!
//! ```
//! use term_arcade_types::{speed_delay_ms, LifeAction, Player, LIFE_COLS, LIFE_ROWS};
//!
//! assert_eq!(LIFE_ROWS, 25);
//! assert_eq!(LIFE_COLS, 80);
//! assert_eq!(speed_delay_ms(3), 1000);
//!
//! let action = LifeAction::from_str("speedUp").unwrap();
//! assert_eq!(action, LifeAction::SpeedUp);
//!
//! assert_eq!(Player::First.opponent(), Player::Second);
//! ```

/// Life grid height in cells (25 rows)
pub const LIFE_ROWS: usize = 25;

/// Life grid width in cells (80 columns)
pub const LIFE_COLS: usize = 80;

/// Slowest speed level
pub const MIN_SPEED: u8 = 1;

/// Fastest speed level
pub const MAX_SPEED: u8 = 10;

/// Speed level used when nothing else is configured
pub const DEFAULT_SPEED: u8 = 3;

/// Inter-generation delay per speed level, index 0 = level 1
pub const SPEED_DELAYS_MS: [u32; 10] = [2000, 1500, 1000, 750, 500, 350, 250, 150, 100, 50];

/// Length of one input-polling slice inside the Life delay (10ms)
pub const POLL_SLICE_MS: u32 = 10;

/// Pong playfield width in columns, walls included
pub const FIELD_WIDTH: i16 = 80;

/// Pong playfield height in rows, border included
pub const FIELD_HEIGHT: i16 = 25;

/// Topmost row a paddle may occupy
pub const FIELD_MIN_Y: i16 = 1;

/// Paddle span length in rows
pub const PADDLE_HEIGHT: i16 = 3;

/// Player one's paddle column
pub const LEFT_PADDLE_X: i16 = 3;

/// Player two's paddle column
pub const RIGHT_PADDLE_X: i16 = 76;

/// Player one's paddle top row at the start of an exchange
pub const LEFT_PADDLE_START: i16 = 5;

/// Player two's paddle top row at the start of an exchange
pub const RIGHT_PADDLE_START: i16 = 17;

/// Ball column at the start of an exchange
pub const BALL_START_X: i16 = 39;

/// Ball row at the start of an exchange
pub const BALL_START_Y: i16 = 12;

/// Score that ends a match
pub const WIN_SCORE: u32 = 21;

/// Delay for a speed level, clamped into `MIN_SPEED..=MAX_SPEED`.
pub fn speed_delay_ms(speed: u8) -> u32 {
    let level = speed.clamp(MIN_SPEED, MAX_SPEED);
    SPEED_DELAYS_MS[(level - 1) as usize]
}


/// The two Pong players
///
/// - **First**: left paddle, scores when the ball reaches the right wall
/// - **Second**: right paddle, scores when the ball reaches the left wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::First => "First",
            Player::Second => "Second",
        }
    }
}

/// Control-loop state shared by both games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Stopped,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

/// Pong actions that can be driven from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PongAction {
    /// Move a player's paddle one row up
    PaddleUp(Player),
    /// Move a player's paddle one row down
    PaddleDown(Player),
    /// Advance the ball one step along its velocity
    Advance,
    /// Start a new match after a win
    Restart,
}

impl PongAction {
    /// Parse an action name (camelCase, as shown in key hints)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_arcade_types::{PongAction, Player};
    ///
    /// assert_eq!(PongAction::from_str("advance"), Some(PongAction::Advance));
    /// assert_eq!(PongAction::from_str("secondUp"), Some(PongAction::PaddleUp(Player::Second)));
    /// assert_eq!(PongAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "firstUp" => Some(PongAction::PaddleUp(Player::First)),
            "firstDown" => Some(PongAction::PaddleDown(Player::First)),
            "secondUp" => Some(PongAction::PaddleUp(Player::Second)),
            "secondDown" => Some(PongAction::PaddleDown(Player::Second)),
            "advance" => Some(PongAction::Advance),
            "restart" => Some(PongAction::Restart),
            _ => None,
        }
    }
}

/// Life viewer actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeAction {
    SpeedUp,
    SpeedDown,
    Quit,
}

impl LifeAction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "speedUp" => Some(LifeAction::SpeedUp),
            "speedDown" => Some(LifeAction::SpeedDown),
            "quit" => Some(LifeAction::Quit),
            _ => None,
        }
    }
}
