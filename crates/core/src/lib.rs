//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules and state for both games. It has no
//! dependencies on the terminal, making it:
//!
//! - **Deterministic**: the same inputs always produce the same states
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: renderers and input sources are plugged in from outside
//!
//! # Module Structure
//!
//! - [`grid`]: 25x80 toroidal Life grid and the B3/S23 step
//! - [`pattern`]: pattern-file parsing and loading
//! - [`life`]: Life state with double buffer, generation counter, and speed
//! - [`ball`], [`paddle`], [`scoring`]: Pong pieces
//! - [`pong`]: Pong match state and per-tick rules
//!
//! # Example
//!
//! ```
//! use term_arcade_core::{parse_pattern, LifeState, PongState};
//! use term_arcade_types::PongAction;
//!
//! let mut life = LifeState::new(parse_pattern(b"***"));
//! life.advance();
//! assert_eq!(life.grid().population(), 3);
//!
//! let mut pong = PongState::new();
//! pong.update();
//! pong.apply_action(PongAction::Advance);
//! assert_eq!(pong.ball().x, 40);
//! ```

pub mod ball;
pub mod grid;
pub mod life;
pub mod paddle;
pub mod pattern;
pub mod pong;
pub mod scoring;

pub use term_arcade_types as types;

pub use ball::Ball;
pub use grid::{next_cell_state, LifeGrid};
pub use life::LifeState;
pub use paddle::Paddle;
pub use pattern::{load_pattern, load_pattern_into, parse_pattern, LoadError};
pub use pong::{PongEvent, PongEvents, PongState};
pub use scoring::Score;
