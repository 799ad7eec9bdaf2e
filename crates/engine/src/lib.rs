//! Game loops.
//!
//! Each loop owns nothing but a view and a scratch framebuffer: state, keys and
//! the frame sink are passed in, so the same loop drives the real terminal and
//! scripted tests.

pub mod life_loop;
pub mod pong_loop;

pub use term_arcade_core as core;
pub use term_arcade_input as input;
pub use term_arcade_term as term;
pub use term_arcade_types as types;

pub use life_loop::{run_life, LifeOutcome};
pub use pong_loop::{run_pong, PongOutcome};
