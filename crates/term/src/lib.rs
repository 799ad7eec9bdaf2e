//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! Views render game state into a plain framebuffer; a [`FrameSink`] then
//! puts the framebuffer on screen (or records it, in tests).
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure so frames can be asserted cell by cell
//! - Full clear-and-redraw every frame

pub mod fb;
pub mod life_view;
pub mod pong_view;
pub mod renderer;
pub mod viewport;

pub use term_arcade_core as core;
pub use term_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use life_view::LifeView;
pub use pong_view::PongView;
pub use renderer::{encode_full_into, FrameRecorder, FrameSink, TerminalRenderer};
pub use viewport::Viewport;
