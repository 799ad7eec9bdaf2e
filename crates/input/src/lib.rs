//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::PongAction`] and
//! [`crate::types::LifeAction`], and provides the [`KeySource`] polling seam
//! the game loops read from.

pub mod map;
pub mod source;

pub use term_arcade_types as types;

pub use map::{life_action, pong_action, should_quit_pong};
pub use source::{KeySource, ScriptedKeys, TerminalKeys};
