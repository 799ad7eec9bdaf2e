//! Terminal Pong and Game of Life (workspace facade crate).
//!
//! The games live in dedicated crates under `crates/`; this package re-exports
//! them as `term_arcade::{core,engine,input,term,types}` and adds the process
//! edges shared by both binaries: env configuration, logging, and argument
//! handling.

pub mod cli;
pub mod config;
pub mod logging;

pub use term_arcade_core as core;
pub use term_arcade_engine as engine;
pub use term_arcade_input as input;
pub use term_arcade_term as term;
pub use term_arcade_types as types;

pub use config::ArcadeConfig;
