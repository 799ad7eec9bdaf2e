//! Two-player terminal Pong.
//!
//! A/Z and K/M move the paddles, Space moves the ball one step, R starts a new
//! match after a win, Q quits.

use anyhow::Result;
use log::info;

use term_arcade::core::PongState;
use term_arcade::engine::run_pong;
use term_arcade::input::TerminalKeys;
use term_arcade::term::TerminalRenderer;
use term_arcade::{logging, ArcadeConfig};

fn main() -> Result<()> {
    let config = ArcadeConfig::from_env();
    if let Err(err) = logging::init(&config) {
        eprintln!("warning: {err:#}");
    }

    let mut state = PongState::new();
    let mut term = TerminalRenderer::new();

    let result = term
        .enter()
        .and_then(|()| run_pong(&mut state, &mut TerminalKeys::new(), &mut term));

    // Always try to restore terminal state.
    let _ = term.exit();

    let outcome = result?;
    info!(
        "final score {}-{} over {} ticks",
        outcome.score.first, outcome.score.second, outcome.ticks
    );
    Ok(())
}
