//! Conway's Game of Life viewer.
//!
//! `life <pattern-file>`: A/Z change speed, Space quits.

use std::process::ExitCode;

use anyhow::Result;
use log::error;

use term_arcade::cli::pattern_path;
use term_arcade::core::{load_pattern, LifeGrid, LifeState};
use term_arcade::engine::run_life;
use term_arcade::input::TerminalKeys;
use term_arcade::term::TerminalRenderer;
use term_arcade::{logging, ArcadeConfig};

fn main() -> ExitCode {
    let config = ArcadeConfig::from_env();
    if let Err(err) = logging::init(&config) {
        eprintln!("warning: {err:#}");
    }

    let args: Vec<String> = std::env::args().collect();
    let path = match pattern_path(&args) {
        Ok(path) => path,
        Err(usage) => {
            println!("{usage}");
            return ExitCode::from(1);
        }
    };

    let grid = match load_pattern(&path) {
        Ok(grid) => grid,
        Err(err) => {
            error!("{err}");
            println!("Error loading file: {err}");
            return ExitCode::from(1);
        }
    };

    match run(grid, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(grid: LifeGrid, config: &ArcadeConfig) -> Result<()> {
    let mut state = LifeState::with_speed(grid, config.life_speed);
    let mut term = TerminalRenderer::new();

    let result = term
        .enter()
        .and_then(|()| run_life(&mut state, &mut TerminalKeys::new(), &mut term));

    // Always try to restore terminal state.
    let _ = term.exit();
    result.map(|_| ())
}
