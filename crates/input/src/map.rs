//! Key mapping from terminal events to game actions.

use crate::types::{LifeAction, Player, PongAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to Pong actions.
///
/// Paddle keys are lowercase only; unknown keys are no-ops.
pub fn pong_action(key: KeyEvent) -> Option<PongAction> {
    match key.code {
        // Player one
        KeyCode::Char('a') => Some(PongAction::PaddleUp(Player::First)),
        KeyCode::Char('z') => Some(PongAction::PaddleDown(Player::First)),

        // Player two
        KeyCode::Char('k') => Some(PongAction::PaddleUp(Player::Second)),
        KeyCode::Char('m') => Some(PongAction::PaddleDown(Player::Second)),

        KeyCode::Char(' ') => Some(PongAction::Advance),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PongAction::Restart),

        _ => None,
    }
}

/// Map keyboard input to Life viewer actions.
pub fn life_action(key: KeyEvent) -> Option<LifeAction> {
    if is_ctrl_c(key) {
        return Some(LifeAction::Quit);
    }
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => Some(LifeAction::SpeedUp),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(LifeAction::SpeedDown),
        KeyCode::Char(' ') => Some(LifeAction::Quit),
        _ => None,
    }
}

/// Check if key should quit Pong. Space is taken by the ball, so `q` quits.
pub fn should_quit_pong(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) || is_ctrl_c(key)
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
