//! Pong main loop.
//!
//! There is no timer: each tick renders, runs the rules, then blocks for a
//! single key. A scored point ends the tick early so the reset exchange is
//! drawn before the next key is read.

use anyhow::Result;
use log::{debug, info};

use crate::core::{PongEvent, PongState, Score};
use crate::input::{pong_action, should_quit_pong, KeySource};
use crate::term::{FrameBuffer, FrameSink, PongView, Viewport};
use crate::types::{Player, RunState};

/// Summary of a finished Pong session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PongOutcome {
    pub score: Score,
    pub winner: Option<Player>,
    pub ticks: u64,
}

pub fn run_pong<K, S>(state: &mut PongState, keys: &mut K, sink: &mut S) -> Result<PongOutcome>
where
    K: KeySource,
    S: FrameSink,
{
    let view = PongView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut ticks = 0u64;
    let mut run = RunState::Running;

    info!("pong started");

    while run.is_running() {
        ticks += 1;
        view.render_into(state, Viewport::from(sink.size()), &mut fb);
        sink.present(&fb)?;

        let events = state.update();
        for event in &events {
            debug!("tick {}: {:?}", ticks, event);
        }
        if events
            .iter()
            .any(|e| matches!(e, PongEvent::PointScored { .. }))
        {
            continue;
        }

        let Some(key) = keys.next_key(None)? else {
            continue;
        };
        if should_quit_pong(key) {
            run = RunState::Stopped;
        } else if let Some(action) = pong_action(key) {
            state.apply_action(action);
        }
    }

    let score = state.score();
    info!(
        "pong stopped after {} ticks, score {}-{}",
        ticks, score.first, score.second
    );
    Ok(PongOutcome {
        score,
        winner: state.winner(),
        ticks,
    })
}
