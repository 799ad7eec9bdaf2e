//! Life viewer main loop.
//!
//! Per tick: render, one non-blocking poll (quit stops before the grid moves),
//! advance one generation, then wait out the speed delay in `POLL_SLICE_MS`
//! slices, polling once per slice. The remaining delay is re-read every slice,
//! so a speed change shortens or stretches the wait that is already running.

use std::time::Duration;

use anyhow::Result;
use log::{debug, info};

use crate::core::LifeState;
use crate::input::{life_action, KeySource};
use crate::term::{FrameBuffer, FrameSink, LifeView, Viewport};
use crate::types::{RunState, POLL_SLICE_MS};

/// Summary of a finished Life session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeOutcome {
    pub generations: u64,
    pub final_speed: u8,
}

pub fn run_life<K, S>(state: &mut LifeState, keys: &mut K, sink: &mut S) -> Result<LifeOutcome>
where
    K: KeySource,
    S: FrameSink,
{
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let slice = Duration::from_millis(POLL_SLICE_MS as u64);

    info!(
        "life started: population {}, speed {}",
        state.grid().population(),
        state.speed()
    );

    let mut run = RunState::Running;
    while run.is_running() {
        view.render_into(state, Viewport::from(sink.size()), &mut fb);
        sink.present(&fb)?;

        run = poll_once(state, keys, Duration::ZERO)?;
        if !run.is_running() {
            break;
        }

        state.advance();

        let mut waited = 0;
        while run.is_running() && waited < state.delay_ms() / POLL_SLICE_MS {
            run = poll_once(state, keys, slice)?;
            waited += 1;
        }
    }

    info!(
        "life stopped after {} generations at speed {}",
        state.generation(),
        state.speed()
    );
    Ok(LifeOutcome {
        generations: state.generation(),
        final_speed: state.speed(),
    })
}

fn poll_once<K: KeySource>(
    state: &mut LifeState,
    keys: &mut K,
    timeout: Duration,
) -> Result<RunState> {
    let Some(key) = keys.next_key(Some(timeout))? else {
        return Ok(RunState::Running);
    };
    let Some(action) = life_action(key) else {
        return Ok(RunState::Running);
    };
    debug!("life action {:?}", action);
    Ok(state.apply_action(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_pattern;
    use crate::input::ScriptedKeys;
    use crate::term::FrameRecorder;
    use crate::types::MAX_SPEED;

    fn recorder() -> FrameRecorder {
        let (w, h) = LifeView::frame_size();
        FrameRecorder::new(w, h)
    }

    #[test]
    fn quit_on_first_poll_renders_once_and_never_advances() {
        let mut state = LifeState::new(parse_pattern(b"***"));
        let mut keys = ScriptedKeys::from_chars(" ");
        let mut sink = recorder();

        let outcome = run_life(&mut state, &mut keys, &mut sink).unwrap();
        assert_eq!(outcome.generations, 0);
        assert_eq!(sink.frames().len(), 1);
        assert_eq!(keys.polls(), 1);
    }

    #[test]
    fn quit_mid_delay_stops_within_one_slice() {
        // Speed 10: 50ms delay = 5 slices.
        let mut state = LifeState::with_speed(parse_pattern(b"***"), MAX_SPEED);
        let mut keys = ScriptedKeys::new();
        keys.push_idle(1).push_idle(2).push_char(' ').push_idle(10);
        let mut sink = recorder();

        let outcome = run_life(&mut state, &mut keys, &mut sink).unwrap();
        assert_eq!(outcome.generations, 1);
        assert_eq!(sink.frames().len(), 1);
        assert_eq!(keys.polls(), 4);
        assert_eq!(keys.remaining(), 10);
    }

    #[test]
    fn full_delay_is_waited_between_generations() {
        let mut state = LifeState::with_speed(parse_pattern(b"***"), MAX_SPEED);
        let mut keys = ScriptedKeys::new();
        // First tick: initial poll + 5 slices. Second tick: quit.
        keys.push_idle(6).push_char(' ');
        let mut sink = recorder();

        let outcome = run_life(&mut state, &mut keys, &mut sink).unwrap();
        assert_eq!(outcome.generations, 1);
        assert_eq!(sink.frames().len(), 2);
        assert_eq!(keys.polls(), 7);
    }

    #[test]
    fn speed_keys_apply_mid_delay_and_clamp() {
        let mut state = LifeState::with_speed(parse_pattern(b""), MAX_SPEED);
        let mut keys = ScriptedKeys::from_chars("aAA ");
        let mut sink = recorder();

        let outcome = run_life(&mut state, &mut keys, &mut sink).unwrap();
        assert_eq!(outcome.final_speed, MAX_SPEED);

        let mut state = LifeState::with_speed(parse_pattern(b""), MAX_SPEED);
        let mut keys = ScriptedKeys::from_chars("zZ ");
        run_life(&mut state, &mut keys, &mut recorder()).unwrap();
        assert_eq!(state.speed(), MAX_SPEED - 2);
    }
}
