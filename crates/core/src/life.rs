//! Life state - the grid, its scratch buffer, and viewer speed
//!
//! Each generation is written into the scratch buffer from a read-only view of
//! the current grid, then the two buffers swap.

use crate::grid::LifeGrid;
use crate::types::{speed_delay_ms, LifeAction, RunState, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

#[derive(Debug, Clone)]
pub struct LifeState {
    current: LifeGrid,
    scratch: LifeGrid,
    speed: u8,
    generation: u64,
}

impl LifeState {
    pub fn new(grid: LifeGrid) -> Self {
        Self::with_speed(grid, DEFAULT_SPEED)
    }

    /// Speed is clamped into `MIN_SPEED..=MAX_SPEED`.
    pub fn with_speed(grid: LifeGrid, speed: u8) -> Self {
        Self {
            current: grid,
            scratch: LifeGrid::new(),
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.current
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Delay before the next generation at the current speed
    pub fn delay_ms(&self) -> u32 {
        speed_delay_ms(self.speed)
    }

    /// Advance one generation.
    pub fn advance(&mut self) {
        self.current.step_into(&mut self.scratch);
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
    }

    pub fn speed_up(&mut self) -> bool {
        if self.speed < MAX_SPEED {
            self.speed += 1;
            true
        } else {
            false
        }
    }

    pub fn slow_down(&mut self) -> bool {
        if self.speed > MIN_SPEED {
            self.speed -= 1;
            true
        } else {
            false
        }
    }

    /// Apply a viewer action. Only `Quit` stops the viewer.
    pub fn apply_action(&mut self, action: LifeAction) -> RunState {
        match action {
            LifeAction::SpeedUp => {
                self.speed_up();
            }
            LifeAction::SpeedDown => {
                self.slow_down();
            }
            LifeAction::Quit => return RunState::Stopped,
        }
        RunState::Running
    }
}
