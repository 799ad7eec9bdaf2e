//! Grid module - the Game of Life cell field
//!
//! The grid is a fixed 25x80 field where each cell is alive or dead.
//! Coordinates: (row, col) where row ranges 0..24 (top to bottom), col ranges 0..79.
//! Edges wrap: row 0 neighbours row 24 and col 0 neighbours col 79.

use crate::types::{LIFE_COLS, LIFE_ROWS};

/// Fixed-size Life grid, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LifeGrid {
    cells: [[bool; LIFE_COLS]; LIFE_ROWS],
}

impl LifeGrid {
    /// Create a grid with every cell dead
    pub fn new() -> Self {
        Self {
            cells: [[false; LIFE_COLS]; LIFE_ROWS],
        }
    }

    pub fn rows(&self) -> usize {
        LIFE_ROWS
    }

    pub fn cols(&self) -> usize {
        LIFE_COLS
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = alive;
                true
            }
            None => false,
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells = [[false; LIFE_COLS]; LIFE_ROWS];
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }

    /// Row slice, for renderers
    pub fn row(&self, row: usize) -> Option<&[bool; LIFE_COLS]> {
        self.cells.get(row)
    }

    /// Count live cells among the 8 neighbours of (row, col), wrapping at the edges.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dr in [LIFE_ROWS - 1, 0, 1] {
            for dc in [LIFE_COLS - 1, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = (row + dr) % LIFE_ROWS;
                let c = (col + dc) % LIFE_COLS;
                if self.cells[r][c] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Write the next generation of `self` into `next`.
    ///
    /// Every cell of `next` is overwritten; `self` is only read, so all
    /// neighbour counts see the current generation.
    pub fn step_into(&self, next: &mut LifeGrid) {
        for row in 0..LIFE_ROWS {
            for col in 0..LIFE_COLS {
                let n = self.live_neighbors(row, col);
                next.cells[row][col] = next_cell_state(self.cells[row][col], n);
            }
        }
    }

    /// Allocating convenience wrapper around [`LifeGrid::step_into`].
    pub fn step(&self) -> LifeGrid {
        let mut next = LifeGrid::new();
        self.step_into(&mut next);
        next
    }
}

impl Default for LifeGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Conway's rule (B3/S23).
#[inline(always)]
pub fn next_cell_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2 | 3) | (false, 3))
}
