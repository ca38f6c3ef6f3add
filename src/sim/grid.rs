//! Destructible brick grid
//!
//! A fixed 10x14 field of alive flags stored as a flat row-major vector
//! (`col + COLS * row`), plus a counter of bricks still standing. Probes
//! take signed coordinates because the ball can sit left of or above the
//! field; anything out of range simply reports no brick.

use crate::consts::{BRICK_COLS, BRICK_ROWS, EMPTY_TOP_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrickGrid {
    cells: Vec<bool>,
    remaining: u32,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickGrid {
    /// A freshly populated grid: top rows empty, everything below alive.
    pub fn new() -> Self {
        let mut grid = Self {
            cells: vec![false; (BRICK_COLS * BRICK_ROWS) as usize],
            remaining: 0,
        };
        grid.reset();
        grid
    }

    /// Flat index for (col, row), or None when out of range.
    fn index(col: i32, row: i32) -> Option<usize> {
        if (0..BRICK_COLS).contains(&col) && (0..BRICK_ROWS).contains(&row) {
            Some((col + BRICK_COLS * row) as usize)
        } else {
            None
        }
    }

    /// Whether an alive brick occupies (col, row). An out-of-range probe is
    /// a normal query outcome, not an error: it reports no brick.
    pub fn brick_at(&self, col: i32, row: i32) -> bool {
        Self::index(col, row).is_some_and(|i| self.cells[i])
    }

    /// Deactivate the brick at (col, row). Returns true when an alive brick
    /// was removed. The remaining counter never underflows.
    pub fn clear_at(&mut self, col: i32, row: i32) -> bool {
        match Self::index(col, row) {
            Some(i) if self.cells[i] => {
                self.cells[i] = false;
                self.remaining = self.remaining.saturating_sub(1);
                true
            }
            _ => false,
        }
    }

    /// Repopulate the field: rows above `EMPTY_TOP_ROWS` stay clear, every
    /// row below comes back alive.
    pub fn reset(&mut self) {
        self.remaining = 0;
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                let alive = row >= EMPTY_TOP_ROWS;
                self.cells[(col + BRICK_COLS * row) as usize] = alive;
                if alive {
                    self.remaining += 1;
                }
            }
        }
    }

    /// Bricks still standing.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// (col, row) of every alive brick, row-major.
    pub fn alive_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..BRICK_ROWS).flat_map(move |row| {
            (0..BRICK_COLS).filter_map(move |col| self.brick_at(col, row).then_some((col, row)))
        })
    }
}
