//! Relative-offset API for material update rules.

use rand::Rng;

use crate::cell::Cell;
use crate::Grid;

/// View of the grid centered on the cell being updated.
/// Out-of-bounds reads return Static, writes are no-ops.
/// Clock is stamped on every `set`.
#[derive(Debug)]
pub struct CellApi<'a> {
    pub grid: &'a mut Grid,
    pub x: i32,
    pub y: i32,
    pub generation: u8,
}

impl<'a> CellApi<'a> {
    pub fn new(grid: &'a mut Grid, x: i32, y: i32, generation: u8) -> Self {
        Self { grid, x, y, generation }
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Cell {
        self.grid.get(self.x + dx, self.y + dy)
    }

    pub fn set(&mut self, dx: i32, dy: i32, cell: Cell) {
        let mut stamped = cell;
        stamped.clock = self.generation;
        self.grid.set(self.x + dx, self.y + dy, stamped);
    }

    /// Sample a horizontal direction uniformly: -1 or +1.
    pub fn rand_dir(&mut self) -> i32 {
        if self.grid.rng.gen() {
            -1
        } else {
            1
        }
    }
}
