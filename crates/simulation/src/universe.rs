//! Wasm boundary: a flat-buffer wrapper around [`Grid`] for browser frontends.
//!
//! JS drives input and the frame clock through the exported methods, then
//! reads the cell buffer straight out of wasm memory via [`Universe::cells`].

use wasm_bindgen::prelude::*;

use crate::cell::{Cell, Material};
use crate::Grid;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
}

#[wasm_bindgen]
impl Universe {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height
    }

    /// Paint a Material discriminant byte at `(x, y)`.
    /// Unknown bytes and out-of-range coordinates are ignored.
    pub fn paint(&mut self, x: i32, y: i32, material: u8) {
        if let Some(material) = Material::from_u8(material) {
            self.grid.paint(x, y, material);
        }
    }

    /// Material discriminant at `(x, y)`; Static for out-of-range reads.
    #[must_use]
    pub fn cell_at(&self, x: i32, y: i32) -> u8 {
        self.grid.get(x, y).material as u8
    }

    pub fn toggle_brush(&mut self) {
        self.grid.toggle_brush();
    }

    #[must_use]
    pub fn brush(&self) -> u8 {
        self.grid.brush() as u8
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn tick(&mut self) {
        self.grid.tick();
    }

    /// Pointer to the cell buffer, for direct reads from wasm memory.
    #[must_use]
    pub fn cells(&self) -> *const Cell {
        self.grid.cells.as_ptr()
    }
}
