//! Fixed-size 2D storage
//!
//! Row-major, origin top-left. Coordinates are signed so neighbour
//! arithmetic can step off the edge; such reads return `T::default()` and
//! such writes are ignored.

use serde::{Deserialize, Serialize};

/// A fixed-size grid of `T`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid2D<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid2D<T> {
    /// Create a grid filled with `T::default()`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a coordinate lies on the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Check if a coordinate lies inside the 1-cell border
    pub fn in_interior(&self, x: i32, y: i32) -> bool {
        x >= 1 && y >= 1 && (x as usize) + 1 < self.width && (y as usize) + 1 < self.height
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    /// Value at (x, y), or `T::default()` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> T {
        self.offset(x, y).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Set the value at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = value;
        }
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Set every cell of a rectangle to `value`, clipped to the grid
    pub fn fill_rect(&mut self, x: i32, y: i32, width: usize, height: usize, value: T) {
        for py in y..y.saturating_add(height as i32) {
            for px in x..x.saturating_add(width as i32) {
                self.set(px, py, value);
            }
        }
    }

    /// Iterate over `(x, y, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, T)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i % width) as i32, (i / width) as i32, v))
    }

    /// Count cells matching a predicate
    pub fn count(&self, pred: impl Fn(T) -> bool) -> usize {
        self.cells.iter().filter(|&&v| pred(v)).count()
    }
}

impl<T: Copy + Default + PartialEq> Grid2D<T> {
    /// Replace every occurrence of `old` with `new`, returning how many cells changed
    pub fn replace(&mut self, old: T, new: T) -> usize {
        let mut changed = 0;
        for cell in self.cells.iter_mut().filter(|c| **c == old) {
            *cell = new;
            changed += 1;
        }
        changed
    }
}
