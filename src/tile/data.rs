//! Tile sampling result type.

use crate::algebra::Field;

use super::request::SampleRequest;

/// Escape-step counts for one sampled tile.
///
/// Holds `grid_x × grid_y` iteration counts in row-major order (index
/// `y · grid_x + x`), plus a copy of the iteration cap so consumers can
/// normalize counts without the original request. A count equal to the cap
/// is the interior/boundary marker and is preserved exactly for downstream
/// coloring.
///
/// Ownership: created by the sampler, moved into the completion handle, then
/// owned solely by whichever consumer claims it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileData {
    grid_x: usize,
    grid_y: usize,
    iterations: Vec<i64>,
    iterations_limit: i64,
}

impl TileData {
    /// Creates an empty result with no grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a zero-filled result pre-sized for a request, so a worker can
    /// fill it in place.
    pub fn sized_for<F: Field>(request: &SampleRequest<F>) -> Self {
        Self {
            grid_x: request.grid_x(),
            grid_y: request.grid_y(),
            iterations: vec![0; request.grid_x() * request.grid_y()],
            iterations_limit: request.iterations_limit(),
        }
    }

    /// Grid points along the horizontal axis.
    pub fn grid_x(&self) -> usize {
        self.grid_x
    }

    /// Grid points along the vertical axis.
    pub fn grid_y(&self) -> usize {
        self.grid_y
    }

    /// The iteration cap the tile was sampled with.
    pub fn iterations_limit(&self) -> i64 {
        self.iterations_limit
    }

    /// All counts in row-major order.
    pub fn iterations(&self) -> &[i64] {
        &self.iterations
    }

    /// Escape step at grid cell `(x, y)`, or `None` outside the grid.
    pub fn escape_count(&self, x: usize, y: usize) -> Option<i64> {
        if x >= self.grid_x || y >= self.grid_y {
            return None;
        }
        self.iterations.get(y * self.grid_x + x).copied()
    }

    /// Stores the escape step for grid cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn set_escape_count(&mut self, x: usize, y: usize, steps: i64) {
        assert!(x < self.grid_x && y < self.grid_y, "grid index out of range");
        self.iterations[y * self.grid_x + x] = steps;
    }
}
