//! Tile sampling request type.
//!
//! A [`SampleRequest`] is an immutable value object describing one tile to
//! sample. It is created by a producer, consumed read-only by a worker, and
//! never mutated after enqueue; all per-tile configuration (precision,
//! iteration cap, escape radius, grid size) travels inside it.

use crate::algebra::Field;
use crate::geom::PreciseRect;

use super::error::SampleError;

/// Request to sample one rectangular tile of the algebraic plane.
#[derive(Debug, Clone)]
pub struct SampleRequest<F: Field> {
    /// Region of the plane to sample.
    rectangle: PreciseRect<F>,
    /// Grid points along the horizontal axis.
    grid_x: usize,
    /// Grid points along the vertical axis.
    grid_y: usize,
    /// Bit precision for all iteration arithmetic.
    precision: u32,
    /// Maximum iterations per grid point.
    iterations_limit: i64,
    /// Magnitude beyond which an iterate counts as escaped.
    escape_radius: F,
}

impl<F: Field> SampleRequest<F> {
    /// Creates a validated sample request.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidArgument`] if either grid dimension is
    /// zero, the iteration cap is not positive, or the precision is zero.
    pub fn new(
        rectangle: PreciseRect<F>,
        grid_x: usize,
        grid_y: usize,
        precision: u32,
        iterations_limit: i64,
        escape_radius: F,
    ) -> Result<Self, SampleError> {
        if grid_x == 0 || grid_y == 0 {
            return Err(SampleError::InvalidArgument(format!(
                "grid dimensions must be positive, got {}x{}",
                grid_x, grid_y
            )));
        }
        if iterations_limit <= 0 {
            return Err(SampleError::InvalidArgument(format!(
                "iteration cap must be positive, got {}",
                iterations_limit
            )));
        }
        if precision == 0 {
            return Err(SampleError::InvalidArgument(
                "precision must be at least 1 bit".to_string(),
            ));
        }
        Ok(Self {
            rectangle,
            grid_x,
            grid_y,
            precision,
            iterations_limit,
            escape_radius,
        })
    }

    /// Region of the plane to sample.
    pub fn rectangle(&self) -> &PreciseRect<F> {
        &self.rectangle
    }

    /// Grid points along the horizontal axis.
    pub fn grid_x(&self) -> usize {
        self.grid_x
    }

    /// Grid points along the vertical axis.
    pub fn grid_y(&self) -> usize {
        self.grid_y
    }

    /// Bit precision for all iteration arithmetic.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Maximum iterations per grid point.
    pub fn iterations_limit(&self) -> i64 {
        self.iterations_limit
    }

    /// Magnitude beyond which an iterate counts as escaped.
    pub fn escape_radius(&self) -> &F {
        &self.escape_radius
    }
}
