//! Point and rectangle type definitions.

use crate::algebra::Field;

/// A 2D point whose coordinates carry explicit bit precision.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecisePoint<F: Field> {
    /// Horizontal coordinate.
    pub x: F,
    /// Vertical coordinate.
    pub y: F,
}

impl<F: Field> PrecisePoint<F> {
    /// Creates a point from two coordinates.
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Smallest bit precision among the coordinates.
    pub fn min_precision(&self) -> u32 {
        self.x.precision().min(self.y.precision())
    }

    /// Largest bit precision among the coordinates.
    pub fn max_precision(&self) -> u32 {
        self.x.precision().max(self.y.precision())
    }

    /// Effective precision of the point: the minimum across coordinates.
    ///
    /// If any coordinate is represented more coarsely, computations using
    /// this point inherit that coarseness.
    pub fn precision(&self) -> u32 {
        self.min_precision()
    }

    /// Re-expresses every coordinate at the new bit width.
    ///
    /// Lossless only when increasing precision; decreasing is an explicit,
    /// lossy, caller-requested operation.
    pub fn set_precision(&mut self, bits: u32) {
        self.x.set_precision(bits);
        self.y.set_precision(bits);
    }
}

/// An axis-aligned rectangle with precision-tagged corner points.
///
/// The corners are independent storage; nothing enforces
/// `bottom_left < top_right`, that is the caller's responsibility. A
/// degenerate rectangle (equal corners) selects a single point of the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct PreciseRect<F: Field> {
    /// Bottom-left corner.
    pub bottom_left: PrecisePoint<F>,
    /// Top-right corner.
    pub top_right: PrecisePoint<F>,
}

impl<F: Field> PreciseRect<F> {
    /// Creates a rectangle from two corner points.
    pub fn new(bottom_left: PrecisePoint<F>, top_right: PrecisePoint<F>) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    /// Creates a rectangle from four corner coordinates.
    pub fn from_corners(bl_x: F, bl_y: F, tr_x: F, tr_y: F) -> Self {
        Self {
            bottom_left: PrecisePoint::new(bl_x, bl_y),
            top_right: PrecisePoint::new(tr_x, tr_y),
        }
    }

    /// Smallest bit precision among the four coordinates.
    pub fn min_precision(&self) -> u32 {
        self.bottom_left
            .min_precision()
            .min(self.top_right.min_precision())
    }

    /// Largest bit precision among the four coordinates.
    pub fn max_precision(&self) -> u32 {
        self.bottom_left
            .max_precision()
            .max(self.top_right.max_precision())
    }

    /// Effective precision of the rectangle: the minimum across coordinates.
    pub fn precision(&self) -> u32 {
        self.min_precision()
    }

    /// Re-expresses every coordinate at the new bit width.
    pub fn set_precision(&mut self, bits: u32) {
        self.bottom_left.set_precision(bits);
        self.top_right.set_precision(bits);
    }
}
