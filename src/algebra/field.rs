//! Numeric field abstraction with explicit precision.
//!
//! The [`Field`] trait is the seam between the algebra and its underlying
//! number type. Every value carries a bit-precision attribute that can be
//! queried and re-set independently of the stored value; re-setting is
//! lossless only when the precision increases.

use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// A numeric field value with an explicit bit-precision attribute.
///
/// Arithmetic is expressed through the compound-assign operators taking the
/// right-hand side by reference, so implementations never need to copy a
/// high-precision value just to read it. Comparison uses the field's native
/// ordered comparison, never a lossy cast to machine floats.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so field values can move freely
/// between the front end and worker threads.
pub trait Field:
    Clone
    + Debug
    + PartialOrd
    + Send
    + Sync
    + 'static
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
{
    /// The additive identity at the given bit precision.
    fn zero(precision: u32) -> Self;

    /// Converts a machine float to a field value at the given bit precision.
    fn from_f64(value: f64, precision: u32) -> Self;

    /// Current bit precision of this value.
    fn precision(&self) -> u32;

    /// Re-expresses the stored value at a new bit width.
    ///
    /// Increasing the precision is lossless; decreasing it is an explicit,
    /// lossy operation requested by the caller.
    fn set_precision(&mut self, bits: u32);

    /// Returns true if this value is the additive identity.
    fn is_zero(&self) -> bool;
}

/// Machine floats: fixed 53-bit significand, precision calls are advisory.
impl Field for f64 {
    fn zero(_precision: u32) -> Self {
        0.0
    }

    fn from_f64(value: f64, _precision: u32) -> Self {
        value
    }

    fn precision(&self) -> u32 {
        f64::MANTISSA_DIGITS
    }

    fn set_precision(&mut self, _bits: u32) {}

    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

/// Arbitrary-precision floats backed by GMP; precision is honored bit for bit.
impl Field for rug::Float {
    fn zero(precision: u32) -> Self {
        rug::Float::new(precision)
    }

    fn from_f64(value: f64, precision: u32) -> Self {
        rug::Float::with_val(precision, value)
    }

    fn precision(&self) -> u32 {
        self.prec()
    }

    fn set_precision(&mut self, bits: u32) {
        self.set_prec(bits);
    }

    fn is_zero(&self) -> bool {
        rug::Float::is_zero(self)
    }
}
