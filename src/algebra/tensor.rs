//! Structure tensors for concrete algebras.
//!
//! A structure tensor `T[k][row][col]` defines how basis element `row` times
//! basis element `col` contributes to output component `k`. The tensor is
//! attached at the type level: implementing types are zero-sized markers, and
//! an [`Element`](super::Element) is generic over the marker, so elements of
//! algebras with different tensors cannot be added or multiplied together.

/// Type-level rank-3 structure tensor for an `N`-dimensional algebra.
///
/// The tensor data is immutable compile-time data, identical for every
/// instance of the algebra it defines.
pub trait ProductTensor<const N: usize>: Send + Sync + 'static {
    /// `TENSOR[k][row][col]` is the contribution of `left[row] * right[col]`
    /// to output component `k`.
    const TENSOR: [[[f64; N]; N]; N];
}

/// Ordinary complex numbers: basis `(1, i)` with `i² = -1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexTensor;

impl ProductTensor<2> for ComplexTensor {
    const TENSOR: [[[f64; 2]; 2]; 2] = [
        // Real part: 1·1 = 1, i·i = -1.
        [[1.0, 0.0], [0.0, -1.0]],
        // Imaginary part: 1·i = i, i·1 = i.
        [[0.0, 1.0], [1.0, 0.0]],
    ];
}

/// Split-complex numbers in the idempotent basis: each unit squares to
/// itself and cross products vanish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitComplexTensor;

impl ProductTensor<2> for SplitComplexTensor {
    const TENSOR: [[[f64; 2]; 2]; 2] = [
        [[1.0, 0.0], [0.0, 0.0]],
        [[0.0, 0.0], [0.0, 1.0]],
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_tensor_encodes_i_squared() {
        // i·i contributes -1 to the real component and 0 to the imaginary.
        assert_eq!(ComplexTensor::TENSOR[0][1][1], -1.0);
        assert_eq!(ComplexTensor::TENSOR[1][1][1], 0.0);
    }

    #[test]
    fn test_split_complex_tensor_has_no_cross_terms() {
        for k in 0..2 {
            assert_eq!(SplitComplexTensor::TENSOR[k][0][1], 0.0);
            assert_eq!(SplitComplexTensor::TENSOR[k][1][0], 0.0);
        }
    }

    #[test]
    fn test_split_complex_units_are_idempotent() {
        assert_eq!(SplitComplexTensor::TENSOR[0][0][0], 1.0);
        assert_eq!(SplitComplexTensor::TENSOR[1][1][1], 1.0);
    }
}
