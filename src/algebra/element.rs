//! Algebra element type and its arithmetic.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

use super::error::AlgebraError;
use super::field::Field;
use super::tensor::ProductTensor;

/// An element of an `N`-dimensional associative algebra over field `F`,
/// with multiplication defined by the structure tensor `T`.
///
/// The component count is fixed at the type level, so the length invariant
/// holds by construction everywhere except [`Element::from_components`],
/// which validates it explicitly.
///
/// All binary operators have pure (non-mutating) forms built from the
/// mutating compound forms, so `&a + &b` never aliases either input.
pub struct Element<F, T, const N: usize>
where
    F: Field,
    T: ProductTensor<N>,
{
    components: [F; N],
    tensor: PhantomData<T>,
}

impl<F, T, const N: usize> Element<F, T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    /// The zero element, with every component at the given bit precision.
    pub fn zero(precision: u32) -> Self {
        Self {
            components: std::array::from_fn(|_| F::zero(precision)),
            tensor: PhantomData,
        }
    }

    /// Creates an element from a component sequence.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidArgument`] if the sequence length does
    /// not match the algebra dimension.
    pub fn from_components(components: Vec<F>) -> Result<Self, AlgebraError> {
        let actual = components.len();
        let components: [F; N] = components
            .try_into()
            .map_err(|_| AlgebraError::InvalidArgument {
                expected: N,
                actual,
            })?;
        Ok(Self {
            components,
            tensor: PhantomData,
        })
    }

    /// Creates an element from a fixed-size array; the length is correct by
    /// construction.
    pub fn from_array(components: [F; N]) -> Self {
        Self {
            components,
            tensor: PhantomData,
        }
    }

    /// Borrows the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn component(&self, index: usize) -> &F {
        &self.components[index]
    }

    /// Mutably borrows the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn component_mut(&mut self, index: usize) -> &mut F {
        &mut self.components[index]
    }

    /// Borrows all components in basis order.
    pub fn components(&self) -> &[F] {
        &self.components
    }

    /// Minimum bit precision across the components (weakest-link semantics).
    pub fn precision(&self) -> u32 {
        self.components
            .iter()
            .map(Field::precision)
            .min()
            .unwrap_or(0)
    }

    /// Re-expresses every component at the new bit width.
    pub fn set_precision(&mut self, bits: u32) {
        for component in &mut self.components {
            component.set_precision(bits);
        }
    }

    /// Component-wise addition in place.
    pub fn add_assign_element(&mut self, rhs: &Self) {
        for (component, other) in self.components.iter_mut().zip(&rhs.components) {
            *component += other;
        }
    }

    /// Component-wise subtraction in place.
    pub fn sub_assign_element(&mut self, rhs: &Self) {
        for (component, other) in self.components.iter_mut().zip(&rhs.components) {
            *component -= other;
        }
    }

    /// Component-wise sign flip in place.
    pub fn negate(&mut self) {
        for component in &mut self.components {
            let mut flipped = F::zero(component.precision());
            flipped -= component;
            *component = flipped;
        }
    }

    /// Multiplies every component by a bare field value.
    pub fn scale(&mut self, factor: &F) {
        for component in &mut self.components {
            *component *= factor;
        }
    }

    /// Divides every component by a bare field value.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] if `divisor` is the additive
    /// identity of the field.
    pub fn scale_div(&mut self, divisor: &F) -> Result<(), AlgebraError> {
        if divisor.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        for component in &mut self.components {
            *component /= divisor;
        }
        Ok(())
    }

    /// Pure form of [`Element::scale`].
    pub fn scaled(&self, factor: &F) -> Self {
        let mut result = self.clone();
        result.scale(factor);
        result
    }

    /// Pure form of [`Element::scale_div`].
    pub fn scaled_div(&self, divisor: &F) -> Result<Self, AlgebraError> {
        let mut result = self.clone();
        result.scale_div(divisor)?;
        Ok(result)
    }

    /// Multiplies by another element of the same algebra, in place.
    ///
    /// Computes the tensor contraction
    /// `out[k] = Σ_row self[row] · (Σ_col T[k][row][col] · rhs[col])`,
    /// which is O(N³) and allocates a single temporary component buffer.
    /// Tensor entries of ±1 (the common case for the provided algebras) are
    /// applied without materializing a field value.
    pub fn mul_assign_element(&mut self, rhs: &Self) {
        let precision = self.precision();
        let mut out: [F; N] = std::array::from_fn(|_| F::zero(precision));
        for (k, slot) in out.iter_mut().enumerate() {
            let mut acc = F::zero(precision);
            for row in 0..N {
                let mut sum = F::zero(precision);
                for col in 0..N {
                    let entry = T::TENSOR[k][row][col];
                    if entry == 0.0 {
                        continue;
                    }
                    if entry == 1.0 {
                        sum += &rhs.components[col];
                    } else if entry == -1.0 {
                        sum -= &rhs.components[col];
                    } else {
                        let mut term = rhs.components[col].clone();
                        term *= &F::from_f64(entry, precision);
                        sum += &term;
                    }
                }
                sum *= &self.components[row];
                acc += &sum;
            }
            *slot = acc;
        }
        self.components = out;
    }
}

// Clone/Debug/PartialEq are implemented by hand so the tensor marker needs
// no derive bounds of its own.

impl<F, T, const N: usize> Clone for Element<F, T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    fn clone(&self) -> Self {
        Self {
            components: self.components.clone(),
            tensor: PhantomData,
        }
    }
}

impl<F, T, const N: usize> fmt::Debug for Element<F, T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("components", &self.components)
            .finish()
    }
}

impl<F, T, const N: usize> PartialEq for Element<F, T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl<F, T, const N: usize> Add for &Element<F, T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    type Output = Element<F, T, N>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.add_assign_element(rhs);
        result
    }
}

impl<F, T, const N: usize> Add for Element<F, T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    type Output = Element<F, T, N>;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.add_assign_element(&rhs);
        self
    }
}

impl<F, T, const N: usize> Sub for &Element<F, T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    type Output = Element<F, T, N>;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.sub_assign_element(rhs);
        result
    }
}

impl<F, T, const N: usize> Sub for Element<F, T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    type Output = Element<F, T, N>;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self.sub_assign_element(&rhs);
        self
    }
}

impl<F, T, const N: usize> Mul for &Element<F, T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    type Output = Element<F, T, N>;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.mul_assign_element(rhs);
        result
    }
}

impl<F, T, const N: usize> Mul for Element<F, T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    type Output = Element<F, T, N>;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self.mul_assign_element(&rhs);
        self
    }
}

impl<F, T, const N: usize> Neg for &Element<F, T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    type Output = Element<F, T, N>;

    fn neg(self) -> Self::Output {
        let mut result = self.clone();
        result.negate();
        result
    }
}

impl<F, T, const N: usize> Neg for Element<F, T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    type Output = Element<F, T, N>;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{BigComplex, Complex, SplitComplex};
    use rug::Float;

    fn complex(re: f64, im: f64) -> Complex {
        Complex::from_array([re, im])
    }

    fn split(a: f64, b: f64) -> SplitComplex {
        SplitComplex::from_array([a, b])
    }

    #[test]
    fn test_zero_has_zero_components() {
        let zero = Complex::zero(64);
        assert_eq!(zero.components(), &[0.0, 0.0]);
    }

    #[test]
    fn test_from_components_length_mismatch() {
        let result = Complex::from_components(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            result.unwrap_err(),
            AlgebraError::InvalidArgument {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_addition_is_component_wise() {
        let sum = &complex(1.0, 2.0) + &complex(3.0, 4.0);
        assert_eq!(sum, complex(4.0, 6.0));
    }

    #[test]
    fn test_addition_is_commutative() {
        let a = complex(1.5, -2.0);
        let b = complex(-0.25, 7.0);
        assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn test_addition_does_not_alias_inputs() {
        let a = complex(1.0, 1.0);
        let b = complex(2.0, 2.0);
        let _sum = &a + &b;
        assert_eq!(a, complex(1.0, 1.0));
        assert_eq!(b, complex(2.0, 2.0));
    }

    #[test]
    fn test_subtraction_inverts_addition() {
        let a = complex(5.0, -3.0);
        let b = complex(2.0, 8.0);
        let round_trip = &(&a + &b) - &b;
        assert_eq!(round_trip, a);
    }

    #[test]
    fn test_additive_inverse_yields_zero() {
        let a = complex(3.25, -1.5);
        let sum = &a + &(-&a);
        assert_eq!(sum, Complex::zero(64));
    }

    #[test]
    fn test_negate_flips_signs() {
        let a = complex(1.0, -2.0);
        assert_eq!(-&a, complex(-1.0, 2.0));
    }

    #[test]
    fn test_complex_multiplication_one_times_i() {
        let one = complex(1.0, 0.0);
        let i = complex(0.0, 1.0);
        assert_eq!(&one * &i, complex(0.0, 1.0));
    }

    #[test]
    fn test_complex_multiplication_i_squared() {
        let i = complex(0.0, 1.0);
        assert_eq!(&i * &i, complex(-1.0, 0.0));
    }

    #[test]
    fn test_complex_multiplication_matches_standard_formula() {
        // Dense sample: (a+bi)(c+di) = (ac - bd) + (ad + bc)i.
        for &(a, b) in &[(1.0, 2.0), (-0.5, 3.0), (4.0, -4.0), (0.0, 0.0)] {
            for &(c, d) in &[(2.0, -1.0), (0.25, 0.75), (-3.0, -3.0)] {
                let product = &complex(a, b) * &complex(c, d);
                assert_eq!(product, complex(a * c - b * d, a * d + b * c));
            }
        }
    }

    #[test]
    fn test_split_complex_units_are_idempotent() {
        let e2 = split(0.0, 1.0);
        assert_eq!(&e2 * &e2, split(0.0, 1.0));
        let e1 = split(1.0, 0.0);
        assert_eq!(&e1 * &e1, split(1.0, 0.0));
    }

    #[test]
    fn test_split_complex_cross_terms_vanish() {
        let e1 = split(1.0, 0.0);
        let e2 = split(0.0, 1.0);
        assert_eq!(&e1 * &e2, split(0.0, 0.0));
        assert_eq!(&e2 * &e1, split(0.0, 0.0));
    }

    #[test]
    fn test_scale_and_scale_div() {
        let mut a = complex(2.0, -4.0);
        a.scale(&2.0);
        assert_eq!(a, complex(4.0, -8.0));
        a.scale_div(&4.0).unwrap();
        assert_eq!(a, complex(1.0, -2.0));
    }

    #[test]
    fn test_scale_div_by_zero_fails_for_complex() {
        let a = complex(1.0, 1.0);
        assert_eq!(a.scaled_div(&0.0).unwrap_err(), AlgebraError::DivisionByZero);
    }

    #[test]
    fn test_scale_div_by_zero_fails_for_split_complex() {
        let a = split(1.0, 1.0);
        assert_eq!(a.scaled_div(&0.0).unwrap_err(), AlgebraError::DivisionByZero);
    }

    #[test]
    fn test_scale_div_by_zero_fails_for_big_complex() {
        let a = BigComplex::from_array([Float::with_val(64, 1), Float::with_val(64, 1)]);
        assert_eq!(
            a.scaled_div(&Float::new(64)).unwrap_err(),
            AlgebraError::DivisionByZero
        );
    }

    #[test]
    fn test_big_complex_multiplication_preserves_precision() {
        let i = BigComplex::from_array([Float::new(128), Float::with_val(128, 1)]);
        let product = &i * &i;
        assert_eq!(product.precision(), 128);
        assert_eq!(*product.component(0), -1);
        assert_eq!(*product.component(1), 0);
    }

    #[test]
    fn test_element_precision_is_minimum() {
        let mixed = BigComplex::from_array([Float::with_val(64, 1), Float::with_val(256, 1)]);
        assert_eq!(mixed.precision(), 64);
    }

    #[test]
    fn test_set_precision_applies_to_all_components() {
        let mut a = BigComplex::zero(64);
        a.set_precision(192);
        assert_eq!(a.component(0).prec(), 192);
        assert_eq!(a.component(1).prec(), 192);
    }

    /// A 3-dimensional algebra with component-wise multiplication, to cover
    /// the rank-3 path beyond the built-in 2-dimensional algebras.
    struct DiagonalTensor;

    impl ProductTensor<3> for DiagonalTensor {
        const TENSOR: [[[f64; 3]; 3]; 3] = [
            [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
            [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
            [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
        ];
    }

    #[test]
    fn test_three_dimensional_algebra_multiplies_component_wise() {
        type Triple = Element<f64, DiagonalTensor, 3>;
        let a = Triple::from_array([2.0, 3.0, 4.0]);
        let b = Triple::from_array([5.0, 6.0, 7.0]);
        assert_eq!(&a * &b, Triple::from_array([10.0, 18.0, 28.0]));
    }

    #[test]
    fn test_fractional_tensor_entries_are_applied() {
        struct HalfTensor;
        impl ProductTensor<1> for HalfTensor {
            const TENSOR: [[[f64; 1]; 1]; 1] = [[[0.5]]];
        }
        type Halfling = Element<f64, HalfTensor, 1>;
        let a = Halfling::from_array([4.0]);
        let b = Halfling::from_array([6.0]);
        assert_eq!(&a * &b, Halfling::from_array([12.0]));
    }
}
