//! Generic finite-dimensional associative algebras.
//!
//! An algebra here is a fixed-dimension vector space over a numeric field,
//! equipped with a bilinear multiplication defined entirely by a rank-3
//! structure tensor. The tensor is type-level data: two algebras with
//! different tensors are different Rust types and cannot be mixed, so
//! incompatible additions or multiplications are rejected at compile time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Element<F, T, N>                            │
//! │   N components of field F, multiplied via tensor T          │
//! └─────────────────────────────────────────────────────────────┘
//!                │                            │
//!                ▼                            ▼
//! ┌─────────────────────────┐   ┌─────────────────────────────┐
//! │       Field trait       │   │    ProductTensor trait      │
//! │  f64 (53-bit fast path) │   │  ComplexTensor (i² = -1)    │
//! │  rug::Float (arbitrary) │   │  SplitComplexTensor (j²=+1) │
//! └─────────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use fractile::algebra::Complex;
//!
//! let i = Complex::from_components(vec![0.0, 1.0]).unwrap();
//! let minus_one = &i * &i;
//! assert_eq!(minus_one, Complex::from_components(vec![-1.0, 0.0]).unwrap());
//! ```

mod element;
mod error;
mod field;
mod tensor;

pub use element::Element;
pub use error::AlgebraError;
pub use field::Field;
pub use tensor::{ComplexTensor, ProductTensor, SplitComplexTensor};

/// Complex numbers over `f64` (the low-precision fast path).
pub type Complex = Element<f64, ComplexTensor, 2>;

/// Split-complex (hyperbolic) numbers over `f64`.
pub type SplitComplex = Element<f64, SplitComplexTensor, 2>;

/// Complex numbers over arbitrary-precision `rug::Float`.
pub type BigComplex = Element<rug::Float, ComplexTensor, 2>;

/// Split-complex numbers over arbitrary-precision `rug::Float`.
pub type BigSplitComplex = Element<rug::Float, SplitComplexTensor, 2>;
