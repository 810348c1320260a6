//! Polynomial operations and abstractions.
//!
//! This module provides the trait abstraction for univariate polynomials used by
//! Lagrange interpolation and the KZG commitment scheme.
//!
//! # Polynomial Representation
//!
//! Polynomials are represented in **coefficient form** with coefficients in ascending order:
//! - `p(x) = c_0 + c_1*x + c_2*x^2 + ... + c_n*x^n`
//! - Stored as `[c_0, c_1, c_2, ..., c_n]`
//!
//! Trailing zero coefficients are kept as given; [`Polynomial::degree`] reports the
//! effective degree, ignoring them.
//!
//! # Example
//!
//! ```rust
//! use kzg_route::{DensePolynomial, FieldElement, Fr, Polynomial};
//!
//! // Create a polynomial from coefficients: p(x) = 1 + 2x + 3x^2
//! let coeffs = vec![Fr::from_u64(1), Fr::from_u64(2), Fr::from_u64(3)];
//! let poly = DensePolynomial::from_coefficients_vec(coeffs);
//!
//! // p(2) = 1 + 4 + 12
//! assert_eq!(poly.evaluate(&Fr::from_u64(2)), Fr::from_u64(17));
//! assert_eq!(poly.degree(), 2);
//! ```

use std::fmt::Debug;

use crate::FieldElement;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::DensePolynomial;

/// Polynomial interface for univariate polynomials.
///
/// Polynomials are represented in coefficient form and are used extensively
/// in the KZG commitment scheme for Lagrange interpolation and evaluation.
pub trait Polynomial<F: FieldElement>: Clone + Send + Sync + Debug + 'static {
    /// Returns the effective degree of this polynomial (zero for constants).
    fn degree(&self) -> usize;

    /// Returns the coefficients in ascending order (constant term first).
    fn coeffs(&self) -> &[F];

    /// Evaluates the polynomial at the given point using Horner's method.
    fn evaluate(&self, point: &F) -> F;

    /// Constructs a polynomial from its coefficients (ascending order).
    fn from_coefficients_vec(coeffs: Vec<F>) -> Self;
}
