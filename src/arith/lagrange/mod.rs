//! Lagrange interpolation over the scalar field.
//!
//! Given `n` points `(x_i, y_i)` with pairwise distinct abscissas this module
//! produces the unique polynomial of degree below `n` passing through all of
//! them, using the Lagrange basis
//!
//! ```text
//! P(x) = ∑ y_i · L_i(x),     L_i(x) = ∏(j≠i) (x - x_j) / (x_i - x_j)
//! ```
//!
//! # Algorithm
//!
//! 1. Build the vanishing polynomial `M(x) = ∏ (x - x_j)` once.
//! 2. For each `i`, obtain the numerator `M(x) / (x - x_i)` by synthetic
//!    division (exact, since `x_i` is a root of `M`).
//! 3. The denominators `∏(j≠i)(x_i - x_j)` are the numerators evaluated at
//!    `x_i`; all of them are inverted with one batch inversion.
//! 4. Accumulate `y_i / d_i` times each numerator.
//!
//! Complexity is O(n²) field operations. Numerators are built in parallel.
//!
//! # Example
//!
//! ```rust
//! use kzg_route::{FieldElement, Fr, interpolate};
//!
//! let points: Vec<(Fr, Fr)> = [(11u64, 1u64), (27, 2), (42, 3)]
//!     .iter()
//!     .map(|(x, y)| (Fr::from_u64(*x), Fr::from_u64(*y)))
//!     .collect();
//! let poly = interpolate(&points)?;
//! assert_eq!(poly.degree(), 2);
//! assert_eq!(poly.evaluate(&Fr::from_u64(27)), Fr::from_u64(2));
//! # Ok::<(), kzg_route::BackendError>(())
//! ```

use std::collections::HashMap;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::instrument;

use crate::{BackendError, DensePolynomial, FieldElement, Fr};

/// Fails with [`BackendError::DuplicateAbscissa`] naming the first repeated pair.
fn ensure_distinct(xs: &[Fr]) -> Result<(), BackendError> {
    let mut seen: HashMap<<Fr as FieldElement>::Repr, usize> = HashMap::with_capacity(xs.len());
    for (second, x) in xs.iter().enumerate() {
        if let Some(&first) = seen.get(&x.to_repr()) {
            return Err(BackendError::DuplicateAbscissa { first, second });
        }
        seen.insert(x.to_repr(), second);
    }
    Ok(())
}

/// Computes the vanishing polynomial `∏ (X - x_j)` over all abscissas.
pub fn vanishing_polynomial(xs: &[Fr]) -> DensePolynomial {
    let mut vanishing = DensePolynomial::from_coefficients_vec(vec![Fr::one()]);
    for x in xs {
        vanishing.mul_by_linear(x);
    }
    vanishing
}

/// Builds the Lagrange basis polynomials `L_0, ..., L_{n-1}` for the given abscissas.
///
/// `L_i(x_j)` is one when `i == j` and zero otherwise.
///
/// # Errors
///
/// - [`BackendError::DuplicateAbscissa`] if two abscissas coincide
#[instrument(level = "debug", skip_all, fields(points = xs.len()))]
pub fn lagrange_basis(xs: &[Fr]) -> Result<Vec<DensePolynomial>, BackendError> {
    ensure_distinct(xs)?;
    if xs.is_empty() {
        return Ok(Vec::new());
    }

    let vanishing = vanishing_polynomial(xs);

    let numerators: Vec<DensePolynomial> = xs
        .par_iter()
        .map(|x| vanishing.divide_by_linear(x).0)
        .collect();

    let mut denominators: Vec<Fr> = numerators
        .iter()
        .zip(xs.iter())
        .map(|(numerator, x)| numerator.evaluate(x))
        .collect();
    Fr::batch_inversion(&mut denominators)?;

    Ok(numerators
        .into_iter()
        .zip(denominators.iter())
        .map(|(numerator, denom_inv)| {
            let mut basis = DensePolynomial::zero();
            basis.add_scaled(&numerator, denom_inv);
            basis
        })
        .collect())
}

/// Interpolates the unique polynomial of degree below `points.len()` through `points`.
///
/// An empty input yields the zero polynomial.
///
/// # Errors
///
/// - [`BackendError::DuplicateAbscissa`] if two points share an x-value
#[instrument(level = "debug", skip_all, fields(points = points.len()))]
pub fn interpolate(points: &[(Fr, Fr)]) -> Result<DensePolynomial, BackendError> {
    let xs: Vec<Fr> = points.iter().map(|(x, _)| *x).collect();
    let basis = lagrange_basis(&xs)?;

    let mut poly = DensePolynomial::from_coefficients_vec(vec![Fr::zero(); points.len().max(1)]);
    for ((_, y), li) in points.iter().zip(basis.iter()) {
        poly.add_scaled(li, y);
    }
    Ok(poly)
}
