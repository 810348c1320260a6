use ff::Field;

use crate::{Fr, Polynomial};

/// Dense coefficient-form polynomial over the BLS12-381 scalar field.
///
/// Always holds at least one coefficient; [`DensePolynomial::from_coefficients_vec`]
/// is the only way to build one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DensePolynomial {
    coeffs: Vec<Fr>,
}

impl Polynomial<Fr> for DensePolynomial {
    fn degree(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|c| *c != Fr::ZERO)
            .unwrap_or(0)
    }

    fn coeffs(&self) -> &[Fr] {
        &self.coeffs
    }

    fn evaluate(&self, point: &Fr) -> Fr {
        DensePolynomial::evaluate(self, point)
    }

    fn from_coefficients_vec(coeffs: Vec<Fr>) -> Self {
        DensePolynomial::from_coefficients_vec(coeffs)
    }
}

impl DensePolynomial {
    /// Create a dense polynomial from the provided coefficient vector.
    ///
    /// The coefficients are in ascending order (constant term first). An empty
    /// vector yields the zero polynomial.
    pub fn from_coefficients_vec(mut coeffs: Vec<Fr>) -> Self {
        if coeffs.is_empty() {
            coeffs.push(Fr::ZERO);
        }
        DensePolynomial { coeffs }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::from_coefficients_vec(vec![Fr::ZERO])
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == Fr::ZERO)
    }

    pub fn degree(&self) -> usize {
        <Self as Polynomial<Fr>>::degree(self)
    }

    /// Evaluate the polynomial at `point` using Horner's method.
    ///
    /// Returns the field element `p(point)`.
    pub fn evaluate(&self, point: &Fr) -> Fr {
        self.coeffs
            .iter()
            .rev()
            .fold(Fr::ZERO, |acc, coeff| acc * point + coeff)
    }

    /// Synthetic division by `(X - root)`.
    ///
    /// Returns the quotient and the remainder, which equals `p(root)`.
    pub fn divide_by_linear(&self, root: &Fr) -> (DensePolynomial, Fr) {
        let n = self.coeffs.len();
        if n == 1 {
            return (Self::zero(), self.coeffs[0]);
        }
        let mut quotient = vec![Fr::ZERO; n - 1];
        let mut carry = Fr::ZERO;
        for (idx, coeff) in self.coeffs.iter().enumerate().rev() {
            carry = *coeff + *root * carry;
            if idx > 0 {
                quotient[idx - 1] = carry;
            }
        }
        (DensePolynomial::from_coefficients_vec(quotient), carry)
    }

    /// Multiplies in place by `(X - root)`.
    pub fn mul_by_linear(&mut self, root: &Fr) {
        self.coeffs.push(Fr::ZERO);
        for i in (1..self.coeffs.len()).rev() {
            let prev = self.coeffs[i - 1];
            self.coeffs[i] = prev - *root * self.coeffs[i];
        }
        self.coeffs[0] = -(*root * self.coeffs[0]);
    }

    /// Adds `scale * other` to `self` in place.
    pub fn add_scaled(&mut self, other: &DensePolynomial, scale: &Fr) {
        if other.coeffs.len() > self.coeffs.len() {
            self.coeffs.resize(other.coeffs.len(), Fr::ZERO);
        }
        for (acc, coeff) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *acc += *coeff * scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldElement;

    fn poly(coeffs: &[u64]) -> DensePolynomial {
        DensePolynomial::from_coefficients_vec(coeffs.iter().map(|c| Fr::from_u64(*c)).collect())
    }

    #[test]
    fn degree_ignores_trailing_zeros() {
        let p = poly(&[1, 2, 0, 0]);
        assert_eq!(p.coeffs.len(), 4);
        assert_eq!(p.degree(), 1);
        assert_eq!(DensePolynomial::zero().degree(), 0);
        assert!(DensePolynomial::from_coefficients_vec(vec![]).is_zero());
    }

    #[test]
    fn empty_coefficients_behave_as_zero_polynomial() {
        let p = DensePolynomial::from_coefficients_vec(vec![]);
        assert_eq!(p.coeffs().len(), 1);
        assert_eq!(p.evaluate(&Fr::from_u64(8)), Fr::zero());

        let (q, r) = p.divide_by_linear(&Fr::from_u64(8));
        assert_eq!(q, DensePolynomial::zero());
        assert_eq!(r, Fr::zero());
    }

    #[test]
    fn divide_by_linear_is_exact_on_roots() {
        // (X - 2)(X - 3) = X^2 - 5X + 6
        let p = DensePolynomial::from_coefficients_vec(vec![
            Fr::from_u64(6),
            -Fr::from_u64(5),
            Fr::from_u64(1),
        ]);
        let (q, r) = p.divide_by_linear(&Fr::from_u64(2));
        assert_eq!(r, Fr::zero());
        assert_eq!(q, DensePolynomial::from_coefficients_vec(vec![-Fr::from_u64(3), Fr::one()]));

        let (_, r) = p.divide_by_linear(&Fr::from_u64(4));
        assert_eq!(r, p.evaluate(&Fr::from_u64(4)));
    }

    #[test]
    fn mul_by_linear_builds_vanishing_polynomial() {
        let mut p = poly(&[1]);
        p.mul_by_linear(&Fr::from_u64(2));
        p.mul_by_linear(&Fr::from_u64(3));
        assert_eq!(p.degree(), 2);
        assert_eq!(p.evaluate(&Fr::from_u64(2)), Fr::zero());
        assert_eq!(p.evaluate(&Fr::from_u64(3)), Fr::zero());
        assert_eq!(p.evaluate(&Fr::from_u64(0)), Fr::from_u64(6));
    }

    #[test]
    fn add_scaled_grows_to_longer_operand() {
        let mut p = poly(&[1]);
        p.add_scaled(&poly(&[0, 1, 1]), &Fr::from_u64(2));
        assert_eq!(p, poly(&[1, 2, 2]));
    }
}
