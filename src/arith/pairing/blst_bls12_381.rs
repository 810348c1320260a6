use blstrs::{Bls12, G2Prepared};
use pairing::{MillerLoopResult, MultiMillerLoop};

use crate::{BackendError, CurvePoint, Fr, G1, G2, Gt, PairingBackend};

/// Pairing engine implementation for the blst BLS12-381 backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairingEngine;

/// blst-backed `PairingBackend` implementation for BLS12-381.
///
/// This implementation ties together scalar types, curve groups, and pairing
/// operations for the blstrs backend.
impl PairingBackend for PairingEngine {
    type Scalar = Fr;
    type G1 = G1;
    type G2 = G2;
    type Target = Gt;

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        blstrs::pairing(
            &CurvePoint::<Fr>::to_affine(g1),
            &CurvePoint::<Fr>::to_affine(g2),
        )
    }

    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError> {
        if g1.len() != g2.len() {
            return Err(BackendError::Math("pairing length mismatch"));
        }
        let g1_affine = <G1 as CurvePoint<Fr>>::batch_normalize(g1);
        let g2_affine = <G2 as CurvePoint<Fr>>::batch_normalize(g2);
        let g2_prepared: Vec<G2Prepared> =
            g2_affine.iter().map(|aff| G2Prepared::from(*aff)).collect();
        let terms: Vec<_> = g1_affine.iter().zip(g2_prepared.iter()).collect();
        let result = Bls12::multi_miller_loop(&terms).final_exponentiation();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{FieldElement, TargetGroup};

    #[test]
    fn pairing_is_bilinear() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = <Fr as FieldElement>::random(&mut rng);
        let b = <Fr as FieldElement>::random(&mut rng);
        let p = <G1 as CurvePoint<Fr>>::generator();
        let q = <G2 as CurvePoint<Fr>>::generator();

        let lhs = PairingEngine::pairing(&p.mul_scalar(&a), &q.mul_scalar(&b));
        let base = PairingEngine::pairing(&p, &q);
        assert_eq!(lhs, base.mul_scalar(&(a * b)));
        assert_ne!(base, <Gt as TargetGroup>::identity());
    }

    #[test]
    fn multi_pairing_matches_product() {
        let p = <G1 as CurvePoint<Fr>>::generator();
        let q = <G2 as CurvePoint<Fr>>::generator();
        let two = Fr::from_u64(2);
        let product = PairingEngine::multi_pairing(&[p, p.mul_scalar(&two)], &[q, q]).unwrap();
        let expected = PairingEngine::pairing(&p, &q).mul_scalar(&Fr::from_u64(3));
        assert_eq!(product, expected);

        // e(P, Q) * e(-P, Q) = 1
        let cancel = PairingEngine::multi_pairing(&[p, p.negate()], &[q, q]).unwrap();
        assert_eq!(cancel, <Gt as TargetGroup>::identity());
        assert!(PairingEngine::multi_pairing(&[p], &[]).is_err());
    }
}
