use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::RngCore;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::instrument;
use zeroize::Zeroize;

use crate::{BackendError, CurvePoint, FieldElement, Fr, PairingBackend};

const SEED_CONTEXT: &str = "kzg-route 2024-01-01 trusted setup tau";

/// Overwrites secret scalars with zero before their memory is released.
fn wipe(secrets: &mut [Fr]) {
    secrets.fill(<Fr as FieldElement>::zero());
    std::hint::black_box(secrets);
}

/// Structured Reference String: powers of a secret `tau` in G1 and G2.
///
/// `powers_of_g[k] = tau^k * G1` and `powers_of_h[k] = tau^k * G2` for
/// `k = 0..=max_degree`. Once built, an SRS is never modified; the secret
/// `tau` only exists inside the constructor that derives it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SRS<B: PairingBackend<Scalar = Fr>> {
    powers_of_g: Vec<B::G1>,
    powers_of_h: Vec<B::G2>,
}

impl<B: PairingBackend<Scalar = Fr>> SRS<B> {
    /// Builds the powers of `tau` up to `max_degree`.
    ///
    /// Callers own `tau` and must wipe it right after this returns.
    fn new_unsafe(tau: &B::Scalar, max_degree: usize) -> Result<Self, BackendError> {
        if max_degree < 1 {
            return Err(BackendError::Math("srs degree must be at least one"));
        }

        let g = B::G1::generator();
        let h = B::G2::generator();

        let mut powers_of_tau = vec![<B::Scalar as FieldElement>::one()];
        let mut cur = *tau;
        for _ in 0..max_degree {
            powers_of_tau.push(cur);
            cur *= *tau;
        }

        let powers_of_g: Vec<B::G1> = powers_of_tau
            .par_iter()
            .map(|power| g.mul_scalar(power))
            .collect();

        let powers_of_h: Vec<B::G2> = powers_of_tau
            .par_iter()
            .map(|power| h.mul_scalar(power))
            .collect();

        wipe(&mut powers_of_tau);
        wipe(std::slice::from_mut(&mut cur));

        Ok(SRS {
            powers_of_g,
            powers_of_h,
        })
    }

    /// Deterministic setup: the same seed always yields the same SRS.
    ///
    /// Seed bytes of any length are mapped through BLAKE3 (derive-key mode)
    /// onto a ChaCha20 stream from which `tau` is sampled. Intended for tests
    /// and reproducible demos; anyone holding the seed can recompute `tau`.
    #[instrument(level = "info", skip_all, fields(max_degree = max_degree))]
    pub fn from_seed(seed: &[u8], max_degree: usize) -> Result<Self, BackendError> {
        let mut hasher = blake3::Hasher::new_derive_key(SEED_CONTEXT);
        hasher.update(seed);
        let mut key: [u8; 32] = *hasher.finalize().as_bytes();
        let mut rng = ChaCha20Rng::from_seed(key);
        key.zeroize();
        let srs = Self::random(&mut rng, max_degree);
        // Replace the stream state that tau was drawn from.
        rng = ChaCha20Rng::from_seed([0u8; 32]);
        std::hint::black_box(&rng);
        srs
    }

    /// Setup with `tau` sampled from the caller's RNG.
    #[instrument(level = "info", skip_all, fields(max_degree = max_degree))]
    pub fn random<R: RngCore + ?Sized>(rng: &mut R, max_degree: usize) -> Result<Self, BackendError> {
        let mut tau = <B::Scalar as FieldElement>::random(rng);
        while FieldElement::is_zero(&tau) {
            tau = <B::Scalar as FieldElement>::random(rng);
        }
        let srs = Self::new_unsafe(&tau, max_degree);
        wipe(std::slice::from_mut(&mut tau));
        srs
    }

    /// Reassembles an SRS from previously published powers.
    ///
    /// Both sequences must have the same length, at least two entries, and
    /// start at the group generators.
    pub fn from_powers(
        powers_of_g: Vec<B::G1>,
        powers_of_h: Vec<B::G2>,
    ) -> Result<Self, BackendError> {
        if powers_of_g.len() != powers_of_h.len() {
            return Err(BackendError::Math("srs power sequences differ in length"));
        }
        if powers_of_h.len() < 2 {
            return Err(BackendError::SrsTooShort {
                degree: 1,
                supported: powers_of_h.len().saturating_sub(1),
            });
        }
        if powers_of_g[0] != B::G1::generator() || powers_of_h[0] != B::G2::generator() {
            return Err(BackendError::Math("srs must start at the group generators"));
        }
        Ok(SRS {
            powers_of_g,
            powers_of_h,
        })
    }

    /// Highest polynomial degree this SRS can commit to.
    pub fn max_degree(&self) -> usize {
        self.powers_of_g.len().saturating_sub(1)
    }

    pub fn powers_of_g(&self) -> &[B::G1] {
        &self.powers_of_g
    }

    pub fn powers_of_h(&self) -> &[B::G2] {
        &self.powers_of_h
    }

    /// Fails with [`BackendError::SrsTooShort`] when `degree` exceeds the capacity.
    pub fn ensure_supports(&self, degree: usize) -> Result<(), BackendError> {
        if degree > self.max_degree() || self.powers_of_g.is_empty() {
            return Err(BackendError::SrsTooShort {
                degree,
                supported: self.max_degree(),
            });
        }
        Ok(())
    }
}
