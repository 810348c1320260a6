//! blst-backed BLS12-381 groups.
//!
//! Implements [`CurvePoint`] for the projective G1 and G2 points of `blstrs`
//! and [`TargetGroup`] for its pairing target group.
//!
//! Point decoding relies on `blstrs` affine decoders, which reject encodings
//! that are off the curve or outside the prime-order subgroup.
//!
//! # Feature
//!
//! Compiled when the Cargo feature `blst` is enabled.

use blstrs::{G1Affine, G1Projective, G2Affine, G2Projective, Gt as BlstGt, Scalar};
use group::{Curve, Group, prime::PrimeCurveAffine};

use crate::{BackendError, CurvePoint, TargetGroup};

pub type G1 = G1Projective;
pub type G2 = G2Projective;
pub type Gt = BlstGt;

fn fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N], BackendError> {
    bytes
        .try_into()
        .map_err(|_| BackendError::Serialization("unexpected point encoding length"))
}

impl CurvePoint<Scalar> for G1 {
    type Affine = G1Affine;

    fn identity() -> Self {
        <G1Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G1Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn to_affine(&self) -> Self::Affine {
        self.into()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn negate(&self) -> Self {
        -self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        self * scalar
    }

    fn batch_normalize(points: &[Self]) -> Vec<Self::Affine> {
        let mut affines = vec![G1Affine::identity(); points.len()];
        <G1Projective as Curve>::batch_normalize(points, &mut affines);
        affines
    }

    fn multi_scalar_mul(points: &[Self], scalars: &[Scalar]) -> Result<Self, BackendError> {
        if points.len() != scalars.len() {
            return Err(BackendError::Math("msm length mismatch"));
        }
        if points.is_empty() {
            return Ok(<G1Projective as Group>::identity());
        }
        Ok(G1Projective::multi_exp(points, scalars))
    }

    fn to_compressed(&self) -> Vec<u8> {
        let affine: G1Affine = self.into();
        affine.to_compressed().to_vec()
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        let affine: G1Affine = self.into();
        affine.to_uncompressed().to_vec()
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes = fixed::<48>(bytes)?;
        Option::<G1Affine>::from(G1Affine::from_compressed(&bytes))
            .map(G1Projective::from)
            .ok_or(BackendError::InvalidCurvePoint("not a G1 subgroup point"))
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes = fixed::<96>(bytes)?;
        Option::<G1Affine>::from(G1Affine::from_uncompressed(&bytes))
            .map(G1Projective::from)
            .ok_or(BackendError::InvalidCurvePoint("not a G1 subgroup point"))
    }
}

impl CurvePoint<Scalar> for G2 {
    type Affine = G2Affine;

    fn identity() -> Self {
        <G2Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G2Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn to_affine(&self) -> Self::Affine {
        self.into()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn negate(&self) -> Self {
        -self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        self * scalar
    }

    fn batch_normalize(points: &[Self]) -> Vec<Self::Affine> {
        let mut affines = vec![G2Affine::identity(); points.len()];
        <G2Projective as Curve>::batch_normalize(points, &mut affines);
        affines
    }

    fn multi_scalar_mul(points: &[Self], scalars: &[Scalar]) -> Result<Self, BackendError> {
        if points.len() != scalars.len() {
            return Err(BackendError::Math("msm length mismatch"));
        }
        if points.is_empty() {
            return Ok(<G2Projective as Group>::identity());
        }
        Ok(G2Projective::multi_exp(points, scalars))
    }

    fn to_compressed(&self) -> Vec<u8> {
        let affine: G2Affine = self.into();
        affine.to_compressed().to_vec()
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        let affine: G2Affine = self.into();
        affine.to_uncompressed().to_vec()
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes = fixed::<96>(bytes)?;
        Option::<G2Affine>::from(G2Affine::from_compressed(&bytes))
            .map(G2Projective::from)
            .ok_or(BackendError::InvalidCurvePoint("not a G2 subgroup point"))
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let bytes = fixed::<192>(bytes)?;
        Option::<G2Affine>::from(G2Affine::from_uncompressed(&bytes))
            .map(G2Projective::from)
            .ok_or(BackendError::InvalidCurvePoint("not a G2 subgroup point"))
    }
}

impl TargetGroup for Gt {
    type Scalar = Scalar;

    fn identity() -> Self {
        <Gt as Group>::identity()
    }

    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
        self * scalar
    }
}
