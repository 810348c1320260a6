//! Cryptographic backend abstractions and implementations.
//!
//! This module provides trait abstractions for the algebra used by the route
//! protocol, so that commitment and protocol code is written once against the
//! traits while a concrete backend supplies the arithmetic.
//!
//! # Architecture
//!
//! - **[`field`]**: Scalar field operations (Fr) - addition, multiplication, inversion
//! - **[`group`]**: Elliptic curve point operations (G1, G2, GT) - addition, scalar multiplication, validated decoding
//! - **[`pairing`]**: Bilinear pairing operations - `e(G1, G2) -> GT`
//! - **[`poly`]**: Dense polynomials - evaluation, synthetic division
//! - **[`lagrange`]**: Lagrange interpolation through arbitrary distinct points
//! - **[`encoding`]**: Canonical hex encodings for scalars and points
//!
//! # Backend Support
//!
//! | Feature | Backend | Curve |
//! |---------|---------|-------|
//! | `blst` (default) | blstrs | BLS12-381 |
//!
//! # Example
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use kzg_route::{CurvePoint, FieldElement, PairingBackend, PairingEngine};
//!
//! // Field operations
//! let mut rng = StdRng::seed_from_u64(1);
//! let scalar = <<PairingEngine as PairingBackend>::Scalar as FieldElement>::random(&mut rng);
//! let inv = FieldElement::invert(&scalar).expect("non-zero scalar");
//!
//! // Curve operations
//! let g1 = <PairingEngine as PairingBackend>::G1::generator();
//! let point = g1.mul_scalar(&scalar).mul_scalar(&inv);
//! assert_eq!(point, g1);
//!
//! // Pairing operation
//! let g2 = <PairingEngine as PairingBackend>::G2::generator();
//! let gt = PairingEngine::pairing(&g1, &g2);
//! println!("{:?}", gt);
//! ```

mod field;
pub use field::*;

mod group;
pub use group::*;

mod pairing;
pub use pairing::*;

mod poly;
pub use poly::*;

mod lagrange;
pub use lagrange::*;

mod encoding;
pub use encoding::*;
