//! # kzg-route: Route Authentication with KZG Commitments
//!
//! kzg-route authenticates the path a token takes through a set of nodes. A
//! coordinator binds every node of a declared route to its position with a
//! single KZG polynomial commitment over BLS12-381; each node then proves its
//! position with a constant-size opening proof that the next node verifies.
//!
//! ## Overview
//!
//! Each node holds a secret scalar `x_i`. The coordinator interpolates the
//! unique polynomial `P` with `P(x_i) = i` for positions `i = 1..=n`, runs a
//! trusted setup and publishes the commitment to `P`. At step `j` of a relay
//! the visiting node opens `P` at its secret and claims `P(x) = j`; the next
//! node accepts the token only if that opening verifies. Nodes out of place,
//! or not on the declared route at all, cannot produce a verifying proof.
//!
//! ## Architecture
//!
//! The crate is organized into several key modules:
//!
//! - **arith**: Trait abstractions for the scalar field, curve groups, pairing,
//!   dense polynomials, Lagrange interpolation and hex encodings, with the
//!   blstrs BLS12-381 implementation behind them.
//!
//! - **kzg**: The [`PolynomialCommitment`] trait with the [`KZG`] scheme and
//!   its structured reference string [`SRS`].
//!
//! - **route**: The [`RouteProtocol`] state machine, the standalone
//!   [`setup_route`] and [`relay_step`] operations, and relay reporting.
//!
//! - **config**: [`RouteParameters`] controlling route bounds and the setup seed.
//!
//! - **errors**: Error types for backend and protocol operations.
//!
//! ## Quick Example
//!
//! ```rust
//! use kzg_route::{PairingEngine, RouteParameters, RouteProtocol, RouteState};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut protocol = RouteProtocol::<PairingEngine>::new(RouteParameters::testing())?;
//!
//! // Declare the route and provision one secret per node
//! protocol.declare_route("ABCD".parse()?)?;
//! protocol.generate_secrets(&mut rng)?;
//!
//! // Interpolate, run the trusted setup and commit
//! let session = protocol.commit()?;
//! assert_eq!(session.polynomial().degree(), 3);
//!
//! // Relay along a route with one extra node at the end
//! let transcript = protocol.relay(&"ABCDE".parse()?, &mut rng)?.run(&mut ())?;
//! assert_eq!(transcript.reports[4].previous_check, Some(true));
//! assert!(!transcript.reports[4].self_check);
//! assert_eq!(transcript.warnings.len(), 1);
//! assert_eq!(protocol.state(), RouteState::Completed);
//! # Ok::<(), kzg_route::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - **`blst`** (default): blstrs backend for BLS12-381
//!
//! ## Performance
//!
//! Rayon parallelizes the performance-critical operations:
//! - Powers of tau in both groups during setup
//! - Lagrange numerators during interpolation
//! - All opening proofs of a relay, computed before the sequential checks
//!
//! ## Security Considerations
//!
//! - **Trusted Setup**: The secret tau lives only inside the setup function.
//!   Sessions configured with [`SetupSeed::Fixed`] are reproducible by anyone
//!   knowing the seed and are meant for testing.
//! - **Route Polynomial**: Fewer than three points, or collinear ones, give a
//!   polynomial of degree one or less, which setup refuses.

#[cfg(not(feature = "blst"))]
compile_error!("kzg-route needs a pairing backend: enable the `blst` feature");

mod arith;
mod config;
mod errors;
mod kzg;
mod route;
mod serde_impl;

pub use arith::*;
pub use config::*;
pub use errors::*;
pub use kzg::*;
pub use route::*;
