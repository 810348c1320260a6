//! Error types for the crate.
//!
//! This module defines low-level errors returned by the arithmetic, group,
//! interpolation and commitment layers (`BackendError`) as well as the
//! protocol-facing `Error` type returned by route setup and relaying.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code.
//!
//! Failed proof checks during relaying are not errors; they are reported as
//! [`RelayWarning`](crate::RelayWarning) values.
//!
//! # Examples
//!
//! ```rust
//! use kzg_route::{BackendError, Error};
//!
//! let err: Error = BackendError::DivisionByZero.into();
//! assert!(matches!(err, Error::Backend(BackendError::DivisionByZero)));
//! ```

use thiserror::Error;

use crate::{NodeId, RouteState};

/// Errors bubbled up from field, group, interpolation and commitment code.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("division by zero: the additive identity has no inverse")]
    DivisionByZero,
    #[error("invalid curve point: {0}")]
    InvalidCurvePoint(&'static str),
    #[error("SRS too short: polynomial degree {degree} exceeds supported degree {supported}")]
    SrsTooShort { degree: usize, supported: usize },
    #[error("duplicate abscissa: points {first} and {second} share the same x-value")]
    DuplicateAbscissa { first: usize, second: usize },
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("math error: {0}")]
    Math(&'static str),
}

/// High-level errors returned by the route protocol API.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid route: {0}")]
    InvalidRoute(String),
    #[error("duplicate secret: nodes {first} and {second} hold the same secret")]
    DuplicateSecret { first: usize, second: usize },
    #[error("route polynomial degree {degree} is too low, try different secrets")]
    DegreeTooLow { degree: usize },
    #[error("no secret provisioned for node {0}")]
    MissingSecret(NodeId),
    #[error("cannot {action} while in state {state:?}")]
    InvalidTransition {
        state: RouteState,
        action: &'static str,
    },
    #[error("relay cancelled before step {step}")]
    RelayCancelled { step: usize },
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}
