//! Configuration types for route sessions.
//!
//! [`RouteParameters`] bounds the declared route, sizes the node identifier
//! space and selects how the trusted setup obtains its secret.
//!
//! # Example
//!
//! ```rust
//! use kzg_route::{RouteParameters, SetupSeed};
//!
//! // Reproducible setup, as used by tests and demos
//! let params = RouteParameters::testing();
//! params.validate().expect("valid params");
//!
//! // Production setup with a fresh secret per session
//! let params = RouteParameters::default();
//! assert_eq!(params.setup_seed, SetupSeed::Random);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Number of letters available for node identifiers (`A`..=`Z`).
pub const NODE_ID_SPACE: usize = 26;

/// Seed string of the reproducible testing setup.
pub const TESTING_SEED: &str = "1927409816240961209460912649124";

/// Source of the trusted-setup secret.
///
/// - `Random`: sampled from the operating system for every session
/// - `Fixed`: derived from the given seed string; anyone who knows the seed
///   can recompute the secret, so this is only suitable for testing
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupSeed {
    #[default]
    Random,
    Fixed(String),
}

/// Parameters of a route session.
///
/// # Fields
///
/// - `min_nodes`, `max_nodes`: bounds on the declared route length
/// - `max_participants`: size of the identifier space; traversal routes may
///   name any node below this bound
/// - `srs_degree_floor`: minimum degree of every trusted setup
/// - `setup_seed`: how the setup secret is obtained
///
/// # Constraints
///
/// - `3 <= min_nodes <= max_nodes <= max_participants <= 26`
/// - `srs_degree_floor >= 1`
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteParameters {
    pub min_nodes: usize,
    pub max_nodes: usize,
    pub max_participants: usize,
    pub srs_degree_floor: usize,
    pub setup_seed: SetupSeed,
}

impl Default for RouteParameters {
    fn default() -> Self {
        Self {
            min_nodes: 3,
            max_nodes: 8,
            max_participants: NODE_ID_SPACE,
            srs_degree_floor: 16,
            setup_seed: SetupSeed::Random,
        }
    }
}

impl RouteParameters {
    /// Default bounds with the fixed testing seed.
    pub fn testing() -> Self {
        Self {
            setup_seed: SetupSeed::Fixed(TESTING_SEED.to_owned()),
            ..Self::default()
        }
    }

    /// Validates the route parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kzg_route::RouteParameters;
    ///
    /// let params = RouteParameters {
    ///     min_nodes: 2, // a two-point route interpolates a line
    ///     ..RouteParameters::default()
    /// };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_nodes < 3 {
            return Err(Error::InvalidConfig(
                "routes need at least three nodes to reach degree two".into(),
            ));
        }
        if self.min_nodes > self.max_nodes {
            return Err(Error::InvalidConfig(
                "min_nodes must not exceed max_nodes".into(),
            ));
        }
        if self.max_nodes > self.max_participants {
            return Err(Error::InvalidConfig(
                "max_nodes must not exceed max_participants".into(),
            ));
        }
        if self.max_participants > NODE_ID_SPACE {
            return Err(Error::InvalidConfig(format!(
                "at most {NODE_ID_SPACE} participants can be named"
            )));
        }
        if self.srs_degree_floor < 1 {
            return Err(Error::InvalidConfig(
                "srs_degree_floor must be at least one".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        RouteParameters::default().validate().unwrap();
        RouteParameters::testing().validate().unwrap();
        assert_eq!(
            RouteParameters::testing().setup_seed,
            SetupSeed::Fixed(TESTING_SEED.into())
        );
    }

    #[test]
    fn rejects_inconsistent_bounds() {
        let cases = [
            RouteParameters { min_nodes: 9, ..Default::default() },
            RouteParameters { max_nodes: 27, max_participants: 27, ..Default::default() },
            RouteParameters { max_participants: 5, ..Default::default() },
            RouteParameters { srs_degree_floor: 0, ..Default::default() },
        ];
        for params in cases {
            assert!(matches!(params.validate(), Err(Error::InvalidConfig(_))), "{params:?}");
        }
    }

    #[test]
    fn serde_round_trip_fills_missing_fields() {
        let params: RouteParameters =
            serde_json::from_str(r#"{"max_nodes": 5, "setup_seed": {"fixed": "abc"}}"#).unwrap();
        assert_eq!(params.max_nodes, 5);
        assert_eq!(params.min_nodes, 3);
        assert_eq!(params.setup_seed, SetupSeed::Fixed("abc".into()));

        let json = serde_json::to_string(&params).unwrap();
        let back: RouteParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
