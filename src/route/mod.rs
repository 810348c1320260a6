//! Route authentication protocol.
//!
//! A coordinator assigns every node of a declared route a secret scalar,
//! interpolates the polynomial through `(secret_i, i)` for positions
//! `i = 1..=n`, and publishes a KZG commitment to it. As a token travels along
//! the route, each node opens the polynomial at its own secret and checks the
//! opening produced by the node before it. A node that is out of place, or not
//! part of the declared route at all, produces an opening that fails the next
//! node's check.
//!
//! # Protocol Overview
//!
//! [`RouteProtocol`] walks through these states:
//!
//! 1. **Idle**: nothing declared yet.
//!
//! 2. **AwaitingSetupInputs** ([`RouteProtocol::declare_route`]): the declared
//!    route passed its strict checks; secrets are collected with
//!    [`RouteProtocol::submit_secret`] or [`RouteProtocol::generate_secrets`].
//!
//! 3. **Committed** ([`RouteProtocol::commit`]): polynomial, trusted setup and
//!    commitment form an immutable [`RouteSession`].
//!
//! 4. **Relaying** ([`RouteProtocol::relay`]): a [`Relay`] yields one
//!    [`RelayReport`] per traversal step. Failed checks are reported as
//!    [`RelayWarning`]s and never stop the relay.
//!
//! 5. **Completed** once the traversal is exhausted, or **Aborted** when setup
//!    fails or a relay is dropped early. [`RouteProtocol::restart`] returns to
//!    `Idle` from anywhere.
//!
//! The building blocks are also available on their own: [`setup_route`] runs
//! the whole setup phase for a list of secrets and [`relay_step`] performs one
//! node's turn.
//!
//! # Example
//!
//! ```rust
//! use kzg_route::{PairingEngine, RouteParameters, RouteProtocol, RouteState};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut protocol = RouteProtocol::<PairingEngine>::new(RouteParameters::testing())?;
//!
//! protocol.declare_route("ABC".parse()?)?;
//! protocol.generate_secrets(&mut rng)?;
//! protocol.commit()?;
//!
//! let transcript = protocol.relay(&"ABC".parse()?, &mut rng)?.run(&mut ())?;
//! assert!(transcript.is_clean());
//! assert_eq!(protocol.state(), RouteState::Completed);
//! # Ok::<(), kzg_route::Error>(())
//! ```

mod node;
pub use node::{Hop, Node, NodeId, Route};

mod session;
pub use session::{RouteSession, relay_step, setup_route};

mod protocol;
pub use protocol::RouteProtocol;

mod relay;
pub use relay::{Relay, RelayObserver, RelayReport, RelayTranscript, RelayWarning};

/// Lifecycle of a [`RouteProtocol`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteState {
    Idle,
    AwaitingSetupInputs,
    Committed,
    Relaying,
    Completed,
    Aborted,
}
