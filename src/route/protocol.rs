use core::fmt;
use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use rand_core::RngCore;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use tracing::{info, instrument};

use crate::{BackendError, FieldElement, Fr, PairingBackend, RouteParameters, errors::Error};

use super::{
    Node, NodeId, Route, RouteSession, RouteState,
    relay::{PlannedStep, Relay},
    setup_route,
};

/// Stateful coordinator of one route session at a time.
///
/// Every call checks the current [`RouteState`] first; a call the state does
/// not allow fails with [`Error::InvalidTransition`] and changes nothing.
pub struct RouteProtocol<B: PairingBackend<Scalar = Fr>> {
    params: RouteParameters,
    state: RouteState,
    route: Option<Route>,
    secrets: BTreeMap<NodeId, Fr>,
    extra_secrets: BTreeMap<NodeId, Fr>,
    session: Option<Arc<RouteSession<B>>>,
    abort_reason: Option<Error>,
}

impl<B: PairingBackend<Scalar = Fr>> fmt::Debug for RouteProtocol<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteProtocol")
            .field("params", &self.params)
            .field("state", &self.state)
            .field("route", &self.route)
            .field("abort_reason", &self.abort_reason)
            .finish_non_exhaustive()
    }
}

/// Samples a 31-bit secret not yet present in `in_use`.
fn fresh_secret<R: RngCore + ?Sized>(
    rng: &mut R,
    in_use: &mut HashSet<<Fr as FieldElement>::Repr>,
) -> Fr {
    loop {
        let candidate = Fr::from_u64(u64::from(rng.next_u32() >> 1));
        if in_use.insert(candidate.to_repr()) {
            return candidate;
        }
    }
}

impl<B: PairingBackend<Scalar = Fr>> RouteProtocol<B> {
    pub fn new(params: RouteParameters) -> Result<Self, Error> {
        params.validate()?;
        Ok(Self {
            params,
            state: RouteState::Idle,
            route: None,
            secrets: BTreeMap::new(),
            extra_secrets: BTreeMap::new(),
            session: None,
            abort_reason: None,
        })
    }

    pub fn params(&self) -> &RouteParameters {
        &self.params
    }

    pub fn state(&self) -> RouteState {
        self.state
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// The published session, once committed.
    pub fn session(&self) -> Option<&Arc<RouteSession<B>>> {
        self.session.as_ref()
    }

    /// Why the protocol entered [`RouteState::Aborted`].
    pub fn abort_reason(&self) -> Option<&Error> {
        self.abort_reason.as_ref()
    }

    fn require(&self, expected: RouteState, action: &'static str) -> Result<(), Error> {
        if self.state != expected {
            return Err(Error::InvalidTransition {
                state: self.state,
                action,
            });
        }
        Ok(())
    }

    /// Moves to `Aborted`, keeping `err` as the reason, and hands it back.
    fn fail(&mut self, err: Error) -> Error {
        self.abort(err.clone());
        err
    }

    pub(super) fn abort(&mut self, reason: Error) {
        info!(%reason, "route session aborted");
        self.state = RouteState::Aborted;
        self.abort_reason = Some(reason);
    }

    pub(super) fn complete_relay(&mut self) {
        info!("relay completed");
        self.state = RouteState::Completed;
    }

    /// Declares the route the polynomial will be interpolated over.
    ///
    /// An invalid route aborts the session.
    pub fn declare_route(&mut self, route: Route) -> Result<(), Error> {
        self.require(RouteState::Idle, "declare a route")?;
        route
            .validate_declared(&self.params)
            .map_err(|err| self.fail(err))?;
        info!(%route, "route declared");
        self.route = Some(route);
        self.state = RouteState::AwaitingSetupInputs;
        Ok(())
    }

    /// Records the secret of a declared node, replacing any earlier one.
    ///
    /// Naming a node outside the declared route aborts the session.
    pub fn submit_secret(&mut self, node: NodeId, secret: Fr) -> Result<(), Error> {
        self.require(RouteState::AwaitingSetupInputs, "submit a secret")?;
        let declared = self
            .route
            .as_ref()
            .is_some_and(|route| route.nodes().contains(&node));
        if !declared {
            return Err(self.fail(Error::InvalidRoute(format!(
                "node {node} is not part of the declared route"
            ))));
        }
        self.secrets.insert(node, secret);
        Ok(())
    }

    /// Fills in random 31-bit secrets for every declared node still without one.
    ///
    /// Generated secrets never collide with each other or with submitted ones.
    pub fn generate_secrets<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Result<(), Error> {
        self.require(RouteState::AwaitingSetupInputs, "generate secrets")?;
        let nodes: Vec<NodeId> = self
            .route
            .as_ref()
            .map(|route| route.nodes().to_vec())
            .unwrap_or_default();
        let mut in_use: HashSet<_> = self.secrets.values().map(|s| s.to_repr()).collect();
        for node in nodes {
            if !self.secrets.contains_key(&node) {
                let secret = fresh_secret(rng, &mut in_use);
                self.secrets.insert(node, secret);
            }
        }
        Ok(())
    }

    /// Runs the setup phase and publishes the session.
    ///
    /// A node without a secret is reported as [`Error::MissingSecret`] and
    /// leaves the protocol waiting for inputs. Every other failure aborts.
    pub fn commit(&mut self) -> Result<Arc<RouteSession<B>>, Error> {
        self.require(RouteState::AwaitingSetupInputs, "commit")?;
        let nodes = self
            .route
            .as_ref()
            .map(|route| route.nodes().to_vec())
            .unwrap_or_default();
        let secrets = nodes
            .iter()
            .map(|node| {
                self.secrets
                    .get(node)
                    .copied()
                    .ok_or(Error::MissingSecret(*node))
            })
            .collect::<Result<Vec<Fr>, Error>>()?;

        let session = setup_route::<B>(&secrets, &self.params).map_err(|err| self.fail(err))?;
        let session = Arc::new(session);
        self.session = Some(Arc::clone(&session));
        self.state = RouteState::Committed;
        Ok(session)
    }

    /// Starts relaying along `traversal`.
    ///
    /// The traversal may differ from the declared route: nodes may be missing,
    /// repeated or reordered, and nodes outside the declared route take part
    /// with fresh secrets that stay theirs until [`restart`](Self::restart).
    /// Only nodes beyond `max_participants` are refused, which aborts.
    #[instrument(level = "info", skip_all, fields(traversal = %traversal))]
    pub fn relay<R: RngCore + ?Sized>(
        &mut self,
        traversal: &Route,
        rng: &mut R,
    ) -> Result<Relay<'_, B>, Error> {
        self.require(RouteState::Committed, "relay")?;
        traversal
            .validate_traversal(&self.params)
            .map_err(|err| self.fail(err))?;
        let Some(session) = self.session.clone() else {
            return Err(Error::InvalidTransition {
                state: self.state,
                action: "relay",
            });
        };

        let mut in_use: HashSet<_> = self
            .secrets
            .values()
            .chain(self.extra_secrets.values())
            .map(|s| s.to_repr())
            .collect();
        let mut nodes = Vec::with_capacity(traversal.len());
        for id in traversal.nodes() {
            let secret = match self.secrets.get(id).or_else(|| self.extra_secrets.get(id)) {
                Some(secret) => *secret,
                None => {
                    let secret = fresh_secret(rng, &mut in_use);
                    info!(node = %id, "provisioned node outside the declared route");
                    self.extra_secrets.insert(*id, secret);
                    secret
                }
            };
            nodes.push(Node::new(*id, secret));
        }

        // Every x is known up front, so all proofs can be built at once.
        let steps = nodes
            .par_iter()
            .enumerate()
            .map(|(i, node)| {
                let (value, hop) = node.prove(&session, i as u64 + 1)?;
                Ok(PlannedStep {
                    node: node.id(),
                    value,
                    hop,
                })
            })
            .collect::<Result<Vec<_>, BackendError>>()
            .map_err(|err| self.fail(err.into()))?;

        self.state = RouteState::Relaying;
        Ok(Relay::new(self, session, steps))
    }

    /// Discards the session and every secret and returns to `Idle`.
    ///
    /// The next session performs a fresh trusted setup.
    pub fn restart(&mut self) {
        self.state = RouteState::Idle;
        self.route = None;
        self.secrets.clear();
        self.extra_secrets.clear();
        self.session = None;
        self.abort_reason = None;
    }
}
