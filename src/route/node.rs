use core::fmt;
use std::{collections::HashSet, str::FromStr};

use crate::{
    BackendError, Fr, OpeningProof, PairingBackend, RouteParameters, config::NODE_ID_SPACE,
    errors::Error,
};

use super::RouteSession;

/// Identifier of a route participant, displayed as a letter `A`..=`Z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u8);

impl NodeId {
    /// Creates the identifier for the zero-based `index`.
    pub fn new(index: usize) -> Result<Self, Error> {
        if index >= NODE_ID_SPACE {
            return Err(Error::InvalidRoute(format!(
                "node index {index} is outside A..Z"
            )));
        }
        Ok(NodeId(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn letter(self) -> char {
        char::from(b'A' + self.0)
    }

    /// Parses a single uppercase letter.
    pub fn from_letter(letter: char) -> Result<Self, Error> {
        if !letter.is_ascii_uppercase() {
            return Err(Error::InvalidRoute(format!(
                "{letter:?} is not a node letter"
            )));
        }
        Ok(NodeId(letter as u8 - b'A'))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An ordered sequence of nodes.
///
/// Parsing only checks that every character names a node, which is all a
/// traversal route needs. A declared route must additionally pass
/// [`Route::validate_declared`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Route(Vec<NodeId>);

impl Route {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Route(nodes)
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Strict checks for the route the polynomial is interpolated over.
    ///
    /// The length lies within `[min_nodes, max_nodes]`, every node is one of
    /// the first `len` letters, and no node appears twice.
    pub fn validate_declared(&self, params: &RouteParameters) -> Result<(), Error> {
        let len = self.len();
        if len < params.min_nodes || len > params.max_nodes {
            return Err(Error::InvalidRoute(format!(
                "route has {len} nodes, expected {} to {}",
                params.min_nodes, params.max_nodes
            )));
        }
        let mut seen = HashSet::with_capacity(len);
        for node in &self.0 {
            if node.index() >= len {
                return Err(Error::InvalidRoute(format!(
                    "node {node} is outside the first {len} nodes"
                )));
            }
            if !seen.insert(*node) {
                return Err(Error::InvalidRoute(format!("node {node} appears twice")));
            }
        }
        Ok(())
    }

    /// Rejects nodes outside the participant space of `params`.
    pub fn validate_traversal(&self, params: &RouteParameters) -> Result<(), Error> {
        match self.0.iter().find(|n| n.index() >= params.max_participants) {
            Some(node) => Err(Error::InvalidRoute(format!(
                "node {node} is beyond the {} participants",
                params.max_participants
            ))),
            None => Ok(()),
        }
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .map(NodeId::from_letter)
            .collect::<Result<Vec<_>, _>>()
            .map(Route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|node| write!(f, "{node}"))
    }
}

/// What one relay step hands to the next: where it opened and the proof.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hop<B: PairingBackend> {
    pub x: Fr,
    pub y: u64,
    pub proof: OpeningProof<B>,
}

/// A route participant and its secret abscissa.
#[derive(Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    secret: Fr,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl Node {
    pub fn new(id: NodeId, secret: Fr) -> Self {
        Node { id, secret }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn secret(&self) -> &Fr {
        &self.secret
    }

    /// Opens the session polynomial at this node's secret, claiming position `y`.
    ///
    /// Returns the evaluation alongside the hop for the next node.
    pub fn prove<B: PairingBackend<Scalar = Fr>>(
        &self,
        session: &RouteSession<B>,
        y: u64,
    ) -> Result<(Fr, Hop<B>), BackendError> {
        session.open_at(&self.secret, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_letters() {
        assert_eq!(NodeId::new(0).unwrap().to_string(), "A");
        assert_eq!(NodeId::new(25).unwrap().letter(), 'Z');
        assert!(NodeId::new(26).is_err());
        assert_eq!(NodeId::from_letter('C').unwrap().index(), 2);
        assert!(NodeId::from_letter('c').is_err());
    }

    #[test]
    fn parse_and_display_round_trip() {
        let route: Route = "CAB".parse().unwrap();
        assert_eq!(route.len(), 3);
        assert_eq!(route.to_string(), "CAB");
        assert!("AB1".parse::<Route>().is_err());
    }

    #[test]
    fn declared_routes_are_strict() {
        let params = RouteParameters::default();
        "ABC".parse::<Route>().unwrap().validate_declared(&params).unwrap();
        "DCBA".parse::<Route>().unwrap().validate_declared(&params).unwrap();

        for bad in ["AB", "ABCDEFGHI", "ABD", "ABA"] {
            let route: Route = bad.parse().unwrap();
            assert!(
                matches!(route.validate_declared(&params), Err(Error::InvalidRoute(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn traversal_routes_are_permissive() {
        let params = RouteParameters::default();
        let route: Route = "ABCZZA".parse().unwrap();
        route.validate_traversal(&params).unwrap();

        let narrow = RouteParameters {
            max_participants: 8,
            ..RouteParameters::default()
        };
        assert!(route.validate_traversal(&narrow).is_err());
    }

    #[test]
    fn debug_hides_the_secret() {
        let node = Node::new(NodeId::new(1).unwrap(), <Fr as crate::FieldElement>::from_u64(4242));
        let rendered = format!("{node:?}");
        assert!(rendered.contains("id"));
        assert!(!rendered.contains("secret"));
    }
}
