use std::sync::Arc;

use tracing::{debug, debug_span, warn};

use crate::{Fr, OpeningProof, PairingBackend, errors::Error};

use super::{Hop, NodeId, RouteProtocol, RouteSession};

/// A failed proof check during relaying. Reported, never fatal.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum RelayWarning {
    #[error("step {step}: node {node} rejected the proof of node {previous}")]
    ChainVerificationFailed {
        step: usize,
        node: NodeId,
        previous: NodeId,
    },
    #[error("step {step}: node {node} does not sit at position {y}")]
    SelfVerificationFailed { step: usize, node: NodeId, y: u64 },
}

/// What happened at one relay step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayReport<B: PairingBackend> {
    /// One-based step index, also the position `y` the node claims.
    pub step: usize,
    pub node: NodeId,
    pub previous: Option<NodeId>,
    pub next: Option<NodeId>,
    pub y: u64,
    /// The node's secret abscissa.
    pub x: Fr,
    /// `P(x)`, equal to `y` exactly when the node is in place.
    pub value: Fr,
    pub proof: OpeningProof<B>,
    /// Outcome of checking the previous node's proof; `None` at the first step.
    pub previous_check: Option<bool>,
    pub self_check: bool,
}

impl<B: PairingBackend> RelayReport<B> {
    pub fn warnings(&self) -> Vec<RelayWarning> {
        let mut warnings = Vec::new();
        if let (Some(false), Some(previous)) = (self.previous_check, self.previous) {
            warnings.push(RelayWarning::ChainVerificationFailed {
                step: self.step,
                node: self.node,
                previous,
            });
        }
        if !self.self_check {
            warnings.push(RelayWarning::SelfVerificationFailed {
                step: self.step,
                node: self.node,
                y: self.y,
            });
        }
        warnings
    }
}

/// Receives relay events as they happen.
pub trait RelayObserver<B: PairingBackend> {
    fn on_step(&mut self, report: &RelayReport<B>);

    fn on_warning(&mut self, warning: &RelayWarning) {
        let _ = warning;
    }
}

impl<B: PairingBackend> RelayObserver<B> for () {
    fn on_step(&mut self, _report: &RelayReport<B>) {}
}

/// Every report of a finished relay plus the warnings raised along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayTranscript<B: PairingBackend> {
    pub reports: Vec<RelayReport<B>>,
    pub warnings: Vec<RelayWarning>,
}

impl<B: PairingBackend> RelayTranscript<B> {
    /// True when every check along the route passed.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
pub(super) struct PlannedStep<B: PairingBackend> {
    pub node: NodeId,
    pub value: Fr,
    pub hop: Hop<B>,
}

/// A relay in progress, yielding one report per traversal step.
///
/// Proofs are already computed; iterating performs the sequential checks.
/// Dropping the relay before it is exhausted aborts the protocol with
/// [`Error::RelayCancelled`].
pub struct Relay<'a, B: PairingBackend<Scalar = Fr>> {
    protocol: &'a mut RouteProtocol<B>,
    session: Arc<RouteSession<B>>,
    steps: Vec<PlannedStep<B>>,
    cursor: usize,
    previous: Option<(NodeId, Hop<B>)>,
    finished: bool,
}

impl<'a, B: PairingBackend<Scalar = Fr>> Relay<'a, B> {
    pub(super) fn new(
        protocol: &'a mut RouteProtocol<B>,
        session: Arc<RouteSession<B>>,
        steps: Vec<PlannedStep<B>>,
    ) -> Self {
        let mut relay = Relay {
            protocol,
            session,
            steps,
            cursor: 0,
            previous: None,
            finished: false,
        };
        if relay.steps.is_empty() {
            relay.finish();
        }
        relay
    }

    pub fn session(&self) -> &RouteSession<B> {
        &self.session
    }

    /// Steps not yet checked.
    pub fn remaining(&self) -> usize {
        self.steps.len() - self.cursor
    }

    /// Drives the relay to the end, feeding `observer` as it goes.
    pub fn run<O>(mut self, observer: &mut O) -> Result<RelayTranscript<B>, Error>
    where
        O: RelayObserver<B> + ?Sized,
    {
        let mut transcript = RelayTranscript {
            reports: Vec::with_capacity(self.remaining()),
            warnings: Vec::new(),
        };
        for report in self.by_ref() {
            let report = report?;
            observer.on_step(&report);
            for warning in report.warnings() {
                observer.on_warning(&warning);
                transcript.warnings.push(warning);
            }
            transcript.reports.push(report);
        }
        Ok(transcript)
    }

    fn finish(&mut self) {
        self.finished = true;
        self.protocol.complete_relay();
    }

    fn check(&self, planned: &PlannedStep<B>) -> Result<(Option<bool>, bool), Error> {
        let previous_check = self
            .previous
            .as_ref()
            .map(|(_, hop)| self.session.verify_hop(hop))
            .transpose()?;
        let self_check = self.session.verify_hop(&planned.hop)?;
        Ok((previous_check, self_check))
    }
}

impl<B: PairingBackend<Scalar = Fr>> Iterator for Relay<'_, B> {
    type Item = Result<RelayReport<B>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let planned = *self.steps.get(self.cursor)?;
        let step = self.cursor + 1;
        let span = debug_span!("relay_step", step, node = %planned.node);
        let _guard = span.enter();

        let (previous_check, self_check) = match self.check(&planned) {
            Ok(checks) => checks,
            Err(err) => {
                self.finished = true;
                self.protocol.abort(err.clone());
                return Some(Err(err));
            }
        };

        let previous = self.previous.map(|(node, _)| node);
        if previous_check == Some(false) {
            warn!(
                previous = %previous.map_or('?', NodeId::letter),
                "previous hop failed verification"
            );
        }
        if !self_check {
            warn!(y = planned.hop.y, "own proof does not verify at this position");
        }

        let report = RelayReport {
            step,
            node: planned.node,
            previous,
            next: self.steps.get(step).map(|s| s.node),
            y: planned.hop.y,
            x: planned.hop.x,
            value: planned.value,
            proof: planned.hop.proof,
            previous_check,
            self_check,
        };
        debug!(?previous_check, self_check, "step relayed");

        self.previous = Some((planned.node, planned.hop));
        self.cursor = step;
        if self.cursor == self.steps.len() {
            self.finish();
        }
        Some(Ok(report))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished { 0 } else { self.remaining() };
        (remaining, Some(remaining))
    }
}

impl<B: PairingBackend<Scalar = Fr>> Drop for Relay<'_, B> {
    fn drop(&mut self) {
        if !self.finished {
            warn!(step = self.cursor + 1, "relay dropped before completion");
            self.protocol.abort(Error::RelayCancelled {
                step: self.cursor + 1,
            });
        }
    }
}
