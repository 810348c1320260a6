use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, warn};
use tracing_subscriber::fmt;

use kzg_route::{
    HexEncoding, PairingEngine, RelayObserver, RelayReport, RelayWarning, Route, RouteParameters,
    RouteProtocol,
};

const DECLARED_ROUTE: &str = "ABCDE";
const TRAVERSAL_ROUTE: &str = "ABCDEFG";

/// Prints every hop the way a relay operator would follow it.
struct Console;

impl RelayObserver<PairingEngine> for Console {
    fn on_step(&mut self, report: &RelayReport<PairingEngine>) {
        info!(
            step = report.step,
            node = %report.node,
            next = %report.next.map_or('-', |n| n.letter()),
            y = report.y,
            value = %report.value.to_hex(),
            proof = %report.proof.0.to_hex(),
            previous_check = ?report.previous_check,
            self_check = report.self_check,
            "hop"
        );
    }

    fn on_warning(&mut self, warning: &RelayWarning) {
        warn!(%warning, "route check failed");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    fmt()
        .with_max_level(tracing::Level::INFO)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_target(false)
        .with_ansi(false)
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let params = RouteParameters::testing();
    let mut protocol = RouteProtocol::<PairingEngine>::new(params)?;

    info!(
        declared = DECLARED_ROUTE,
        traversal = TRAVERSAL_ROUTE,
        "starting route demo"
    );

    let declared: Route = DECLARED_ROUTE.parse()?;
    protocol.declare_route(declared)?;
    protocol.generate_secrets(&mut rng)?;

    let session = protocol.commit()?;
    info!(
        degree = session.polynomial().degree(),
        srs_degree = session.srs().max_degree(),
        commitment = %session.commitment().0.to_hex(),
        "route committed"
    );

    let traversal: Route = TRAVERSAL_ROUTE.parse()?;
    let transcript = protocol.relay(&traversal, &mut rng)?.run(&mut Console)?;

    info!(
        steps = transcript.reports.len(),
        warnings = transcript.warnings.len(),
        state = ?protocol.state(),
        "relay finished"
    );

    // A second session never reuses the first setup
    protocol.restart();
    info!(state = ?protocol.state(), "protocol restarted");

    Ok(())
}
