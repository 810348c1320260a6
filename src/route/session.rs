use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::{
    BackendError, Commitment, DensePolynomial, FieldElement, Fr, KZG, PairingBackend,
    PolynomialCommitment, RouteParameters, SRS, SetupSeed, errors::Error, interpolate,
};

use super::Hop;

/// Everything a route session publishes after setup.
///
/// Immutable once built. The polynomial interpolates `(secret_i, i + 1)` over
/// the declared route, and the SRS was generated for this session alone.
#[derive(Clone, Debug)]
pub struct RouteSession<B: PairingBackend<Scalar = Fr>> {
    pub(super) polynomial: DensePolynomial,
    pub(super) srs: SRS<B>,
    pub(super) commitment: Commitment<B>,
}

impl<B: PairingBackend<Scalar = Fr>> RouteSession<B> {
    pub fn polynomial(&self) -> &DensePolynomial {
        &self.polynomial
    }

    pub fn srs(&self) -> &SRS<B> {
        &self.srs
    }

    pub fn commitment(&self) -> &Commitment<B> {
        &self.commitment
    }

    pub fn into_parts(self) -> (DensePolynomial, SRS<B>, Commitment<B>) {
        (self.polynomial, self.srs, self.commitment)
    }

    /// Opens the polynomial at `x` for a node claiming position `y`.
    ///
    /// Returns the evaluation `P(x)` alongside the hop for the next node.
    pub fn open_at(&self, x: &Fr, y: u64) -> Result<(Fr, Hop<B>), BackendError> {
        let (value, proof) = KZG::open_g1(&self.srs, &self.polynomial, x)?;
        Ok((value, Hop { x: *x, y, proof }))
    }

    /// Checks that `hop.proof` opens the commitment to `hop.y` at `hop.x`.
    pub fn verify_hop(&self, hop: &Hop<B>) -> Result<bool, BackendError> {
        KZG::verify_g1(
            &self.srs,
            &self.commitment,
            &hop.x,
            &Fr::from_u64(hop.y),
            &hop.proof,
        )
    }
}

/// Fails with [`Error::DuplicateSecret`] naming the first repeated pair.
pub(crate) fn ensure_unique_secrets(secrets: &[Fr]) -> Result<(), Error> {
    let mut seen: HashMap<<Fr as FieldElement>::Repr, usize> = HashMap::with_capacity(secrets.len());
    for (second, secret) in secrets.iter().enumerate() {
        if let Some(&first) = seen.get(&secret.to_repr()) {
            return Err(Error::DuplicateSecret { first, second });
        }
        seen.insert(secret.to_repr(), second);
    }
    Ok(())
}

/// Builds the route polynomial, runs a fresh trusted setup and commits.
///
/// `secrets[i]` belongs to the node at position `i + 1` of the route. The
/// node-count bounds of `params` are not checked here; only the degree of the
/// interpolated polynomial is.
///
/// # Errors
///
/// - [`Error::DuplicateSecret`] before anything is interpolated
/// - [`Error::DegreeTooLow`] if the polynomial has degree one or less
/// - [`Error::Backend`] for interpolation and setup failures
#[instrument(level = "info", skip_all, fields(nodes = secrets.len()))]
pub fn setup_route<B: PairingBackend<Scalar = Fr>>(
    secrets: &[Fr],
    params: &RouteParameters,
) -> Result<RouteSession<B>, Error> {
    ensure_unique_secrets(secrets)?;

    let points: Vec<(Fr, Fr)> = secrets
        .iter()
        .zip(1u64..)
        .map(|(secret, y)| (*secret, Fr::from_u64(y)))
        .collect();
    let polynomial = interpolate(&points)?;

    let degree = polynomial.degree();
    if degree <= 1 {
        return Err(Error::DegreeTooLow { degree });
    }

    let srs_degree = degree.max(params.srs_degree_floor);
    let srs = match &params.setup_seed {
        SetupSeed::Fixed(seed) => SRS::from_seed(seed.as_bytes(), srs_degree)?,
        SetupSeed::Random => SRS::random(&mut rand::thread_rng(), srs_degree)?,
    };
    let commitment = KZG::commit_g1(&srs, &polynomial)?;
    debug!(degree, srs_degree, "route committed");

    Ok(RouteSession {
        polynomial,
        srs,
        commitment,
    })
}

/// One node's turn on the route.
///
/// Verifies the previous hop if there is one, then opens the polynomial at
/// `this_x` claiming position `this_y`. A failed check is returned as
/// `Some(false)`; only unusable parameters produce an error.
#[instrument(level = "debug", skip_all, fields(y = this_y))]
pub fn relay_step<B: PairingBackend<Scalar = Fr>>(
    session: &RouteSession<B>,
    previous: Option<&Hop<B>>,
    this_x: Fr,
    this_y: u64,
) -> Result<(Option<bool>, Hop<B>), Error> {
    let verified = previous.map(|hop| session.verify_hop(hop)).transpose()?;
    let (_, hop) = session.open_at(&this_x, this_y)?;
    Ok((verified, hop))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PairingEngine;

    fn scalars(values: &[u64]) -> Vec<Fr> {
        values.iter().map(|v| Fr::from_u64(*v)).collect()
    }

    fn session(values: &[u64]) -> Result<RouteSession<PairingEngine>, Error> {
        setup_route(&scalars(values), &RouteParameters::testing())
    }

    #[test]
    fn three_nodes_commit_to_a_quadratic() {
        let session = session(&[11, 27, 42]).unwrap();
        assert_eq!(session.polynomial().degree(), 2);
        assert_eq!(session.srs().max_degree(), 16);
        for (x, y) in [(11, 1), (27, 2), (42, 3)] {
            assert_eq!(session.polynomial().evaluate(&Fr::from_u64(x)), Fr::from_u64(y));
        }

        let (value, proof) =
            KZG::open_g1(session.srs(), session.polynomial(), &Fr::from_u64(27)).unwrap();
        assert_eq!(value, Fr::from_u64(2));
        let commitment = session.commitment();
        let x = Fr::from_u64(27);
        assert!(KZG::verify_g1(session.srs(), commitment, &x, &value, &proof).unwrap());
        let claimed = Fr::from_u64(3);
        assert!(!KZG::verify_g1(session.srs(), commitment, &x, &claimed, &proof).unwrap());
    }

    #[test]
    fn two_nodes_are_too_weak() {
        assert_eq!(session(&[5, 9]).unwrap_err(), Error::DegreeTooLow { degree: 1 });
    }

    #[test]
    fn collinear_secrets_are_too_weak() {
        // y = x, so the interpolated polynomial is the identity line
        assert_eq!(session(&[1, 2, 3]).unwrap_err(), Error::DegreeTooLow { degree: 1 });
    }

    #[test]
    fn duplicate_secrets_are_rejected_before_interpolation() {
        assert_eq!(
            session(&[7, 8, 7]).unwrap_err(),
            Error::DuplicateSecret { first: 0, second: 2 }
        );
    }

    #[test]
    fn srs_grows_beyond_the_floor() {
        let params = RouteParameters {
            srs_degree_floor: 2,
            ..RouteParameters::testing()
        };
        let secrets = scalars(&[3, 5, 8, 13, 21]);
        let session: RouteSession<PairingEngine> = setup_route(&secrets, &params).unwrap();
        assert_eq!(session.srs().max_degree(), session.polynomial().degree());
    }

    #[test]
    fn fixed_seed_sessions_are_reproducible() {
        let a = session(&[11, 27, 42]).unwrap();
        let b = session(&[11, 27, 42]).unwrap();
        assert_eq!(a.commitment(), b.commitment());

        let random: RouteSession<PairingEngine> =
            setup_route(&scalars(&[11, 27, 42]), &RouteParameters::default()).unwrap();
        assert_ne!(random.commitment(), a.commitment());
    }

    #[test]
    fn relay_step_chains_hops() {
        let session = session(&[11, 27, 42]).unwrap();
        let (first_check, first) = relay_step(&session, None, Fr::from_u64(11), 1).unwrap();
        assert_eq!(first_check, None);

        let (second_check, second) =
            relay_step(&session, Some(&first), Fr::from_u64(27), 2).unwrap();
        assert_eq!(second_check, Some(true));

        // 42 sits at position 3; opening it as position 2 cannot verify
        let (_, misplaced) = relay_step(&session, Some(&second), Fr::from_u64(42), 2).unwrap();
        let (misplaced_check, _) =
            relay_step(&session, Some(&misplaced), Fr::from_u64(11), 3).unwrap();
        assert_eq!(misplaced_check, Some(false));
    }

    #[test]
    fn setup_errors_convert_from_backend() {
        let err: Error = BackendError::SrsTooShort { degree: 3, supported: 2 }.into();
        assert!(matches!(err, Error::Backend(BackendError::SrsTooShort { .. })));
    }
}
