//! Property-based tests for kzg-route

use std::collections::HashSet;

use kzg_route::*;
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

fn scalar(seed: u64) -> Fr {
    <Fr as FieldElement>::random(&mut StdRng::seed_from_u64(seed))
}

fn scalars(seeds: &[u64]) -> Vec<Fr> {
    seeds.iter().map(|s| scalar(*s)).collect()
}

// Property test: field operations obey the ring axioms and inversion
proptest! {
    #[test]
    fn field_axioms(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        let (a, b, c) = (scalar(a), scalar(b), scalar(c));

        prop_assert_eq!((a + b) + c, a + (b + c));
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a - a, Fr::zero());

        if !FieldElement::is_zero(&b) {
            let inv = FieldElement::invert(&b).unwrap();
            prop_assert_eq!(b * inv, Fr::one());
            prop_assert_eq!((a * b).div(&b).unwrap(), a);
        }
    }

    #[test]
    fn integer_conversions_stay_reduced(value in any::<u64>(), a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(Fr::from_u64(value).to_u256(), [value, 0, 0, 0]);

        let sum = scalar(a) + scalar(b);
        let limbs = sum.to_u256();
        prop_assert_eq!(Fr::from_u256(&limbs).unwrap(), sum);
    }
}

// Property test: interpolation hits every point and is unique
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn interpolation_correct_and_unique(
        xs in prop::collection::hash_set(any::<u64>(), 2..10),
        y_seed in any::<u64>(),
        extra_seed in any::<u64>(),
    ) {
        let xs: Vec<Fr> = xs.into_iter().map(Fr::from_u64).collect();
        let mut rng = StdRng::seed_from_u64(y_seed);
        let points: Vec<(Fr, Fr)> = xs
            .iter()
            .map(|x| (*x, <Fr as FieldElement>::random(&mut rng)))
            .collect();

        let poly = interpolate(&points).unwrap();
        prop_assert!(poly.degree() < points.len());
        for (x, y) in &points {
            prop_assert_eq!(poly.evaluate(x), *y);
        }

        // A further point already on the polynomial must not change it.
        let extra = scalar(extra_seed);
        prop_assume!(!xs.contains(&extra));
        let mut extended = points.clone();
        extended.push((extra, poly.evaluate(&extra)));
        let again = interpolate(&extended).unwrap();
        prop_assert!(again.degree() < points.len());
        let probe = scalar(extra_seed.wrapping_add(1));
        prop_assert_eq!(again.evaluate(&probe), poly.evaluate(&probe));
    }

    #[test]
    fn duplicate_abscissas_are_rejected(xs in prop::collection::vec(any::<u64>(), 1..8), pick in any::<prop::sample::Index>()) {
        let mut points: Vec<(Fr, Fr)> = xs.iter().map(|x| (Fr::from_u64(*x), Fr::one())).collect();
        let repeated = points[pick.index(points.len())];
        points.push(repeated);
        prop_assert!(
            matches!(interpolate(&points), Err(BackendError::DuplicateAbscissa { .. })),
            "duplicate abscissa accepted"
        );
    }
}

// Property test: openings verify, tampered claims do not
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn opening_soundness(
        coeff_seeds in prop::collection::vec(any::<u64>(), 1..9),
        point_seed in any::<u64>(),
        delta in 1u64..,
    ) {
        let srs: SRS<PairingEngine> = KZG::setup(8, b"property tests").unwrap();
        let poly = DensePolynomial::from_coefficients_vec(scalars(&coeff_seeds));
        let commitment = KZG::commit_g1(&srs, &poly).unwrap();

        let point = scalar(point_seed);
        let (value, proof) = KZG::open_g1(&srs, &poly, &point).unwrap();
        prop_assert_eq!(value, poly.evaluate(&point));
        prop_assert!(KZG::verify_g1(&srs, &commitment, &point, &value, &proof).unwrap());

        let tampered = value + Fr::from_u64(delta);
        prop_assert!(!KZG::verify_g1(&srs, &commitment, &point, &tampered, &proof).unwrap());
    }

    #[test]
    fn route_setup_rejects_weak_or_duplicate_secrets(secrets in prop::collection::hash_set(1u64..u32::MAX as u64, 3..8)) {
        let params = RouteParameters::testing();
        let secrets: Vec<Fr> = secrets.into_iter().map(Fr::from_u64).collect();

        prop_assert_eq!(
            setup_route::<PairingEngine>(&secrets[..2], &params).unwrap_err(),
            Error::DegreeTooLow { degree: 1 }
        );

        let mut duplicated = secrets.clone();
        duplicated.push(secrets[0]);
        prop_assert_eq!(
            setup_route::<PairingEngine>(&duplicated, &params).unwrap_err(),
            Error::DuplicateSecret { first: 0, second: secrets.len() }
        );
    }
}

#[test]
fn end_to_end_three_nodes() {
    let secrets: Vec<Fr> = [11u64, 27, 42].map(Fr::from_u64).to_vec();
    let session = setup_route::<PairingEngine>(&secrets, &RouteParameters::testing()).unwrap();
    assert_eq!(session.polynomial().degree(), 2);

    let x = Fr::from_u64(27);
    let (value, proof) = KZG::open_g1(session.srs(), session.polynomial(), &x).unwrap();
    assert_eq!(value, Fr::from_u64(2));
    assert!(KZG::verify_g1(session.srs(), session.commitment(), &x, &value, &proof).unwrap());
    assert!(
        !KZG::verify_g1(session.srs(), session.commitment(), &x, &Fr::from_u64(3), &proof).unwrap()
    );
}

#[test]
fn chain_relay_with_extra_nodes() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut protocol = RouteProtocol::<PairingEngine>::new(RouteParameters::testing()).unwrap();
    protocol.declare_route("ABC".parse().unwrap()).unwrap();
    protocol.generate_secrets(&mut rng).unwrap();
    protocol.commit().unwrap();

    let traversal: Route = "ABCDE".parse().unwrap();
    let transcript = protocol.relay(&traversal, &mut rng).unwrap().run(&mut ()).unwrap();
    assert_eq!(protocol.state(), RouteState::Completed);

    let ys: Vec<u64> = transcript.reports.iter().map(|r| r.y).collect();
    assert_eq!(ys, vec![1, 2, 3, 4, 5]);
    let xs: HashSet<_> = transcript.reports.iter().map(|r| r.x.to_hex()).collect();
    assert_eq!(xs.len(), 5, "extra nodes need fresh secrets");
}
