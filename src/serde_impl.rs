//! Serde serialization support for published route values.
//!
//! This module provides serde `Serialize` and `Deserialize` implementations
//! for the values a coordinator publishes or a front end logs: polynomials,
//! structured reference strings, commitments and opening proofs.
//!
//! # Serialization Strategy
//!
//! - **Scalars**: lowercase hex of the 32-byte big-endian representation
//! - **Curve Points** (G1, G2): lowercase hex of the compressed encoding
//! - **Vectors**: serialized as arrays of the above
//!
//! Deserialization decodes through the validating constructors, so points off
//! the curve or outside the subgroup are rejected and an SRS must start at the
//! group generators.
//!
//! # Example
//!
//! ```rust
//! use kzg_route::{Commitment, PairingEngine, RouteParameters, setup_route, FieldElement, Fr};
//!
//! let secrets = [11u64, 27, 42].map(Fr::from_u64);
//! let session = setup_route::<PairingEngine>(&secrets, &RouteParameters::testing())?;
//!
//! let json = serde_json::to_string(session.commitment()).unwrap();
//! let back: Commitment<PairingEngine> = serde_json::from_str(&json).unwrap();
//! assert_eq!(&back, session.commitment());
//! # Ok::<(), kzg_route::Error>(())
//! ```

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    Commitment, DensePolynomial, Fr, HexEncoding, OpeningProof, PairingBackend, Polynomial, SRS,
};

fn from_hex<T: HexEncoding, E: de::Error>(s: &str) -> Result<T, E> {
    T::from_hex(s).map_err(E::custom)
}

// Implement Serialize and Deserialize for DensePolynomial
impl Serialize for DensePolynomial {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.coeffs()
            .iter()
            .map(HexEncoding::to_hex)
            .collect::<Vec<String>>()
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DensePolynomial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let coeffs = Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| from_hex::<Fr, D::Error>(s))
            .collect::<Result<Vec<Fr>, D::Error>>()?;
        Ok(DensePolynomial::from_coefficients_vec(coeffs))
    }
}

// Implement Serialize and Deserialize for SRS
impl<B: PairingBackend<Scalar = Fr>> Serialize for SRS<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("SRS", 2)?;
        state.serialize_field(
            "powers_of_g",
            &self.powers_of_g().iter().map(HexEncoding::to_hex).collect::<Vec<_>>(),
        )?;
        state.serialize_field(
            "powers_of_h",
            &self.powers_of_h().iter().map(HexEncoding::to_hex).collect::<Vec<_>>(),
        )?;
        state.end()
    }
}

impl<'de, B: PairingBackend<Scalar = Fr>> Deserialize<'de> for SRS<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct SrsHelper {
            powers_of_g: Vec<String>,
            powers_of_h: Vec<String>,
        }

        let helper = SrsHelper::deserialize(deserializer)?;
        let powers_of_g = helper
            .powers_of_g
            .iter()
            .map(|s| from_hex::<B::G1, D::Error>(s))
            .collect::<Result<Vec<_>, _>>()?;
        let powers_of_h = helper
            .powers_of_h
            .iter()
            .map(|s| from_hex::<B::G2, D::Error>(s))
            .collect::<Result<Vec<_>, _>>()?;
        SRS::from_powers(powers_of_g, powers_of_h).map_err(de::Error::custom)
    }
}

// Implement Serialize and Deserialize for Commitment
impl<B: PairingBackend<Scalar = Fr>> Serialize for Commitment<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de, B: PairingBackend<Scalar = Fr>> Deserialize<'de> for Commitment<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        from_hex::<B::G1, D::Error>(&s).map(Commitment)
    }
}

// Implement Serialize and Deserialize for OpeningProof
impl<B: PairingBackend<Scalar = Fr>> Serialize for OpeningProof<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de, B: PairingBackend<Scalar = Fr>> Deserialize<'de> for OpeningProof<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        from_hex::<B::G1, D::Error>(&s).map(OpeningProof)
    }
}
