//! Canonical, round-trippable hex encodings.
//!
//! Scalars encode as their 32-byte big-endian representation, points as their
//! compressed form. Decoding re-validates the value, so a point decoded from hex
//! is always on the curve and in the prime-order subgroup.

use crate::{BackendError, CurvePoint, FieldElement, Fr, G1, G2};

/// Lowercase hex encoding of a canonical byte representation.
///
/// # Example
///
/// ```rust
/// use kzg_route::{CurvePoint, FieldElement, Fr, G1, HexEncoding};
///
/// let x = Fr::from_u64(27);
/// assert_eq!(Fr::from_hex(&x.to_hex())?, x);
///
/// let p = G1::generator();
/// assert_eq!(G1::from_hex(&p.to_hex())?, p);
/// # Ok::<(), kzg_route::BackendError>(())
/// ```
pub trait HexEncoding: Sized {
    fn to_hex(&self) -> String;

    fn from_hex(s: &str) -> Result<Self, BackendError>;
}

fn decode(s: &str) -> Result<Vec<u8>, BackendError> {
    hex::decode(s.trim().trim_start_matches("0x"))
        .map_err(|_| BackendError::Serialization("invalid hex string"))
}

impl HexEncoding for Fr {
    fn to_hex(&self) -> String {
        hex::encode(self.to_repr())
    }

    fn from_hex(s: &str) -> Result<Self, BackendError> {
        let bytes = decode(s)?;
        let mut repr = <Fr as FieldElement>::Repr::default();
        if bytes.len() != repr.as_ref().len() {
            return Err(BackendError::Serialization("invalid scalar length"));
        }
        repr.as_mut().copy_from_slice(&bytes);
        Fr::from_repr(&repr)
    }
}

impl HexEncoding for G1 {
    fn to_hex(&self) -> String {
        hex::encode(CurvePoint::<Fr>::to_compressed(self))
    }

    fn from_hex(s: &str) -> Result<Self, BackendError> {
        <G1 as CurvePoint<Fr>>::from_compressed(&decode(s)?)
    }
}

impl HexEncoding for G2 {
    fn to_hex(&self) -> String {
        hex::encode(CurvePoint::<Fr>::to_compressed(self))
    }

    fn from_hex(s: &str) -> Result<Self, BackendError> {
        <G2 as CurvePoint<Fr>>::from_compressed(&decode(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_hex_is_big_endian_and_fixed_width() {
        let x = Fr::from_u64(0x2a);
        let encoded = x.to_hex();
        assert_eq!(encoded.len(), 64);
        assert!(encoded.ends_with("2a"));
        assert_eq!(Fr::from_hex(&format!("0x{encoded}")).unwrap(), x);
    }

    #[test]
    fn rejects_unreduced_scalar_and_garbage() {
        assert!(Fr::from_hex(&"ff".repeat(32)).is_err());
        assert!(Fr::from_hex("zz").is_err());
        assert!(Fr::from_hex("00").is_err());
    }

    #[test]
    fn points_round_trip() {
        let g2 = <G2 as CurvePoint<Fr>>::generator().mul_scalar(&Fr::from_u64(77));
        assert_eq!(G2::from_hex(&g2.to_hex()).unwrap(), g2);
        let id = <G1 as CurvePoint<Fr>>::identity();
        assert_eq!(G1::from_hex(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn corrupted_point_is_rejected() {
        // Compressed flag set, but x is not the abscissa of any curve point.
        let mut bytes = vec![0u8; 48];
        bytes[0] = 0x80;
        bytes[47] = 0x05;
        let result = G1::from_hex(&hex::encode(bytes));
        assert!(matches!(result, Err(BackendError::InvalidCurvePoint(_))));
    }
}
