//! Decoding of a `did:key` identifier into a public key.
//!
//! The pipeline is linear: validate the identifier shape, strip the
//! multibase envelope, read the multicodec varint, then dispatch on the tag
//! to a curve-specific point decoder.

use std::str::FromStr;

use multibase::Base;
use num_bigint::BigUint;
use p256::elliptic_curve::sec1::{Coordinates, FromEncodedPoint};
use tracing::debug;

use super::{Curve, EllipticCurveKey, PublicKey};
use crate::codec::{self, KeyCodec};
use crate::error::Error;
use crate::url::Url;

/// Decode a `did:key` identifier into a typed public key.
///
/// Pure function of its input: no partial key value is ever returned, and
/// decoding the same identifier twice yields equal results.
///
/// # Errors
///
/// Returns a classified [`Error`] for every rejection: invalid DID syntax,
/// a method other than `key`, an invalid or non-Base58-BTC multibase
/// envelope, a truncated multicodec tag, a key family with no decoding rule
/// here (Ed25519, X25519, Secp256k1, or any unregistered tag), or a payload
/// that is not a valid uncompressed point on the tagged curve.
pub fn decode(identifier: &str) -> crate::Result<PublicKey> {
    let url = Url::from_str(identifier)?;

    let (base, decoded) =
        multibase::decode(&url.id).map_err(|e| Error::InvalidEncoding(e.to_string()))?;
    if base != Base::Base58Btc {
        return Err(Error::UnsupportedBaseEncoding(base.code()));
    }

    let (tag, width) = codec::read_uvarint(&decoded)?;
    // The payload starts where the varint ends, not at a fixed offset.
    let payload = &decoded[width..];
    debug!("multicodec tag {tag:#x} ({width}-byte encoding)");

    let key = match KeyCodec::from_tag(tag) {
        Some(KeyCodec::Ed25519Pub) => return Err(Error::UnsupportedKeyType("Ed25519".into())),
        Some(KeyCodec::X25519Pub) => return Err(Error::UnsupportedKeyType("X25519".into())),
        Some(KeyCodec::Secp256k1Pub) => {
            return Err(Error::UnsupportedKeyType("Secp256k1".into()));
        }
        Some(KeyCodec::P256Pub) => p256_key(payload)?,
        Some(KeyCodec::P384Pub) => p384_key(payload)?,
        Some(KeyCodec::P521Pub) => p521_key(payload)?,
        None => return Err(Error::UnsupportedKeyType(tag.to_string())),
    };

    Ok(PublicKey::EllipticCurve(key))
}

// Unmarshal an uncompressed SEC1 point on P-256. Compressed, compact and
// identity encodings are rejected along with off-curve points.
fn p256_key(payload: &[u8]) -> crate::Result<EllipticCurveKey> {
    let point = p256::EncodedPoint::from_bytes(payload)
        .map_err(|_| Error::MalformedCurvePoint(Curve::P256))?;
    let Coordinates::Uncompressed { x, y } = point.coordinates() else {
        return Err(Error::MalformedCurvePoint(Curve::P256));
    };
    if Option::<p256::PublicKey>::from(p256::PublicKey::from_encoded_point(&point)).is_none() {
        return Err(Error::MalformedCurvePoint(Curve::P256));
    }
    Ok(EllipticCurveKey {
        curve: Curve::P256,
        x: BigUint::from_bytes_be(x.as_slice()),
        y: BigUint::from_bytes_be(y.as_slice()),
    })
}

fn p384_key(payload: &[u8]) -> crate::Result<EllipticCurveKey> {
    let point = p384::EncodedPoint::from_bytes(payload)
        .map_err(|_| Error::MalformedCurvePoint(Curve::P384))?;
    let Coordinates::Uncompressed { x, y } = point.coordinates() else {
        return Err(Error::MalformedCurvePoint(Curve::P384));
    };
    if Option::<p384::PublicKey>::from(p384::PublicKey::from_encoded_point(&point)).is_none() {
        return Err(Error::MalformedCurvePoint(Curve::P384));
    }
    Ok(EllipticCurveKey {
        curve: Curve::P384,
        x: BigUint::from_bytes_be(x.as_slice()),
        y: BigUint::from_bytes_be(y.as_slice()),
    })
}

fn p521_key(payload: &[u8]) -> crate::Result<EllipticCurveKey> {
    let point = p521::EncodedPoint::from_bytes(payload)
        .map_err(|_| Error::MalformedCurvePoint(Curve::P521))?;
    let Coordinates::Uncompressed { x, y } = point.coordinates() else {
        return Err(Error::MalformedCurvePoint(Curve::P521));
    };
    if Option::<p521::PublicKey>::from(p521::PublicKey::from_encoded_point(&point)).is_none() {
        return Err(Error::MalformedCurvePoint(Curve::P521));
    }
    Ok(EllipticCurveKey {
        curve: Curve::P521,
        x: BigUint::from_bytes_be(x.as_slice()),
        y: BigUint::from_bytes_be(y.as_slice()),
    })
}
