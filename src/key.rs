//! # DID Key
//!
//! Decoding of `did:key` identifiers into typed public keys.
//!
//! See:
//!
//! - <https://w3c-ccg.github.io/did-method-key>
//! - <https://w3c.github.io/did-resolution>

mod decode;

use std::fmt::{Display, Formatter};

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

pub use self::decode::decode;

/// Elliptic curves with a complete decoding rule in this crate.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Curve {
    /// NIST P-256 (secp256r1).
    P256,

    /// NIST P-384 (secp384r1).
    P384,

    /// NIST P-521 (secp521r1).
    P521,
}

impl Display for Curve {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P256 => write!(f, "P-256"),
            Self::P384 => write!(f, "P-384"),
            Self::P521 => write!(f, "P-521"),
        }
    }
}

/// An elliptic curve public key as an affine point.
///
/// Coordinates are big-endian unsigned integers, validated to lie on the
/// named curve during decoding.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EllipticCurveKey {
    /// The curve the point lies on.
    pub curve: Curve,

    /// Affine x coordinate.
    pub x: BigUint,

    /// Affine y coordinate.
    pub y: BigUint,
}

/// A public key decoded from a `did:key` identifier.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum PublicKey {
    /// A key on one of the supported NIST curves.
    EllipticCurve(EllipticCurveKey),
}
