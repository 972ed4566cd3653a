//! # DID Key
//!
//! The `did:key` method is a DID method for static cryptographic keys. The
//! identifier is self-describing: a multibase envelope wraps a
//! multicodec-tagged byte sequence, where a leading varint identifies the
//! key's algorithm and the remainder holds the raw key bytes.
//!
//! This crate decodes such identifiers into typed public keys. NIST curves
//! (P-256, P-384 and P-521) are decoded in full; other registered key
//! families are recognized but reported as unsupported.
//!
//! See:
//!
//! - <https://w3c-ccg.github.io/did-method-key>
//! - <https://github.com/multiformats/multicodec>

mod codec;
mod error;
pub mod key;
mod provider;
mod url;

pub use self::error::Error;
pub use self::key::{decode, Curve, EllipticCurveKey, PublicKey};
pub use self::provider::DocumentResolver;
pub use self::url::{Method, Url};

/// Result type for the `did:key` decoder.
pub type Result<T, E = Error> = core::result::Result<T, E>;
