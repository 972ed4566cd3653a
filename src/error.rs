//! # Errors
//!
//! Classified decode failures, ordered by pipeline stage: syntax → method →
//! encoding → base → tag framing → key-type support → point validity.

use thiserror::Error;

use crate::key::Curve;

/// Decode failures. Each identifier is rejected with exactly one variant and
/// no partial key value.
///
/// All variants are terminal for the decode call. Decoding is deterministic,
/// so retrying the same input yields the same error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input does not conform to the generic DID grammar.
    #[error("invalid DID syntax: {0}")]
    InvalidIdentifierSyntax(String),

    /// The DID method is not `key`.
    #[error("unsupported DID method: {0}")]
    UnsupportedMethod(String),

    /// The method-specific id is not a valid multibase string.
    #[error("invalid multibase encoding: {0}")]
    InvalidEncoding(String),

    /// The multibase base is valid but is not Base58-BTC. The character is
    /// the multibase code of the base that was detected.
    #[error("unsupported base encoding: {0}")]
    UnsupportedBaseEncoding(char),

    /// The decoded bytes end before the multicodec varint terminates.
    #[error("truncated multicodec tag")]
    TruncatedTag,

    /// The multicodec tag names a key family this crate does not decode.
    /// Carries the family name for registered tags, or the tag value for
    /// unregistered ones.
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),

    /// The key payload is not a valid uncompressed point on the named curve.
    #[error("malformed {0} curve point")]
    MalformedCurvePoint(Curve),
}
