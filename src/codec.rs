//! # Multicodec registry
//!
//! The subset of the multicodec registry this crate dispatches on, embedded
//! as named constants rather than read from the live registry.
//!
//! See <https://github.com/multiformats/multicodec/blob/master/table.csv>.

use crate::error::Error;

/// Ed25519 public key.
pub const ED25519_PUB: u64 = 0xed;

/// X25519 public key.
pub const X25519_PUB: u64 = 0xec;

/// Secp256k1 public key (compressed).
pub const SECP256K1_PUB: u64 = 0xe7;

/// P-256 public key.
pub const P256_PUB: u64 = 0x1200;

/// P-384 public key.
pub const P384_PUB: u64 = 0x1201;

/// P-521 public key.
pub const P521_PUB: u64 = 0x1202;

/// Registered key-family codes this crate knows about.
///
/// A tag outside this enum is *unknown*; a tag inside it may still be
/// unsupported for decoding. The two cases are reported differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCodec {
    /// Ed25519 public key (`0xed`).
    Ed25519Pub,
    /// X25519 public key (`0xec`).
    X25519Pub,
    /// Secp256k1 public key (`0xe7`).
    Secp256k1Pub,
    /// P-256 public key (`0x1200`).
    P256Pub,
    /// P-384 public key (`0x1201`).
    P384Pub,
    /// P-521 public key (`0x1202`).
    P521Pub,
}

impl KeyCodec {
    /// Look up a decoded multicodec tag in the embedded registry subset.
    #[must_use]
    pub const fn from_tag(tag: u64) -> Option<Self> {
        match tag {
            ED25519_PUB => Some(Self::Ed25519Pub),
            X25519_PUB => Some(Self::X25519Pub),
            SECP256K1_PUB => Some(Self::Secp256k1Pub),
            P256_PUB => Some(Self::P256Pub),
            P384_PUB => Some(Self::P384Pub),
            P521_PUB => Some(Self::P521Pub),
            _ => None,
        }
    }
}

// An unsigned varint never needs more than 10 bytes for a u64.
const MAX_VARINT_LEN: usize = 10;

/// Read an unsigned LEB128 varint from the start of `buf`.
///
/// Each byte contributes 7 value bits, least-significant group first, with
/// the high bit set on all but the terminating byte. Returns the value and
/// the number of bytes consumed, so callers can locate the payload that
/// follows the tag.
///
/// # Errors
///
/// Returns [`Error::TruncatedTag`] if `buf` ends before a terminating byte,
/// or if no valid terminating byte can occur within a `u64`.
pub fn read_uvarint(buf: &[u8]) -> crate::Result<(u64, usize)> {
    let mut value = 0_u64;
    let mut shift = 0_u32;

    for (i, &byte) in buf.iter().enumerate() {
        if i == MAX_VARINT_LEN - 1 && byte > 1 {
            // Continuation past, or a terminator above, what a u64 can hold.
            return Err(Error::TruncatedTag);
        }
        if byte < 0x80 {
            return Ok((value | (u64::from(byte) << shift), i + 1));
        }
        value |= u64::from(byte & 0x7f) << shift;
        shift += 7;
    }

    Err(Error::TruncatedTag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_tag() {
        assert_eq!(read_uvarint(&[0x55]).unwrap(), (0x55, 1));
        assert_eq!(read_uvarint(&[0x00, 0xff]).unwrap(), (0, 1));
    }

    #[test]
    fn multi_byte_tag() {
        // 0x1200 (P-256) encodes as 0x80 0x24.
        assert_eq!(read_uvarint(&[0x80, 0x24]).unwrap(), (P256_PUB, 2));
        // 0xed (Ed25519) encodes as 0xed 0x01.
        assert_eq!(read_uvarint(&[0xed, 0x01, 0xaa]).unwrap(), (ED25519_PUB, 2));
    }

    #[test]
    fn width_tracks_encoding() {
        let (_, one) = read_uvarint(&[0x55, 0x04, 0x04]).unwrap();
        let (_, two) = read_uvarint(&[0x80, 0x24, 0x04]).unwrap();
        assert_eq!(one, 1);
        assert_eq!(two, 2);
    }

    #[test]
    fn truncated() {
        assert_eq!(read_uvarint(&[]).unwrap_err(), Error::TruncatedTag);
        assert_eq!(read_uvarint(&[0x80]).unwrap_err(), Error::TruncatedTag);
        assert_eq!(read_uvarint(&[0xff, 0xff]).unwrap_err(), Error::TruncatedTag);
    }

    #[test]
    fn overflows_u64() {
        assert_eq!(read_uvarint(&[0x80; 11]).unwrap_err(), Error::TruncatedTag);
        assert_eq!(
            read_uvarint(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x02])
                .unwrap_err(),
            Error::TruncatedTag
        );
        // u64::MAX is still representable.
        let max = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01];
        assert_eq!(read_uvarint(&max).unwrap(), (u64::MAX, 10));
    }

    #[test]
    fn registry_lookup() {
        assert_eq!(KeyCodec::from_tag(0x1200), Some(KeyCodec::P256Pub));
        assert_eq!(KeyCodec::from_tag(0xed), Some(KeyCodec::Ed25519Pub));
        assert_eq!(KeyCodec::from_tag(0x1205), None);
    }
}
