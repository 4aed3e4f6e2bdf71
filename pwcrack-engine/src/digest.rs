//! SHA-1 digests of candidate strings.
//!
//! Digests are kept as raw 20-byte arrays so lookups are plain byte equality.
//! Parsing accepts either hex case; formatting always produces lowercase.

use std::fmt;
use std::str::FromStr;

use sha1::{Digest as _, Sha1};

use crate::error::Error;

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Length of a SHA-1 digest rendered as hex.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// A SHA-1 digest over the UTF-8 bytes of a candidate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Hashes `candidate`.
    #[inline]
    pub fn of(candidate: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(candidate.as_bytes());
        Self(hasher.finalize().into())
    }

    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Parses a 40-character hex digest. Upper, lower and mixed case are
    /// all accepted and decode to the same value.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let bytes = hex.as_bytes();
        if bytes.len() != HEX_LEN {
            return Err(Error::InvalidDigest {
                input: hex.to_string(),
                reason: "expected 40 hex characters",
            });
        }

        let mut out = [0u8; DIGEST_LEN];
        for (byte, pair) in out.iter_mut().zip(bytes.chunks_exact(2)) {
            match (hex_to_nibble(pair[0]), hex_to_nibble(pair[1])) {
                (Some(hi), Some(lo)) => *byte = (hi << 4) | lo,
                _ => {
                    return Err(Error::InvalidDigest {
                        input: hex.to_string(),
                        reason: "non-hex character",
                    });
                }
            }
        }

        Ok(Self(out))
    }

    /// Lowercase hex rendering, stack allocated.
    pub fn to_hex(&self) -> [u8; HEX_LEN] {
        let mut out = [0u8; HEX_LEN];
        for (i, byte) in self.0.iter().enumerate() {
            out[i * 2] = HEX_CHARS[(byte >> 4) as usize];
            out[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
        }
        out
    }
}

/// Hashes `candidate`. Shorthand for [`Digest::of`].
#[inline]
pub fn digest(candidate: &str) -> Digest {
    Digest::of(candidate)
}

/// Convert hex ASCII character to nibble value (0-15)
#[inline]
fn hex_to_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.to_hex();
        // SAFETY: to_hex only emits ASCII from HEX_CHARS
        f.write_str(unsafe { std::str::from_utf8_unchecked(&hex) })
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_known_vectors() {
        // password123 -> SHA1: CBFDAC6008F9CAB4083784CBD1874F76618D2A97
        assert_eq!(
            digest("password123").as_bytes(),
            &hex!("cbfdac6008f9cab4083784cbd1874f76618d2a97")
        );
        assert_eq!(
            digest("").as_bytes(),
            &hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709")
        );
        assert_eq!(
            digest("abc").as_bytes(),
            &hex!("a9993e364706816aba3e25717850c26c9cd0d89d")
        );
    }

    #[test]
    fn test_deterministic() {
        for candidate in ["", "0007", "dragon123", "p4ssword", "héllo wörld"] {
            assert_eq!(digest(candidate), digest(candidate));
        }
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(
            digest("password123").to_string(),
            "cbfdac6008f9cab4083784cbd1874f76618d2a97"
        );
    }

    #[test]
    fn test_from_hex_any_case() {
        let lower: Digest = "cbfdac6008f9cab4083784cbd1874f76618d2a97".parse().unwrap();
        let upper: Digest = "CBFDAC6008F9CAB4083784CBD1874F76618D2A97".parse().unwrap();
        let mixed: Digest = "CbFdAc6008f9CAB4083784cbd1874F76618d2A97".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(lower, digest("password123"));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Digest::from_hex("").is_err());
        assert!(Digest::from_hex("cbfdac6008f9cab4083784cbd1874f76618d2a9").is_err());
        assert!(Digest::from_hex("cbfdac6008f9cab4083784cbd1874f76618d2a977").is_err());
        assert!(Digest::from_hex("zbfdac6008f9cab4083784cbd1874f76618d2a97").is_err());
    }

    #[test]
    fn test_hex_to_nibble() {
        assert_eq!(hex_to_nibble(b'0'), Some(0));
        assert_eq!(hex_to_nibble(b'9'), Some(9));
        assert_eq!(hex_to_nibble(b'A'), Some(10));
        assert_eq!(hex_to_nibble(b'f'), Some(15));
        assert_eq!(hex_to_nibble(b'g'), None);
    }
}
