//! Fixed-length hex identifiers: addresses and object ids.
//!
//! Identifiers travel as hex strings of any length up to `2 * N` digits, with
//! or without a `0x` prefix. Parsing canonicalizes them: the decoded value is
//! right-aligned in an `N`-byte buffer, so `0x2`, `0x02` and `0X0002` all
//! produce the same bytes.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// Byte length of addresses and object ids.
pub const ADDRESS_LENGTH: usize = 32;

/// Exactly `N` bytes, always fully initialized.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedBytes<const N: usize>([u8; N]);

/// An account address.
pub type Address = FixedBytes<ADDRESS_LENGTH>;

/// An on-chain object id. Same representation as [`Address`].
pub type ObjectId = FixedBytes<ADDRESS_LENGTH>;

impl<const N: usize> Default for FixedBytes<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> FixedBytes<N> {
    pub const ZERO: Self = Self([0u8; N]);

    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Parse a hex string into a canonical `N`-byte identifier.
    ///
    /// Accepts an optional `0x`/`0X` prefix. An odd number of digits is
    /// left-padded with one `0`. The decoded bytes are left-padded with zero
    /// bytes up to `N`.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let decoded = if digits.len() % 2 != 0 {
            hex::decode(format!("0{digits}"))
        } else {
            hex::decode(digits)
        }
        .map_err(|e| CodecError::InvalidHex(format!("{s:?}: {e}")))?;

        if decoded.len() > N {
            return Err(CodecError::TooLong {
                max: N,
                actual: decoded.len(),
            });
        }

        let mut bytes = [0u8; N];
        bytes[N - decoded.len()..].copy_from_slice(&decoded);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; N]
    }

    /// Full-width lowercase hex, without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The identifier with leading zero digits trimmed, e.g. `0x2`.
    ///
    /// Trimming is per hex digit, not per byte. The all-zero identifier keeps
    /// one digit and renders as `0x0`, so the result always parses back.
    pub fn short_string(&self) -> String {
        let encoded = self.to_hex();
        let trimmed = encoded.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{trimmed}")
        }
    }
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> FromStr for FixedBytes<N> {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<const N: usize> fmt::Debug for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBytes({})", self.short_string())
    }
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl<const N: usize> Serialize for FixedBytes<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedBytes<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor<const M: usize>;

        impl<'de, const M: usize> de::Visitor<'de> for HexVisitor<M> {
            type Value = FixedBytes<M>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a hex string of at most {} bytes", M)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                FixedBytes::from_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor::<N>)
    }
}

/// Loose string-level address comparison.
///
/// Strips one lowercase `0x` prefix and then every leading `0` from each side
/// and compares what is left. Nothing is validated: `"0xzz"` and `"zz"` are
/// equal here even though neither parses. Use [`FixedBytes::from_hex`] when the
/// input must be a real identifier.
pub fn is_same_str_address(a: &str, b: &str) -> bool {
    fn normalize(s: &str) -> &str {
        s.strip_prefix("0x").unwrap_or(s).trim_start_matches('0')
    }
    normalize(a) == normalize(b)
}
