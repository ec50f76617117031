//! Variable-length byte payloads carried as base64 text.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// Opaque bytes encoded as standard base64 on the wire.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Base64Data(Vec<u8>);

/// A transaction digest.
pub type TransactionDigest = Base64Data;

/// A generic object or checkpoint digest.
pub type Digest = Base64Data;

impl Base64Data {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn from_base64(s: &str) -> Result<Self, CodecError> {
        base64::decode(s)
            .map(Self)
            .map_err(|e| CodecError::InvalidBase64(e.to_string()))
    }

    pub fn to_base64(&self) -> String {
        base64::encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Base64Data {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Base64Data {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Base64Data {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base64(s)
    }
}

impl fmt::Debug for Base64Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Base64Data({})", self.to_base64())
    }
}

impl fmt::Display for Base64Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl Serialize for Base64Data {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Base64Data {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Base64Visitor;

        impl<'de> de::Visitor<'de> for Base64Visitor {
            type Value = Base64Data;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a base64 string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Base64Data::from_base64(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Base64Visitor)
    }
}
