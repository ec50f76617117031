//! Object references and object ownership.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::address::{Address, ObjectId};
use crate::digest::TransactionDigest;
use crate::error::CodecError;

/// An object version.
///
/// Nodes emit versions either as JSON numbers or as decimal strings (large
/// values do not survive JavaScript clients as numbers). Both decode; encoding
/// always produces a number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceNumber(u64);

impl SequenceNumber {
    pub const MIN: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for SequenceNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SequenceNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for SequenceNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_u64(deserializer).map(SequenceNumber)
    }
}

/// Decode a `u64` given either as a JSON number or as a decimal string.
///
/// For use with `#[serde(deserialize_with = "...")]` on counters that nodes
/// may emit in either form.
pub fn deserialize_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    struct U64Visitor;

    impl<'de> de::Visitor<'de> for U64Visitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "an unsigned integer or a decimal string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u64::try_from(v).map_err(|_| E::custom(CodecError::InvalidNumber(v.to_string())))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.parse::<u64>()
                .map_err(|_| E::custom(CodecError::InvalidNumber(v.to_string())))
        }
    }

    deserializer.deserialize_any(U64Visitor)
}

/// A reference to one version of an object.
///
/// Field order matches the binary serialization order and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRef {
    pub object_id: ObjectId,
    pub version: SequenceNumber,
    pub digest: TransactionDigest,
}

/// Structured ownership rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerRecord {
    /// Owned by an account address.
    AddressOwner(Address),
    /// Owned by another object.
    ObjectOwner(Address),
    /// Shared object, accessible to any transaction.
    Shared {
        initial_shared_version: SequenceNumber,
    },
}

/// The owner of an object, as reported by a node.
///
/// The wire value is either a bare JSON string (e.g. `"Immutable"`) or a JSON
/// object holding an [`OwnerRecord`]. There is no tag field; the shape of the
/// value is the discriminator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObjectOwner {
    Name(String),
    Rule(OwnerRecord),
}

impl ObjectOwner {
    pub const IMMUTABLE: &'static str = "Immutable";

    /// Decode from raw JSON by looking at the first significant byte.
    pub fn from_json_bytes(data: &[u8]) -> Result<Self, CodecError> {
        match data.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'"') => Ok(Self::Name(serde_json::from_slice(data)?)),
            Some(b'{') => Ok(Self::Rule(serde_json::from_slice(data)?)),
            _ => Err(CodecError::UnrecognizedShape(preview(data))),
        }
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// The owning address, for address- and object-owned objects.
    pub fn owner_address(&self) -> Option<&Address> {
        match self {
            Self::Rule(OwnerRecord::AddressOwner(addr) | OwnerRecord::ObjectOwner(addr)) => {
                Some(addr)
            }
            _ => None,
        }
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Rule(OwnerRecord::Shared { .. }))
    }

    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::Name(name) if name == Self::IMMUTABLE)
    }
}

impl From<OwnerRecord> for ObjectOwner {
    fn from(record: OwnerRecord) -> Self {
        Self::Rule(record)
    }
}

impl Serialize for ObjectOwner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Name(name) => serializer.serialize_str(name),
            Self::Rule(record) => record.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ObjectOwner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OwnerVisitor;

        impl<'de> de::Visitor<'de> for OwnerVisitor {
            type Value = ObjectOwner;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an owner string or an owner object")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ObjectOwner::Name(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ObjectOwner::Name(v))
            }

            fn visit_map<A: de::MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                OwnerRecord::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(ObjectOwner::Rule)
            }
        }

        deserializer.deserialize_any(OwnerVisitor)
    }
}

/// An owner with each arm held separately.
///
/// Builders fill in at most one arm; this is the only representation in which
/// "no arm set" can occur, and encoding it fails with
/// [`CodecError::EmptyUnion`]. If both arms are set the string arm wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawObjectOwner {
    pub string: Option<String>,
    pub record: Option<OwnerRecord>,
}

impl RawObjectOwner {
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CodecError> {
        if let Some(name) = &self.string {
            return Ok(serde_json::to_vec(name)?);
        }
        if let Some(record) = &self.record {
            return Ok(serde_json::to_vec(record)?);
        }
        Err(CodecError::EmptyUnion)
    }
}

impl TryFrom<RawObjectOwner> for ObjectOwner {
    type Error = CodecError;

    fn try_from(raw: RawObjectOwner) -> Result<Self, Self::Error> {
        match (raw.string, raw.record) {
            (Some(name), _) => Ok(Self::Name(name)),
            (None, Some(record)) => Ok(Self::Rule(record)),
            (None, None) => Err(CodecError::EmptyUnion),
        }
    }
}

impl From<ObjectOwner> for RawObjectOwner {
    fn from(owner: ObjectOwner) -> Self {
        match owner {
            ObjectOwner::Name(name) => Self {
                string: Some(name),
                record: None,
            },
            ObjectOwner::Rule(record) => Self {
                string: None,
                record: Some(record),
            },
        }
    }
}

fn preview(data: &[u8]) -> String {
    const MAX: usize = 32;
    let text = String::from_utf8_lossy(&data[..data.len().min(MAX)]).into_owned();
    if data.len() > MAX {
        format!("{text}...")
    } else {
        text
    }
}
