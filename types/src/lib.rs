//! Wire types for the Sui JSON-RPC protocol.
//!
//! This crate defines the values every other crate in the workspace passes
//! around: fixed-length hex identifiers, base64 digests, object references,
//! object ownership and network constants. Everything here is a plain value;
//! decoding never touches the network and never logs.

pub mod address;
pub mod digest;
pub mod error;
pub mod move_module;
pub mod network;
pub mod object;
pub mod time;

pub use address::{is_same_str_address, Address, FixedBytes, ObjectId, ADDRESS_LENGTH};
pub use digest::{Base64Data, Digest, TransactionDigest};
pub use error::CodecError;
pub use move_module::MoveModule;
pub use network::{Network, DEVNET_RPC_URL, SUI_COIN_TYPE, TESTNET_RPC_URL};
pub use object::{
    deserialize_u64, ObjectOwner, ObjectRef, OwnerRecord, RawObjectOwner, SequenceNumber,
};
pub use time::TimeRange;
