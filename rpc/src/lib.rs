//! Boundary layer between a JSON-RPC transport and the suiwire types.
//!
//! Provides:
//! - Typed decode/encode of raw JSON payloads ([`codec`])
//! - Client configuration loaded from TOML ([`config`])
//!
//! The transport itself (HTTP, retries, method dispatch) lives elsewhere;
//! this crate only ever sees bytes.

pub mod codec;
pub mod config;
pub mod error;

pub use codec::{
    decode, decode_address, decode_object_owner, decode_sender_signed_data,
    decode_transaction_kind, encode,
};
pub use config::ClientConfig;
pub use error::RpcError;
