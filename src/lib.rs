//! Asset Types - Level 1 Foundation Value Types
//!
//! The asset source tag shared by the ledger's transaction, persistence and
//! API layers. This crate depends on nothing else in the workspace.
//!
//! ## Contents
//!
//! - [`AssetSource`] - single-byte native/external tag with string parsing
//! - [`ByteCodec`] - one-byte wire codec for protobuf custom-type fields
//! - serde support - name for JSON, raw byte for bincode
//! - [`json`] - JSON helpers reporting through [`AssetSourceError`]
//!
//! ## Wire Forms
//!
//! ```text
//! NATIVE    0x00   "native"
//! EXTERNAL  0x01   "external"
//! ```
//!
//! Binary decoding is verbatim: unknown bytes survive a round trip and are
//! caught by [`AssetSource::is_valid`]. String and JSON decoding reject
//! anything but the two names (case-insensitive).

mod codec;
mod error;
mod serde_impl;
mod source;

#[cfg(feature = "json")]
pub mod json;

pub use codec::{decode_byte, encode_byte, ByteCodec, ENCODED_LEN};
pub use error::{AssetSourceError, Result};
pub use source::{
    is_valid_asset_source, AssetSource, AssetSourceKind, SOURCE_NAMES, UNKNOWN_NAME,
};
