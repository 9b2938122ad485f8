//! Byte codec for protobuf custom-type fields.
//!
//! Generated message code that embeds a custom scalar type expects four
//! operations on it: report its encoded size, marshal into a fresh buffer,
//! marshal into a caller-supplied buffer, and unmarshal in place.
//! [`ByteCodec`] is that contract. The asset source wire form is exactly one
//! byte, written and read verbatim.

use crate::error::{AssetSourceError, Result};
use crate::source::AssetSource;

/// Encoded length of an [`AssetSource`] on the wire.
pub const ENCODED_LEN: usize = 1;

/// Fixed-size binary encoding used by protobuf custom-type fields.
pub trait ByteCodec: Sized {
    /// Number of bytes [`marshal`](ByteCodec::marshal) produces.
    fn size(&self) -> usize;

    /// Encode into a newly allocated buffer.
    fn marshal(&self) -> Vec<u8>;

    /// Encode into `buf`, returning the number of bytes written.
    fn marshal_to(&self, buf: &mut [u8]) -> Result<usize>;

    /// Decode from `data`, overwriting `self`. On error `self` is untouched.
    fn unmarshal(&mut self, data: &[u8]) -> Result<()>;
}

impl AssetSource {
    /// The single wire byte.
    pub fn encode_byte(self) -> [u8; ENCODED_LEN] {
        [self.as_u8()]
    }

    /// Read the first byte of `data` verbatim.
    ///
    /// Unknown bytes decode successfully; use [`AssetSource::is_valid`] to
    /// reject them. Only an empty buffer is an error.
    pub fn decode_byte(data: &[u8]) -> Result<Self> {
        match data.first() {
            Some(byte) => Ok(Self::from_byte(*byte)),
            None => {
                tracing::debug!("cannot decode asset source from empty buffer");
                Err(AssetSourceError::OutOfRange {
                    needed: ENCODED_LEN,
                    available: 0,
                })
            }
        }
    }
}

impl ByteCodec for AssetSource {
    fn size(&self) -> usize {
        ENCODED_LEN
    }

    fn marshal(&self) -> Vec<u8> {
        self.encode_byte().to_vec()
    }

    fn marshal_to(&self, buf: &mut [u8]) -> Result<usize> {
        let Some(slot) = buf.first_mut() else {
            return Err(AssetSourceError::OutOfRange {
                needed: ENCODED_LEN,
                available: 0,
            });
        };
        *slot = self.as_u8();
        Ok(ENCODED_LEN)
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<()> {
        *self = Self::decode_byte(data)?;
        Ok(())
    }
}

/// Free-function form of [`AssetSource::encode_byte`].
pub fn encode_byte(source: AssetSource) -> [u8; ENCODED_LEN] {
    source.encode_byte()
}

/// Free-function form of [`AssetSource::decode_byte`].
pub fn decode_byte(data: &[u8]) -> Result<AssetSource> {
    AssetSource::decode_byte(data)
}
