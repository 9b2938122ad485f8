//! Typed error model for asset source conversions.
//!
//! Every failure surfaced by this crate maps to exactly one
//! `AssetSourceError` variant. Nothing is recovered internally: parse and
//! decode failures always reach the immediate caller.

/// Errors raised while parsing, decoding or encoding an [`AssetSource`].
///
/// [`AssetSource`]: crate::AssetSource
#[derive(Debug, thiserror::Error)]
pub enum AssetSourceError {
    /// The string (direct parse or inside JSON) matches no known name.
    #[error("'{value}' is not a valid asset source")]
    InvalidValue { value: String },

    /// A byte buffer was too short for the requested decode or encode.
    #[error("buffer too short: needed {needed} byte(s), {available} available")]
    OutOfRange { needed: usize, available: usize },

    /// Strict byte conversion rejected a byte outside the known table.
    #[error("unknown asset source byte 0x{0:02x}")]
    UnknownByte(u8),

    /// Attempted to encode a byte that has no canonical name.
    #[error("asset source byte 0x{0:02x} has no canonical name")]
    Unrepresentable(u8),

    /// The JSON payload was malformed or not a string.
    #[cfg(feature = "json")]
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssetSourceError {
    pub(crate) fn invalid_value(value: impl Into<String>) -> Self {
        Self::InvalidValue {
            value: value.into(),
        }
    }

    /// The offending literal, for `InvalidValue` errors.
    pub fn offending_value(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { value } => Some(value),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AssetSourceError>;
