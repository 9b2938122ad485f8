//! Asset source tag
//!
//! Distinguishes assets originating on the local ledger ("native") from
//! assets bridged in from elsewhere ("external").
//!
//! The tag is stored as a raw byte so that any value read off the wire is
//! representable, including bytes this crate does not know about. Validity
//! is checked explicitly with [`AssetSource::is_valid`]; callers wanting an
//! exhaustive `match` go through [`AssetSource::kind`].

use std::fmt;
use std::str::FromStr;

use crate::error::{AssetSourceError, Result};

// ============================================================================
// ASSET SOURCE
// ============================================================================

/// Single-byte asset source discriminant.
///
/// | Value      | Byte   | Name         |
/// |------------|--------|--------------|
/// | `NATIVE`   | `0x00` | `"native"`   |
/// | `EXTERNAL` | `0x01` | `"external"` |
///
/// The zero value (`Default`) is `NATIVE`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AssetSource(u8);

/// Value to name table. The reverse lookup in [`AssetSource::from_name`]
/// scans this same table.
pub const SOURCE_NAMES: [(AssetSource, &str); 2] = [
    (AssetSource::NATIVE, "native"),
    (AssetSource::EXTERNAL, "external"),
];

/// Display name for bytes outside [`SOURCE_NAMES`].
pub const UNKNOWN_NAME: &str = "unknown";

impl AssetSource {
    /// Asset issued on the local ledger
    pub const NATIVE: Self = Self(0x00);
    /// Asset originating on another system
    pub const EXTERNAL: Self = Self(0x01);
    /// Sentinel returned alongside a failed parse in
    /// [`AssetSource::from_name_or_invalid`]
    pub const INVALID: Self = Self(0xff);

    /// Wrap a byte verbatim. No validation is performed.
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// The raw discriminant byte
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Parse a name, ignoring ASCII and Unicode case.
    pub fn from_name(name: &str) -> Result<Self> {
        let lowered = name.to_lowercase();
        SOURCE_NAMES
            .iter()
            .find(|(_, known)| *known == lowered)
            .map(|(source, _)| *source)
            .ok_or_else(|| {
                tracing::debug!(value = name, "rejected unknown asset source name");
                AssetSourceError::invalid_value(name)
            })
    }

    /// Parse a name, returning [`AssetSource::INVALID`] next to the error on
    /// failure. Check the error, not the value.
    pub fn from_name_or_invalid(name: &str) -> (Self, Result<()>) {
        match Self::from_name(name) {
            Ok(source) => (source, Ok(())),
            Err(err) => (Self::INVALID, Err(err)),
        }
    }

    /// True iff the byte is one of the known discriminants.
    pub fn is_valid(self) -> bool {
        self.name().is_some()
    }

    /// Canonical name, or `None` for unknown bytes.
    pub fn name(self) -> Option<&'static str> {
        SOURCE_NAMES
            .iter()
            .find(|(source, _)| *source == self)
            .map(|(_, name)| *name)
    }

    /// Canonical name, or [`UNKNOWN_NAME`] for unknown bytes.
    pub fn as_str(self) -> &'static str {
        self.name().unwrap_or(UNKNOWN_NAME)
    }

    /// Closed view of the tag, `None` for unknown bytes.
    pub fn kind(self) -> Option<AssetSourceKind> {
        match self {
            Self::NATIVE => Some(AssetSourceKind::Native),
            Self::EXTERNAL => Some(AssetSourceKind::External),
            _ => None,
        }
    }

    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }

    pub fn is_external(self) -> bool {
        self == Self::EXTERNAL
    }

    /// All valid sources, in byte order
    pub fn all() -> [Self; 2] {
        [Self::NATIVE, Self::EXTERNAL]
    }
}

/// Free-function form of [`AssetSource::is_valid`].
pub fn is_valid_asset_source(source: AssetSource) -> bool {
    source.is_valid()
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}(0x{:02x})", name, self.0),
            None => write!(f, "AssetSource(0x{:02x})", self.0),
        }
    }
}

impl FromStr for AssetSource {
    type Err = AssetSourceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<u8> for AssetSource {
    type Error = AssetSourceError;

    fn try_from(byte: u8) -> std::result::Result<Self, Self::Error> {
        let source = Self(byte);
        if source.is_valid() {
            Ok(source)
        } else {
            Err(AssetSourceError::UnknownByte(byte))
        }
    }
}

impl From<AssetSource> for u8 {
    fn from(source: AssetSource) -> Self {
        source.0
    }
}

// ============================================================================
// CLOSED VIEW
// ============================================================================

/// Exhaustive enumeration of the known asset sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSourceKind {
    Native,
    External,
}

impl From<AssetSourceKind> for AssetSource {
    fn from(kind: AssetSourceKind) -> Self {
        match kind {
            AssetSourceKind::Native => AssetSource::NATIVE,
            AssetSourceKind::External => AssetSource::EXTERNAL,
        }
    }
}
