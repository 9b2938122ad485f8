//! Serde support for [`AssetSource`].
//!
//! Human-readable formats (JSON, YAML) carry the canonical name; binary
//! formats (bincode) carry the raw byte, so an `AssetSource` field costs
//! exactly one byte on a binary wire.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AssetSourceError;
use crate::source::AssetSource;

impl Serialize for AssetSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            match self.name() {
                Some(name) => serializer.serialize_str(name),
                None => Err(serde::ser::Error::custom(
                    AssetSourceError::Unrepresentable(self.as_u8()),
                )),
            }
        } else {
            serializer.serialize_u8(self.as_u8())
        }
    }
}

impl<'de> Deserialize<'de> for AssetSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(NameVisitor)
        } else {
            u8::deserialize(deserializer).map(AssetSource::from_byte)
        }
    }
}

struct NameVisitor;

impl Visitor<'_> for NameVisitor {
    type Value = AssetSource;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an asset source name (\"native\" or \"external\")")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        AssetSource::from_name(v).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holding {
        symbol: String,
        source: AssetSource,
    }

    #[test]
    fn test_json_field_uses_name() {
        let holding = Holding {
            symbol: "GOLD".into(),
            source: AssetSource::EXTERNAL,
        };
        let json = serde_json::to_string(&holding).unwrap();
        assert_eq!(json, r#"{"symbol":"GOLD","source":"external"}"#);

        let parsed: Holding =
            serde_json::from_str(r#"{"symbol":"GOLD","source":"External"}"#).unwrap();
        assert_eq!(parsed, holding);
    }

    #[test]
    fn test_json_rejects_unknown_name_and_non_string() {
        let err = serde_json::from_str::<AssetSource>(r#""bogus""#).unwrap_err();
        assert!(err.to_string().contains("bogus"));

        assert!(serde_json::from_str::<AssetSource>("1").is_err());
        assert!(serde_json::from_str::<AssetSource>("null").is_err());
    }

    #[test]
    fn test_json_refuses_unknown_byte() {
        assert!(serde_json::to_string(&AssetSource::INVALID).is_err());
    }

    #[test]
    fn test_bincode_is_single_byte() {
        let bytes = bincode::serialize(&AssetSource::EXTERNAL).unwrap();
        assert_eq!(bytes, vec![0x01]);

        let decoded: AssetSource = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, AssetSource::EXTERNAL);
    }

    #[test]
    fn test_bincode_keeps_unknown_bytes() {
        let bytes = bincode::serialize(&AssetSource::INVALID).unwrap();
        assert_eq!(bytes, vec![0xff]);

        let decoded: AssetSource = bincode::deserialize(&[0x05]).unwrap();
        assert_eq!(decoded.as_u8(), 0x05);
    }
}
