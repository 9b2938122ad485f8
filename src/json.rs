//! JSON adapter
//!
//! An asset source is a JSON string: `"native"` or `"external"`, lower-case
//! on encode and case-insensitive on decode. Malformed payloads and
//! non-string values are errors, same as unknown names.

use crate::error::{AssetSourceError, Result};
use crate::source::AssetSource;

/// Encode as a JSON string. Unknown bytes have no name and are refused.
pub fn marshal_json(source: &AssetSource) -> Result<Vec<u8>> {
    let name = source
        .name()
        .ok_or(AssetSourceError::Unrepresentable(source.as_u8()))?;
    Ok(serde_json::to_vec(name)?)
}

/// Decode a JSON string into an asset source.
pub fn unmarshal_json(data: &[u8]) -> Result<AssetSource> {
    let name: String = serde_json::from_slice(data).map_err(|err| {
        tracing::debug!(error = %err, "malformed asset source JSON");
        err
    })?;
    AssetSource::from_name(&name)
}

/// Decode into an existing value. `target` is only written on success.
pub fn unmarshal_json_into(target: &mut AssetSource, data: &[u8]) -> Result<()> {
    *target = unmarshal_json(data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marshal_json() {
        assert_eq!(marshal_json(&AssetSource::NATIVE).unwrap(), b"\"native\"");
        assert_eq!(
            marshal_json(&AssetSource::EXTERNAL).unwrap(),
            b"\"external\""
        );
    }

    #[test]
    fn test_marshal_json_unknown_byte() {
        let err = marshal_json(&AssetSource::from_byte(0x02)).unwrap_err();
        assert!(matches!(err, AssetSourceError::Unrepresentable(0x02)));
    }

    #[test]
    fn test_unmarshal_json() {
        assert_eq!(unmarshal_json(b"\"native\"").unwrap(), AssetSource::NATIVE);
        assert_eq!(
            unmarshal_json(b"\"EXTERNAL\"").unwrap(),
            AssetSource::EXTERNAL
        );
        assert_eq!(
            unmarshal_json(b"  \"External\"\n").unwrap(),
            AssetSource::EXTERNAL
        );
    }

    #[test]
    fn test_unmarshal_json_unknown_name() {
        let err = unmarshal_json(b"\"bogus\"").unwrap_err();
        assert_eq!(err.offending_value(), Some("bogus"));
    }

    #[test]
    fn test_unmarshal_json_malformed_is_reported() {
        let payloads: [&[u8]; 5] = [b"42", b"{}", b"null", b"\"native", b""];
        for payload in payloads {
            let err = unmarshal_json(payload).unwrap_err();
            assert!(
                matches!(err, AssetSourceError::Json(_)),
                "expected JSON error for {:?}, got {:?}",
                String::from_utf8_lossy(payload),
                err
            );
        }
    }

    #[test]
    fn test_unmarshal_json_into_leaves_target_on_error() {
        let mut source = AssetSource::EXTERNAL;
        assert!(unmarshal_json_into(&mut source, b"not json").is_err());
        assert_eq!(source, AssetSource::EXTERNAL);
        assert!(unmarshal_json_into(&mut source, b"\"bogus\"").is_err());
        assert_eq!(source, AssetSource::EXTERNAL);

        unmarshal_json_into(&mut source, b"\"native\"").unwrap();
        assert_eq!(source, AssetSource::NATIVE);
    }
}
