//! Decoding of a single node's output fragment.

use gadgetview_common::error::DecodeError;
use serde::de::DeserializeOwned;

/// Decodes one node's fragment into records.
///
/// A blank fragment or a JSON `null` means the node produced nothing and
/// yields an empty vector.
///
/// # Errors
///
/// Returns a [`DecodeError`] naming `node` if the fragment is not a JSON
/// array of `T`.
pub fn decode_fragment<T: DeserializeOwned>(
    node: &str,
    blob: &str,
) -> Result<Vec<T>, DecodeError> {
    if blob.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Option<Vec<T>> = serde_json::from_str(blob).map_err(|source| DecodeError {
        node: node.to_owned(),
        source,
    })?;
    Ok(records.unwrap_or_default())
}
