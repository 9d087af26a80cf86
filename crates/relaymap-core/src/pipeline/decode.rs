use crate::{RawRelay, Result};

/// Parse an inventory document into relay records, preserving document order.
///
/// The document must be a JSON array of flat relay objects. Fields not
/// described by [`RawRelay`] are ignored.
pub fn decode(bytes: &[u8]) -> Result<Vec<RawRelay>> {
    Ok(serde_json::from_slice(bytes)?)
}
