//! JSON interchange.
//!
//! Encoding is shape-sensitive: a dense container serializes as a JSON
//! array, while sparse or name-keyed containers fall back to a JSON object
//! keyed by the stringified keys, so the full key→value mapping survives
//! the round trip. Decoding is defined as "parse, then construct": the
//! parsed value is handed to [`Collection::new`] as a single argument.

use crate::collection::Collection;
use crate::error::ArrayError;
use crate::value::Value;

impl Collection {
    /// Encode the current key→value mapping as JSON text.
    ///
    /// Non-finite floats serialize as `null` (the serde_json convention).
    pub fn to_json(&self) -> Result<String, ArrayError> {
        let encoded = if self.is_dense() {
            Value::Array(self.iter().map(|(_, value)| value.clone()).collect())
        } else {
            Value::Map(
                self.iter()
                    .map(|(key, value)| (key.to_string(), value.clone()))
                    .collect(),
            )
        };
        Ok(serde_json::to_string(&encoded)?)
    }

    /// Decode JSON text into a container.
    ///
    /// The decoded value goes through the same arity dispatch as direct
    /// construction, so objects with canonical numeric keys come back as
    /// sparse index entries — and a bare integer is a pre-size request,
    /// exactly as it would be at the constructor.
    pub fn from_json(text: &str) -> Result<Collection, ArrayError> {
        let decoded: Value = serde_json::from_str(text)?;
        Ok(Collection::new(vec![decoded]))
    }
}
