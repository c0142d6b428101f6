//! Settings JSON encoding.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Errors raised while encoding or decoding settings JSON.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// The value could not be written as JSON.
    #[error("cannot encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input is not valid JSON for the target type.
    #[error("cannot decode JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// The encoder produced bytes that are not UTF-8.
    #[error("encoded JSON is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encodes `value` with two-space indentation and a trailing newline, so
/// the same settings always print the same text.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut out = Vec::with_capacity(256);
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"  "));
    value
        .serialize(&mut serializer)
        .map_err(SerializationError::Encode)?;
    out.push(b'\n');
    Ok(String::from_utf8(out)?)
}

/// Decodes JSON bytes, pretty-printed or minified.
///
/// # Errors
///
/// Returns [`SerializationError::Decode`] if the bytes are not valid JSON
/// for `T`.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Decode)
}
