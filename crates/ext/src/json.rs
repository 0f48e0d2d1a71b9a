//! Thin JSON codec over `serde_json`.
//!
//! Collaborator surface for application code: `serialize(T) -> String` and
//! `deserialize(&str) -> T`. Failures surface as [`RatchetError::Json`].

use ratchet_core::RatchetResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serializes `value` into a JSON string.
pub fn to_json<T: Serialize>(value: &T) -> RatchetResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Deserializes a JSON string into a `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> RatchetResult<T> {
    Ok(serde_json::from_str(json)?)
}
