//! Base64 (de)serialization for optional image blobs.
//!
//! Use with `#[serde(default, with = "crate::types::image")]`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match bytes {
        Some(b) => serializer.serialize_some(&STANDARD.encode(b)),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded: Option<String> = Option::deserialize(deserializer)?;
    encoded
        .filter(|s| !s.is_empty())
        .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
        .transpose()
}
