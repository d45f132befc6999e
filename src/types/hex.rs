//! Lowercase hexadecimal codec for byte payloads.
//!
//! Byte-valued fields (`Message.payload`, `Acknowledgment.result`) travel as hex text
//! in JSON bodies: each byte becomes two lowercase hex digits. Decoding rejects
//! odd-length input and non-hex characters.

use crate::{Error, Result};

pub fn encode(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Decode hex text, reporting failures as a validation error on `field`.
pub fn decode(field: &str, text: &str) -> Result<Vec<u8>> {
    ::hex::decode(text).map_err(|e| Error::validation(field, format!("invalid hex: {}", e)))
}

/// Serde adapter for `Vec<u8>` fields carried as hex text.
///
/// Absent, `null` and `""` all decode to an empty byte vector.
pub(crate) mod serde_hex {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&::hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text: Option<String> = Option::deserialize(deserializer)?;
        match text.as_deref() {
            None | Some("") => Ok(Vec::new()),
            Some(s) => ::hex::decode(s).map_err(|e| de::Error::custom(format!("invalid hex: {}", e))),
        }
    }
}
