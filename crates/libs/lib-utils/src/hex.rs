//! # Hex Encoding/Decoding
//!
//! `0x`-prefixed hex helpers used for bytecode artifacts and genesis quantities.

/// Encode bytes as a lowercase `0x`-prefixed hex string.
pub fn hex_encode_prefixed(content: impl AsRef<[u8]>) -> String {
    format!("0x{}", ::hex::encode(content))
}

/// Decode a hex string, with or without a `0x` prefix.
///
/// Surrounding whitespace (e.g. a trailing newline in an artifact file) is ignored.
pub fn hex_decode(value: &str) -> Result<Vec<u8>, Error> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    ::hex::decode(digits).map_err(|_| Error::FailToHexDecode)
}

/// Serde adapter for `u64` quantities written as `0x`-prefixed hex (geth style).
///
/// Deserialization also accepts plain decimal strings and JSON numbers.
pub mod quantity {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value:#x}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(digits) => u64::from_str_radix(digits, 16).map_err(de::Error::custom),
                None => s.parse().map_err(de::Error::custom),
            },
        }
    }
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToHexDecode,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
