// Hex calldata encoding

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::HEX_PREFIX;
use crate::error::{CalldataError, Result};

/// Transaction-ready calldata: `0x` followed by two lowercase hex digits per byte.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct HexCalldata(String);

impl HexCalldata {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of payload bytes represented, excluding the prefix.
    pub fn byte_len(&self) -> usize {
        (self.0.len() - HEX_PREFIX.len()) / 2
    }

    pub fn is_empty(&self) -> bool {
        self.0.len() == HEX_PREFIX.len()
    }

    /// Decodes back into the raw payload bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        hex::decode(&self.0[HEX_PREFIX.len()..]).expect("HexCalldata holds validated hex")
    }
}

impl fmt::Display for HexCalldata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexCalldata {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<HexCalldata> for String {
    fn from(calldata: HexCalldata) -> Self {
        calldata.0
    }
}

impl TryFrom<String> for HexCalldata {
    type Error = CalldataError;

    fn try_from(value: String) -> Result<Self> {
        let bytes = decode_hex_calldata(&value)?;
        Ok(encode_bytes_to_hex(&bytes))
    }
}

/// Encodes raw bytes as `0x`-prefixed lowercase hex.
///
/// Both the text payloads and the uploaded files go through this single
/// function, so every flow produces the same calldata shape.
pub fn encode_bytes_to_hex(bytes: &[u8]) -> HexCalldata {
    let mut out = String::with_capacity(HEX_PREFIX.len() + bytes.len() * 2);
    out.push_str(HEX_PREFIX);
    out.push_str(&hex::encode(bytes));
    HexCalldata(out)
}

/// Encodes a string's UTF-8 bytes as calldata.
///
/// Total over all strings: the output length is always `2 + 2 * text.len()`.
pub fn encode_utf8_to_hex(text: &str) -> HexCalldata {
    encode_bytes_to_hex(text.as_bytes())
}

/// Parses `0x`-prefixed hex calldata back into bytes.
pub fn decode_hex_calldata(calldata: &str) -> Result<Vec<u8>> {
    let digits = calldata
        .strip_prefix(HEX_PREFIX)
        .ok_or_else(|| CalldataError::InvalidHex(format!("missing {HEX_PREFIX} prefix")))?;
    hex::decode(digits).map_err(|e| CalldataError::InvalidHex(e.to_string()))
}

/// Parses calldata and reassembles it as UTF-8 text.
pub fn decode_hex_to_utf8(calldata: &str) -> Result<String> {
    let bytes = decode_hex_calldata(calldata)?;
    String::from_utf8(bytes).map_err(|e| CalldataError::InvalidHex(e.to_string()))
}
