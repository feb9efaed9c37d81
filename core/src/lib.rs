//! Calldata payload encoder for Bit Brains inscriptions.
//!
//! Turns text payloads and uploaded files into `0x`-prefixed hex calldata,
//! with a size gate in front of the expensive work. Everything here is pure;
//! file reading and wallet submission live in the host crate.

pub mod calldata;
pub mod constants;
pub mod data_uri;
pub mod error;
pub mod limits;
pub mod payload;

pub use calldata::{
    decode_hex_calldata, decode_hex_to_utf8, encode_bytes_to_hex, encode_utf8_to_hex, HexCalldata,
};
pub use data_uri::{mime_for_path, DataUri, DataUriBody};
pub use error::CalldataError;
pub use limits::{check_size_limit, ByteCeiling, SizeCheck};
pub use payload::Payload;
