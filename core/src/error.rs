//! Error types for the calldata encoder

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around calldata construction.
///
/// Encoding itself never fails; these cover the gates and parsers around it.
#[derive(Debug, Error)]
pub enum CalldataError {
    #[error("Payload is {actual} bytes, which exceeds the allowed {allowed} bytes")]
    Oversize { actual: u64, allowed: u64 },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid hex calldata: {0}")]
    InvalidHex(String),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Payload serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalldataError>;
