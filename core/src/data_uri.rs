// Data URI construction and parsing

use std::fmt;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};

use crate::constants::{BASE64_MARKER, DATA_URI_SCHEME, DEFAULT_MIME, JSON_MIME};
use crate::error::{CalldataError, Result};

/// Content of a data URI after the comma.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataUriBody {
    /// Binary content, rendered as standard base64
    Base64(Vec<u8>),
    /// Text content, rendered verbatim
    Text(String),
}

/// A `data:` URI embedding content and its MIME type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUri {
    pub mime: String,
    pub body: DataUriBody,
}

impl DataUri {
    /// Wraps binary content, e.g. an uploaded image.
    pub fn from_bytes(mime: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        DataUri {
            mime: mime.into(),
            body: DataUriBody::Base64(bytes.into()),
        }
    }

    pub fn from_text(mime: impl Into<String>, text: impl Into<String>) -> Self {
        DataUri {
            mime: mime.into(),
            body: DataUriBody::Text(text.into()),
        }
    }

    /// Wraps a JSON document as `data:application/json,<json>`.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Ok(Self::from_text(JSON_MIME, serde_json::to_string(value)?))
    }

    /// Parses `data:<mime>[;params][;base64],<body>`.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix(DATA_URI_SCHEME)
            .ok_or_else(|| CalldataError::InvalidDataUri(format!("missing {DATA_URI_SCHEME} scheme")))?;
        let (header, content) = rest
            .split_once(',')
            .ok_or_else(|| CalldataError::InvalidDataUri("missing ',' separator".to_string()))?;

        match header.strip_suffix(BASE64_MARKER) {
            Some(mime) => {
                let bytes = BASE64_STANDARD
                    .decode(content.as_bytes())
                    .map_err(|e| CalldataError::InvalidDataUri(e.to_string()))?;
                Ok(Self::from_bytes(mime_or_default(mime), bytes))
            }
            None => Ok(Self::from_text(mime_or_default(header), content)),
        }
    }

    /// The embedded content as raw bytes.
    pub fn decoded_bytes(&self) -> &[u8] {
        match &self.body {
            DataUriBody::Base64(bytes) => bytes,
            DataUriBody::Text(text) => text.as_bytes(),
        }
    }

    pub fn decoded_len(&self) -> usize {
        self.decoded_bytes().len()
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            DataUriBody::Base64(bytes) => write!(
                f,
                "{DATA_URI_SCHEME}{}{BASE64_MARKER},{}",
                self.mime,
                BASE64_STANDARD.encode(bytes)
            ),
            DataUriBody::Text(text) => write!(f, "{DATA_URI_SCHEME}{},{}", self.mime, text),
        }
    }
}

// RFC 2397: an omitted media type means text/plain.
fn mime_or_default(mime: &str) -> &str {
    if mime.is_empty() {
        "text/plain"
    } else {
        mime
    }
}

/// Infers a MIME type from a file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("json") => JSON_MIME,
        Some("txt") => "text/plain",
        Some("html") | Some("htm") => "text/html",
        _ => DEFAULT_MIME,
    }
}
