// Inscription payload documents

use serde::{Deserialize, Serialize};

use crate::calldata::{encode_utf8_to_hex, HexCalldata};
use crate::constants::{IMAGE_PAYLOAD_TYPE, JSON_MIME, MESSAGE_PAYLOAD_TYPE, PAYLOAD_VERSION};
use crate::data_uri::DataUri;
use crate::error::Result;

/// A logical inscription document, built fresh for each mint action.
///
/// The encoder never looks inside it; it only sees the canonical text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Payload {
    #[serde(rename = "bitbrains-message")]
    Message {
        version: u32,
        message: String,
        anchors: Vec<String>,
        /// Unix milliseconds
        timestamp: i64,
    },
    #[serde(rename = "bitbrains-image")]
    Image {
        version: u32,
        /// The image as a `data:` URI
        image: String,
        site: String,
        /// Unix milliseconds
        timestamp: i64,
    },
}

impl Payload {
    pub fn message(message: impl Into<String>, anchors: Vec<String>, timestamp: i64) -> Self {
        Payload::Message {
            version: PAYLOAD_VERSION,
            message: message.into(),
            anchors,
            timestamp,
        }
    }

    pub fn image(image: &DataUri, site: impl Into<String>, timestamp: i64) -> Self {
        Payload::Image {
            version: PAYLOAD_VERSION,
            image: image.to_string(),
            site: site.into(),
            timestamp,
        }
    }

    /// The `type` tag this document serializes with.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Payload::Message { .. } => MESSAGE_PAYLOAD_TYPE,
            Payload::Image { .. } => IMAGE_PAYLOAD_TYPE,
        }
    }

    /// Compact JSON text of the document.
    pub fn to_canonical_text(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The document wrapped as `data:application/json,<json>`.
    pub fn to_data_uri(&self) -> Result<DataUri> {
        Ok(DataUri::from_text(JSON_MIME, self.to_canonical_text()?))
    }

    /// Calldata carrying the data URI form of the document.
    pub fn to_calldata(&self) -> Result<HexCalldata> {
        Ok(encode_utf8_to_hex(&self.to_data_uri()?.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calldata::decode_hex_to_utf8;
    use serde_json::{json, Value};

    #[test]
    fn test_message_payload_shape() {
        let payload = Payload::message("gm brains", vec!["0xabc".to_string()], 1_700_000_000_000);
        let value: Value = serde_json::from_str(&payload.to_canonical_text().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "bitbrains-message",
                "version": 1,
                "message": "gm brains",
                "anchors": ["0xabc"],
                "timestamp": 1_700_000_000_000i64,
            })
        );
    }

    #[test]
    fn test_image_payload_embeds_data_uri() {
        let image = DataUri::from_bytes("image/png", vec![1, 2, 3]);
        let payload = Payload::image(&image, "bitbrains.xyz", 42);
        let value: Value = serde_json::from_str(&payload.to_canonical_text().unwrap()).unwrap();
        assert_eq!(value["type"], "bitbrains-image");
        assert_eq!(value["image"], "data:image/png;base64,AQID");
        assert_eq!(value["site"], "bitbrains.xyz");
    }

    #[test]
    fn test_type_tag_matches_serialized_type() {
        let image = DataUri::from_bytes("image/gif", vec![0]);
        for payload in [
            Payload::message("gm", vec![], 1),
            Payload::image(&image, "bitbrains.xyz", 1),
        ] {
            let value: Value = serde_json::from_str(&payload.to_canonical_text().unwrap()).unwrap();
            assert_eq!(value["type"], payload.type_tag());
        }
        assert_eq!(Payload::message("", vec![], 0).type_tag(), MESSAGE_PAYLOAD_TYPE);
    }

    #[test]
    fn test_calldata_decodes_to_json_data_uri() {
        let payload = Payload::message("hi", vec![], 0);
        let calldata = payload.to_calldata().unwrap();
        let text = decode_hex_to_utf8(calldata.as_str()).unwrap();
        assert!(text.starts_with("data:application/json,{"));

        let uri = DataUri::parse(&text).unwrap();
        let back: Payload = serde_json::from_slice(uri.decoded_bytes()).unwrap();
        assert_eq!(back, payload);
    }
}
