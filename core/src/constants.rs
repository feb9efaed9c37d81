// Calldata Constants
// ==================
//
// This module defines the constant values shared by the calldata encoder and
// the inscription payload documents. They fix the wire shape of the hex
// calldata and the defaults a host falls back to when nothing is configured.

/// Prefix carried by every hex calldata string
///
/// Ethereum JSON-RPC expects transaction `data` as a `0x`-prefixed string of
/// hex digits. An empty payload is therefore the bare prefix `"0x"`.
pub const HEX_PREFIX: &str = "0x";

/// Default byte ceiling for a single payload (128 KiB)
///
/// Calldata gas cost grows linearly with payload size, so the mint flows refuse
/// anything larger than this before doing any work. The value is advisory and
/// can be overridden by the caller; it is not enforced by any protocol.
pub const DEFAULT_BYTE_CEILING: u64 = 128 * 1024;

/// MIME type used when a file extension is missing or unknown
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// MIME type of JSON payload documents wrapped in a data URI
pub const JSON_MIME: &str = "application/json";

/// Scheme prefix of every data URI
pub const DATA_URI_SCHEME: &str = "data:";

/// Marker separating the MIME type from base64 content in a data URI
///
/// `data:image/png;base64,iVBOR...` carries binary content, while
/// `data:application/json,{...}` carries the text verbatim.
pub const BASE64_MARKER: &str = ";base64";

/// `type` tag of a text message inscription
pub const MESSAGE_PAYLOAD_TYPE: &str = "bitbrains-message";

/// `type` tag of an image inscription
pub const IMAGE_PAYLOAD_TYPE: &str = "bitbrains-image";

/// Current version of the payload documents
pub const PAYLOAD_VERSION: u32 = 1;
