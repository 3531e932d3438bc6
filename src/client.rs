pub mod traits;
pub mod http;
pub mod error;

use serde_json::Value as JsonValue;
use crate::types::ResponseEnvelope;

/// Envelope as it comes off the wire, before the payload is typed.
pub type RawEnvelope = ResponseEnvelope<JsonValue>;

/// Result type for API client operations.
pub type ClientResult<T> = std::result::Result<T, error::ClientError>;
