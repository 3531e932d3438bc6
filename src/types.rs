use serde::{Serialize, Deserialize, Deserializer};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// An order record as returned by the trading API.
///
/// The record is passed through untouched, so it is kept as raw JSON rather
/// than a typed struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(pub JsonValue);

impl Order {
    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

impl From<JsonValue> for Order {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}

/// Error payload carried by a failed envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Accepts any JSON for `error`. Only an object contributes, and only a
/// string `message` inside it; anything else leaves the body without one.
fn lenient_error<'de, D>(deserializer: D) -> Result<Option<ApiErrorBody>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(match raw {
        Some(JsonValue::Object(obj)) => Some(ApiErrorBody {
            message: obj.get("message").and_then(JsonValue::as_str).map(str::to_string),
        }),
        _ => None,
    })
}

/// `{ success, data?, error? }` wrapper around every API response.
///
/// A missing `success` reads as `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(
        default,
        deserialize_with = "lenient_error",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<ApiErrorBody>,
}

impl<T> ResponseEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorBody { message: Some(message.into()) }),
        }
    }

    /// A failed envelope with no error body.
    pub fn bare_failure() -> Self {
        Self { success: false, data: None, error: None }
    }

    /// The server-supplied error message, if any and non-empty.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|e| e.message.as_deref())
            .filter(|m| !m.is_empty())
    }
}

impl ResponseEnvelope<JsonValue> {
    /// Convert the raw payload into a typed one. The envelope flags are kept as is.
    pub fn decode<T: DeserializeOwned>(self) -> Result<ResponseEnvelope<T>, serde_json::Error> {
        let data = self.data.map(serde_json::from_value).transpose()?;
        Ok(ResponseEnvelope { success: self.success, data, error: self.error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_without_optional_fields() {
        let env: ResponseEnvelope<JsonValue> =
            serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(env, ResponseEnvelope::bare_failure());
        assert_eq!(env.error_message(), None);
    }

    #[test]
    fn malformed_error_bodies_carry_no_message() {
        let bodies = [
            json!({ "success": false, "error": {} }),
            json!({ "success": false, "error": { "message": null } }),
            json!({ "success": false, "error": { "message": 42 } }),
            json!({ "success": false, "error": { "code": "E1" } }),
            json!({ "success": false, "error": "boom" }),
            json!({ "success": false, "error": null }),
            json!({ "error": { "message": null } }),
        ];
        for body in bodies {
            let env: ResponseEnvelope<JsonValue> = serde_json::from_value(body.clone())
                .unwrap_or_else(|e| panic!("{body} should parse: {e}"));
            assert!(!env.success, "{body}");
            assert_eq!(env.error_message(), None, "{body}");
        }
    }

    #[test]
    fn null_data_reads_as_absent() {
        let env: ResponseEnvelope<JsonValue> =
            serde_json::from_value(json!({ "success": true, "data": null })).unwrap();
        assert!(env.success);
        assert_eq!(env.data, None);
    }

    #[test]
    fn empty_error_message_is_ignored() {
        let env: ResponseEnvelope<JsonValue> = ResponseEnvelope::failure("");
        assert_eq!(env.error_message(), None);
        let env: ResponseEnvelope<JsonValue> = ResponseEnvelope::failure("boom");
        assert_eq!(env.error_message(), Some("boom"));
    }

    #[test]
    fn decode_keeps_order_payload_intact() {
        let raw = json!({ "id": "A1", "status": "filled", "fills": [{ "qty": 3 }] });
        let env = ResponseEnvelope::ok(raw.clone()).decode::<Order>().unwrap();
        assert!(env.success);
        assert_eq!(env.data, Some(Order(raw)));
    }

    #[test]
    fn decode_reports_type_mismatch() {
        #[derive(Debug, Deserialize)]
        struct Strict {
            #[allow(dead_code)]
            id: u32,
        }
        let env = ResponseEnvelope::ok(json!({ "id": "not-a-number" }));
        assert!(env.decode::<Strict>().is_err());
    }
}
