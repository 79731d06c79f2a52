use serde::{Deserialize, Serialize};

/// Error envelope used by the REST API: `{ "error": { "message": "..." } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}

impl ApiErrorEnvelope {
    /// Extract the error message if `body` is an error envelope.
    ///
    /// Returns `None` for any other payload, including regular data.
    pub fn message_from_body(body: &str) -> Option<String> {
        let envelope: ApiErrorEnvelope = serde_json::from_str(body).ok()?;
        let message = envelope.error.message.trim();
        if message.is_empty() {
            Some(UNKNOWN_ERROR.to_string())
        } else {
            Some(message.to_string())
        }
    }
}

pub const UNKNOWN_ERROR: &str = "Unknown error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_envelope() {
        let body = r#"{"error":{"message":"No such customer: cus_404"}}"#;
        assert_eq!(
            ApiErrorEnvelope::message_from_body(body).as_deref(),
            Some("No such customer: cus_404")
        );
    }

    #[test]
    fn test_data_payloads_are_not_errors() {
        assert_eq!(ApiErrorEnvelope::message_from_body("[]"), None);
        assert_eq!(
            ApiErrorEnvelope::message_from_body(r#"[{"id":"in_1","period_end":0,"subtotal":0}]"#),
            None
        );
        assert_eq!(ApiErrorEnvelope::message_from_body(r#"{"id":"in_1"}"#), None);
        assert_eq!(ApiErrorEnvelope::message_from_body("not json"), None);
    }

    #[test]
    fn test_empty_message_gets_placeholder() {
        assert_eq!(
            ApiErrorEnvelope::message_from_body(r#"{"error":{}}"#).as_deref(),
            Some(UNKNOWN_ERROR)
        );
    }
}
