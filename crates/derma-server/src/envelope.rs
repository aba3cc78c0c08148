//! JSON envelope shared by every endpoint: `{status, message?, data?}`.

use serde::Serialize;

/// Wire envelope. `message` and `data` are omitted when absent.
#[derive(Debug, Serialize)]
pub struct ApiEnvelope<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiEnvelope<T> {
    /// Success with a data payload only.
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }

    /// Success with both a message and a data payload.
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiEnvelope<()> {
    /// Failure with a message and no data.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail",
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_message() {
        let json = serde_json::to_value(ApiEnvelope::success(vec![1, 2])).unwrap();
        assert_eq!(json, serde_json::json!({"status": "success", "data": [1, 2]}));
    }

    #[test]
    fn fail_omits_data() {
        let json = serde_json::to_value(ApiEnvelope::fail("nope")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "fail", "message": "nope"}));
    }

    #[test]
    fn success_with_message_carries_both() {
        let json =
            serde_json::to_value(ApiEnvelope::success_with_message("done", "payload")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "success", "message": "done", "data": "payload"})
        );
    }
}
