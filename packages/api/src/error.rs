//! Errors produced by the API client.

use serde_json::Value;
use thiserror::Error;

/// Why a backend call did not produce the expected value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{}", .message.as_deref().unwrap_or("request rejected by the server"))]
    Status {
        status: u16,
        /// Message taken from the response body, when it carried one.
        message: Option<String>,
    },

    /// The request never got an answer (DNS, refused connection, CORS...).
    #[error("could not reach the server: {0}")]
    Transport(String),

    /// A 2xx body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The request body could not be serialised.
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a status error, pulling the message out of a JSON error body.
    ///
    /// The backend reports failures as `{"message": ...}` or `{"error": ...}`,
    /// and occasionally as a bare JSON string.
    pub fn from_status(status: u16, body: &Value) -> Self {
        let message = match body {
            Value::Object(map) => ["message", "error", "msg"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str)),
            Value::String(text) => Some(text.as_str()),
            _ => None,
        }
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string);

        Self::Status { status, message }
    }

    /// The server-provided message, or `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// True when the backend was reached and answered.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_from_body() {
        let err = ApiError::from_status(401, &json!({"message": "Credenciales inválidas"}));
        assert_eq!(err.message_or("fallback"), "Credenciales inválidas");
        assert_eq!(err.to_string(), "Credenciales inválidas");

        let err = ApiError::from_status(404, &json!({"error": "Medical file not found"}));
        assert_eq!(err.message_or("fallback"), "Medical file not found");

        let err = ApiError::from_status(404, &json!("Not Found"));
        assert_eq!(err.message_or("fallback"), "Not Found");
    }

    #[test]
    fn test_fallback_without_message() {
        let err = ApiError::from_status(500, &Value::Null);
        assert_eq!(err.message_or("Error al registrar"), "Error al registrar");

        let err = ApiError::from_status(400, &json!({"message": "  "}));
        assert_eq!(err.message_or("Error al registrar"), "Error al registrar");

        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.message_or("fallback"), "fallback");
        assert!(!err.is_status());
    }
}
