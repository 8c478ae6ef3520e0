//! The error type returned by every API call.

use serde::Deserialize;

/// The errors that may occur while talking to the expense API.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response, e.g. the server is unreachable
    /// or the browser blocked the request.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered 401.
    ///
    /// By the time the caller sees this error the session may already have
    /// been cleared, see [crate::http::ApiClient].
    #[error("unauthorized: {}", .message.as_deref().unwrap_or("no message"))]
    Unauthorized { message: Option<String> },

    /// The server answered with any other non-2xx status.
    #[error("request failed with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// A 2xx response body did not have the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// A request body could not be serialized as JSON.
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Builds the error for a non-2xx response from its status and raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = server_message_from_body(body);

        if status == 401 {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Status { status, message }
        }
    }

    /// The human-readable message sent by the server, if there was one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Status { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// The server message, or `fallback` when the server did not send one.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message().unwrap_or(fallback)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn server_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_server_message() {
        let error = ApiError::from_status(400, r#"{"message":"Amount required"}"#);

        assert_eq!(
            error,
            ApiError::Status {
                status: 400,
                message: Some("Amount required".to_owned())
            }
        );
        assert_eq!(error.user_message("Failed to add expense"), "Amount required");
    }

    #[test]
    fn unauthorized_is_its_own_variant() {
        let error = ApiError::from_status(401, r#"{"message":"Invalid credentials"}"#);

        assert!(error.is_unauthorized());
        assert_eq!(error.server_message(), Some("Invalid credentials"));
    }

    #[test]
    fn non_json_body_has_no_message() {
        let error = ApiError::from_status(502, "<html>Bad Gateway</html>");

        assert_eq!(error.server_message(), None);
        assert_eq!(error.user_message("Failed to add expense"), "Failed to add expense");
    }

    #[test]
    fn blank_message_is_ignored() {
        let error = ApiError::from_status(500, r#"{"message":"  "}"#);

        assert_eq!(error.server_message(), None);
    }

    #[test]
    fn network_error_uses_fallback() {
        let error = ApiError::Network("connection refused".to_owned());

        assert_eq!(error.user_message("Failed to delete expense"), "Failed to delete expense");
        assert_eq!(error.to_string(), "network error: connection refused");
    }
}
