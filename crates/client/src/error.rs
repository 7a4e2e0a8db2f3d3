use shared::api::error::{ErrorContext, ValidationError};
use thiserror::Error;

/// Transport level failures talking to the content backend or the server
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {message}")]
    Request { message: String },
    /// The server answered with its `{ "error": ... }` body
    #[error("Server responded with {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Request body is invalid: {inner}")]
    Validation { inner: ValidationError },
    #[error("Expected {expected} response, got {got:?}: {body}")]
    WrongContentType { expected: String, got: Option<String>, body: String },
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("{context}: {inner}")]
    WithContext { context: String, inner: Box<Self> },
}

impl ClientError {
    /// The error with any context layers peeled off
    pub fn root(&self) -> &ClientError {
        match self {
            ClientError::WithContext { inner, .. } => inner.root(),
            other => other,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Self::Decode { message: value.to_string() }
        } else {
            Self::Request { message: format!("reqwest error: {value}") }
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode { message: format!("serde_json error: {value}") }
    }
}

impl From<ValidationError> for ClientError {
    fn from(inner: ValidationError) -> Self {
        Self::Validation { inner }
    }
}

impl ErrorContext<ClientError> for ClientError {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> ClientError {
        self.context(context())
    }

    fn context<S: Into<String>>(self, context: S) -> ClientError {
        ClientError::WithContext { context: context.into(), inner: Box::new(self) }
    }
}

#[cfg(test)]
mod test {
    use shared::api::error::ResultContext;

    use super::ClientError;

    #[test]
    fn test_context_wraps_and_root_unwraps() {
        let result: Result<(), ClientError> =
            Err(ClientError::Server { status: 500, message: "Failed to save workout".to_owned() });
        let err = result.context("Saving workout").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Saving workout: Server responded with 500: Failed to save workout"
        );
        assert!(matches!(err.root(), ClientError::Server { status: 500, .. }));
    }
}
