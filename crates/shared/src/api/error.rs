use std::fmt::{self, Debug, Display};

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "backend")]
mod backend {
    use std::fmt::Display;

    use axum::{
        response::{IntoResponse, Response},
        Json,
    };

    use super::{ErrorResponse, ServerError};

    // Every route error renders as `{ "error": "<message>" }` with the variant's status
    impl<T: Display> IntoResponse for ServerError<T> {
        fn into_response(self) -> Response {
            let code = self.code();
            let body = ErrorResponse { error: self.to_string() };
            (code, Json(body)).into_response()
        }
    }
}

/// The body of every non-2xx response from the api
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("Validation failed: {}", .error_messages.join(", "))]
pub struct ValidationError {
    pub error_messages: Vec<String>,
}

impl ValidationError {
    /// Turns a list of problems into an error, or `Ok` when there are none
    pub fn check(error_messages: Vec<String>) -> Result<(), ValidationError> {
        if error_messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { error_messages })
        }
    }
}

#[derive(Debug, Clone)]
pub enum ServerError<T> {
    /// A route specific error, `code` comes from the `response_error!` declaration
    Inner { code: StatusCode, inner: T },
    /// The request body failed validation
    Validation { inner: ValidationError },
    /// Anything unexpected. Always a 500
    Other { message: String },
}

impl<T> ServerError<T> {
    pub fn code(&self) -> StatusCode {
        match self {
            ServerError::Inner { code, .. } => *code,
            ServerError::Validation { .. } => StatusCode::BAD_REQUEST,
            ServerError::Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T: Display> Display for ServerError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Inner { inner, .. } => write!(f, "{inner}"),
            ServerError::Validation { inner } => write!(f, "{inner}"),
            ServerError::Other { message } => write!(f, "{message}"),
        }
    }
}

impl<T: Debug + Display> std::error::Error for ServerError<T> {}

impl<T> From<ValidationError> for ServerError<T> {
    fn from(inner: ValidationError) -> Self {
        Self::Validation { inner }
    }
}

/// Builds a `ServerError::Other` from format args
#[macro_export]
macro_rules! other_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::Other { message: format!($($arg)*) }
    };
}

pub trait ErrorContext<E>: Sized {
    /// Add helpful context to errors
    ///
    /// `context` is provided as a closure to avoid potential formatting cost if
    /// the result isn't an error
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> E;
    /// Add helpful context to errors
    fn context<S: Into<String>>(self, context: S) -> E;
}

pub trait ResultContext<T, E: ErrorContext<E>> {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> Result<T, E>;
    fn context<S: Into<String>>(self, context: S) -> Result<T, E>;
}

impl<T, E: ErrorContext<E>> ResultContext<T, E> for Result<T, E> {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> Result<T, E> {
        self.map_err(|e| e.context(context()))
    }
    fn context<S: Into<String>>(self, context: S) -> Result<T, E> {
        self.map_err(|e| e.context(context))
    }
}
