//! Writes to the hosted content backend. Reads happen on the client

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

mod http;
pub use self::http::*;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content backend request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Content backend responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to decode content backend response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Content backend did not return a document id")]
    MissingId,
}

#[async_trait]
pub trait ContentWriter: Debug + Send + Sync {
    /// Creates a document and returns the id the backend gave it
    async fn create(&self, document: serde_json::Value) -> Result<String, ContentError>;

    /// Deleting an id that doesn't exist is not an error
    async fn delete(&self, id: &str) -> Result<(), ContentError>;
}
