use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::api::content::ContentApiConfig;
use tracing::{debug, instrument};

use super::{ContentError, ContentWriter};

/// Longest backend error body carried into a `ContentError`
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum Mutation<'a> {
    Create(&'a Value),
    Delete { id: &'a str },
}

#[derive(Debug, Serialize)]
struct MutateRequest<'a> {
    mutations: Vec<Mutation<'a>>,
}

#[derive(Debug, Deserialize)]
struct MutateResult {
    id: String,
}

#[derive(Debug, Deserialize)]
struct MutateResponse {
    #[serde(default)]
    results: Vec<MutateResult>,
}

/// `ContentWriter` over the backend's HTTP mutation api
#[derive(Debug, Clone)]
pub struct HttpContentWriter {
    client: reqwest::Client,
    config: ContentApiConfig,
    token: String,
}

impl HttpContentWriter {
    pub fn new<S: Into<String>>(config: ContentApiConfig, token: S) -> Self {
        Self { client: reqwest::Client::new(), config, token: token.into() }
    }

    async fn mutate(&self, mutation: Mutation<'_>) -> Result<MutateResponse, ContentError> {
        let response = self
            .client
            .post(self.config.mutate_url())
            .bearer_auth(&self.token)
            .json(&MutateRequest { mutations: vec![mutation] })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(ContentError::Status { status: status.as_u16(), message });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ContentWriter for HttpContentWriter {
    #[instrument(skip_all)]
    async fn create(&self, document: Value) -> Result<String, ContentError> {
        let response = self.mutate(Mutation::Create(&document)).await?;
        let id = response
            .results
            .into_iter()
            .next()
            .map(|r| r.id)
            .ok_or(ContentError::MissingId)?;
        debug!(%id, "Created document");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), ContentError> {
        self.mutate(Mutation::Delete { id }).await?;
        debug!("Deleted document");
        Ok(())
    }
}
