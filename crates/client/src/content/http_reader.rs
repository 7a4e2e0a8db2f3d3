use async_trait::async_trait;
use http::header::ACCEPT;
use mime::APPLICATION_JSON;
use serde::{de::DeserializeOwned, Deserialize};
use shared::{
    api::{content::ContentApiConfig, error::ResultContext},
    model::{Exercise, ExerciseSummary, UserId, Workout},
};
use tracing::{debug, instrument};

use super::{queries, ContentReader};
use crate::ClientError;

/// Longest backend error body carried into a `ClientError`
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Deserialize)]
struct QueryResponse<R> {
    result: R,
}

/// `ContentReader` over the backend's public HTTP query api
#[derive(Debug, Clone)]
pub struct HttpContentReader {
    http: reqwest::Client,
    config: ContentApiConfig,
}

impl HttpContentReader {
    pub fn new(config: ContentApiConfig) -> Self {
        Self { http: reqwest::Client::new(), config }
    }

    pub fn config(&self) -> &ContentApiConfig {
        &self.config
    }

    /// Runs a query. Parameter values are json encoded as the api expects
    pub async fn query<R: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, &str)],
    ) -> Result<R, ClientError> {
        let mut url_params = Vec::with_capacity(params.len() + 1);
        url_params.push(("query".to_owned(), query.to_owned()));
        for (name, value) in params {
            url_params.push((format!("${name}"), serde_json::to_string(value)?));
        }

        let url = self.config.query_url();
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, APPLICATION_JSON.essence_str())
            .query(&url_params)
            .send()
            .await
            .map_err(ClientError::from)
            .with_context(|| format!("Querying {url}"))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(ClientError::from)
            .with_context(|| format!("Extracting query response from {url}"))?;

        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let response = serde_json::from_str::<QueryResponse<R>>(&text)
            .map_err(ClientError::from)
            .with_context(|| format!("Deserializing query result from {url}"))?;
        Ok(response.result)
    }
}

#[async_trait]
impl ContentReader for HttpContentReader {
    #[instrument(skip(self))]
    async fn exercises(&self) -> Result<Vec<Exercise>, ClientError> {
        let exercises: Vec<Exercise> = self.query(queries::EXERCISES, &[]).await?;
        debug!(count = exercises.len(), "Fetched exercises");
        Ok(exercises)
    }

    #[instrument(skip(self))]
    async fn exercise(&self, id: &str) -> Result<Option<Exercise>, ClientError> {
        self.query(queries::EXERCISE_BY_ID, &[("id", id)]).await
    }

    #[instrument(skip(self))]
    async fn exercise_by_name(&self, name: &str) -> Result<Option<ExerciseSummary>, ClientError> {
        self.query(queries::EXERCISE_BY_NAME, &[("name", name)]).await
    }

    #[instrument(skip(self))]
    async fn workouts_for_user(&self, user_id: &UserId) -> Result<Vec<Workout>, ClientError> {
        let workouts: Vec<Workout> =
            self.query(queries::WORKOUTS_FOR_USER, &[("userId", user_id.0.as_str())]).await?;
        debug!(count = workouts.len(), "Fetched workouts");
        Ok(workouts)
    }

    #[instrument(skip(self))]
    async fn workout(&self, id: &str) -> Result<Option<Workout>, ClientError> {
        self.query(queries::WORKOUT_BY_ID, &[("workoutId", id)]).await
    }
}
