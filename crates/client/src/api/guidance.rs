use async_trait::async_trait;
use http::Method;
use shared::api::{
    payloads::{GuidanceRequest, GuidanceResponse},
    Object,
};

use super::ApiClient;
use crate::{guidance::GuidanceSource, ClientError};

impl ApiClient {
    pub async fn guidance(&self, exercise_name: &str) -> Result<String, ClientError> {
        let body = GuidanceRequest { exercise_name: exercise_name.to_owned() };
        let response: GuidanceResponse =
            self.json_request(Method::POST, Object::Guidance.path(), Some(&body)).await?;
        Ok(response.message)
    }
}

#[async_trait]
impl GuidanceSource for ApiClient {
    async fn fetch_guidance(&self, exercise_name: &str) -> Result<String, ClientError> {
        self.guidance(exercise_name).await
    }
}
