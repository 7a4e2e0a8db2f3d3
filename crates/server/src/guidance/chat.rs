use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{guidance_prompt, GuidanceProvider, LlmError};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Any OpenAI compatible `/chat/completions` api
#[derive(Clone)]
pub struct ChatCompletionsProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatCompletionsProvider {
    pub fn new<B: Into<String>, K: Into<String>, M: Into<String>>(
        base_url: B,
        api_key: K,
        model: M,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for ChatCompletionsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionsProvider")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

fn parse_error_response(status: u16, body: &str) -> LlmError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(body) => body.error.message,
        Err(_) => body.to_owned(),
    };
    LlmError::Status { status, message }
}

fn first_choice_text(response: ChatResponse) -> Result<String, LlmError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or(LlmError::EmptyResponse)
}

#[async_trait]
impl GuidanceProvider for ChatCompletionsProvider {
    #[instrument(skip(self))]
    async fn guidance(&self, exercise_name: &str) -> Result<String, LlmError> {
        let prompt = guidance_prompt(exercise_name);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: &prompt }],
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(parse_error_response(status.as_u16(), &body));
        }

        let text = first_choice_text(serde_json::from_str(&body)?)?;
        debug!(len = text.len(), "Received guidance");
        Ok(text)
    }
}
