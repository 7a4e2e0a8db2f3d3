use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

mod chat;
pub use chat::*;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Language model request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Language model responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to decode language model response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Language model returned no text")]
    EmptyResponse,
}

/// Produces coaching text for an exercise
#[async_trait]
pub trait GuidanceProvider: Debug + Send + Sync {
    async fn guidance(&self, exercise_name: &str) -> Result<String, LlmError>;
}

/// The single user message sent for an exercise
pub fn guidance_prompt(exercise_name: &str) -> String {
    format!(
        "You are a fitness coach. Give concise instructions for the exercise: {exercise_name}.
Answer in markdown with exactly these sections:

## Equipment
## Instructions
### Tips
### Safety

Keep every section brief, one or two sentences per point, with no introduction or conclusion."
    )
}

#[cfg(test)]
mod test {
    use super::guidance_prompt;

    #[test]
    fn test_prompt_headings() {
        let prompt = guidance_prompt("Deadlift");
        assert!(prompt.contains("for the exercise: Deadlift."));
        for heading in ["## Equipment", "## Instructions", "### Tips", "### Safety"] {
            assert!(prompt.contains(heading), "missing {heading}");
        }
    }
}
