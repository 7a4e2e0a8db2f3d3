use serde::{Deserialize, Serialize};

use crate::{api::error::ValidationError, model::ValidateModel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceRequest {
    #[serde(default)]
    pub exercise_name: String,
}

impl ValidateModel for GuidanceRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if self.exercise_name.trim().is_empty() {
            errors.push("exerciseName must not be empty".to_owned());
        }
        ValidationError::check(errors)
    }
}

/// Markdown guidance text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceResponse {
    pub message: String,
}
