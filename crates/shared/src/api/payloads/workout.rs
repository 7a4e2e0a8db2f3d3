use serde::{Deserialize, Serialize};

use crate::{
    api::error::ValidationError,
    model::{NewWorkout, ValidateModel},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveWorkoutRequest {
    pub workout_data: NewWorkout,
}

impl ValidateModel for SaveWorkoutRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        self.workout_data.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveWorkoutResponse {
    pub success: bool,
    pub workout_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWorkoutRequest {
    #[serde(default)]
    pub workout_id: String,
}

impl ValidateModel for DeleteWorkoutRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if self.workout_id.trim().is_empty() {
            errors.push("workoutId must not be empty".to_owned());
        }
        ValidationError::check(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteWorkoutResponse {
    pub success: bool,
    pub message: String,
}
