use async_trait::async_trait;
use http::Method;
use shared::{
    api::{
        payloads::{
            DeleteWorkoutRequest, DeleteWorkoutResponse, SaveWorkoutRequest, SaveWorkoutResponse,
        },
        Object,
    },
    model::NewWorkout,
};

use super::ApiClient;
use crate::{history::WorkoutRemover, submit::WorkoutSubmitter, ClientError};

impl ApiClient {
    pub async fn save_workout(
        &self,
        workout: &NewWorkout,
    ) -> Result<SaveWorkoutResponse, ClientError> {
        let body = SaveWorkoutRequest { workout_data: workout.clone() };
        self.json_request(Method::POST, Object::SaveWorkout.path(), Some(&body)).await
    }

    pub async fn delete_workout(
        &self,
        workout_id: &str,
    ) -> Result<DeleteWorkoutResponse, ClientError> {
        let body = DeleteWorkoutRequest { workout_id: workout_id.to_owned() };
        self.json_request(Method::POST, Object::DeleteWorkout.path(), Some(&body)).await
    }
}

#[async_trait]
impl WorkoutSubmitter for ApiClient {
    async fn submit(&self, workout: &NewWorkout) -> Result<String, ClientError> {
        Ok(self.save_workout(workout).await?.workout_id)
    }
}

#[async_trait]
impl WorkoutRemover for ApiClient {
    async fn remove(&self, workout_id: &str) -> Result<(), ClientError> {
        self.delete_workout(workout_id).await?;
        Ok(())
    }
}
