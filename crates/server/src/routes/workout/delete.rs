use axum::Json;
use shared::{
    api::{
        error::ServerError,
        payloads::{DeleteWorkoutRequest, DeleteWorkoutResponse},
        response_errors::DeleteWorkoutError,
    },
    model::ValidateModel,
};
use tracing::{error, info, instrument};

use crate::ContentStore;

#[instrument(skip_all, fields(workout_id = %request.workout_id))]
pub async fn delete_workout(
    content: ContentStore,
    Json(request): Json<DeleteWorkoutRequest>,
) -> Result<Json<DeleteWorkoutResponse>, ServerError<DeleteWorkoutError>> {
    request.validate().map_err(|_| DeleteWorkoutError::MissingWorkoutId)?;

    content.delete(&request.workout_id).await.map_err(|e| {
        error!("Error deleting workout: {e}");
        DeleteWorkoutError::Backend
    })?;

    info!("Deleted workout");
    Ok(Json(DeleteWorkoutResponse {
        success: true,
        message: "Workout deleted successfully".to_owned(),
    }))
}
