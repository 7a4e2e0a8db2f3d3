use axum::Json;
use shared::{
    api::{
        error::ServerError,
        payloads::{SaveWorkoutRequest, SaveWorkoutResponse},
        response_errors::SaveWorkoutError,
    },
    model::ValidateModel,
    other_error,
};
use tracing::{error, info, instrument};

use crate::ContentStore;

#[instrument(skip_all, fields(user_id = %request.workout_data.user_id))]
pub async fn save_workout(
    content: ContentStore,
    Json(request): Json<SaveWorkoutRequest>,
) -> Result<Json<SaveWorkoutResponse>, ServerError<SaveWorkoutError>> {
    request.validate()?;

    let document = serde_json::to_value(&request.workout_data)
        .map_err(|e| other_error!("Failed to encode workout: {e}"))?;
    let workout_id = content.create(document).await.map_err(|e| {
        error!("Error saving workout: {e}");
        SaveWorkoutError::Backend
    })?;

    info!(%workout_id, "Saved workout");
    Ok(Json(SaveWorkoutResponse {
        success: true,
        workout_id,
        message: "Workout saved successfully".to_owned(),
    }))
}

#[cfg(test)]
mod test {
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::{json, Value};
    use shared::{
        api::{error::ServerError, response_errors::SaveWorkoutError},
        other_error,
    };

    use crate::routes::test_utils::*;

    fn workout_data() -> Value {
        json!({
            "_type": "workout",
            "userId": "user_1",
            "date": "2024-03-01T10:00:00Z",
            "duration": 1800,
            "exercises": [{
                "_type": "workoutExercise",
                "_key": "abc1234",
                "exercise": { "_type": "reference", "_ref": "ex-1" },
                "sets": [{ "_type": "set", "_key": "def5678", "reps": 10, "weight": 50.0, "weightUnit": "kg" }]
            }]
        })
    }

    #[tokio::test]
    async fn test_save_workout() {
        let (app, content, _) = test_app();

        let (status, body) =
            post_json(app, "/api/save-workout", json!({ "workoutData": workout_data() })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "success": true, "workoutId": "workout-1", "message": "Workout saved successfully" })
        );
        let created = content.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0]["_type"], "workout");
        assert_eq!(created[0]["exercises"][0]["sets"][0]["weightUnit"], "kg");
    }

    #[tokio::test]
    async fn test_save_workout_rejects_empty_workout() {
        let (app, content, _) = test_app();
        let mut data = workout_data();
        data["exercises"] = json!([]);

        let (status, body) = post_json(app, "/api/save-workout", json!({ "workoutData": data })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Validation failed"));
        assert!(content.created().is_empty());
    }

    #[tokio::test]
    async fn test_save_workout_backend_failure() {
        let (app, _, _) = app_with(FakeContent::failing(), FakeGuidance::default());

        let (status, body) =
            post_json(app, "/api/save-workout", json!({ "workoutData": workout_data() })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to save workout" }));
    }

    #[tokio::test]
    async fn test_unexpected_error_is_500_with_message() {
        let err: ServerError<SaveWorkoutError> = other_error!("Failed to encode workout: {}", "bad");

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Failed to encode workout: bad" }));
    }
}
