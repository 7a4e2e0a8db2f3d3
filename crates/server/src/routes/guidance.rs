use axum::Json;
use shared::{
    api::{
        error::ServerError,
        payloads::{GuidanceRequest, GuidanceResponse},
        response_errors::GuidanceError,
    },
    model::ValidateModel,
};
use tracing::{error, instrument};

use crate::LanguageModel;

#[instrument(skip_all, fields(exercise_name = %request.exercise_name))]
pub async fn ai_guidance(
    model: LanguageModel,
    Json(request): Json<GuidanceRequest>,
) -> Result<Json<GuidanceResponse>, ServerError<GuidanceError>> {
    request.validate().map_err(|_| GuidanceError::MissingExerciseName)?;

    let message = model.guidance(&request.exercise_name).await.map_err(|e| {
        error!("Error fetching ai guidance: {e}");
        GuidanceError::Provider
    })?;

    Ok(Json(GuidanceResponse { message }))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_utils::*;

    #[tokio::test]
    async fn test_guidance() {
        let (app, _, guidance) = test_app();

        let (status, body) = post_json(app, "/api/ai", json!({ "exerciseName": "Squat" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "## Equipment\nSquat" }));
        assert_eq!(guidance.asked(), vec!["Squat".to_owned()]);
    }

    #[tokio::test]
    async fn test_guidance_requires_name() {
        let (app, _, guidance) = test_app();

        let (status, body) = post_json(app, "/api/ai", json!({ "exerciseName": "" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Exercise name is required" }));
        assert!(guidance.asked().is_empty());
    }

    #[tokio::test]
    async fn test_guidance_provider_failure() {
        let (app, _, _) = app_with(FakeContent::default(), FakeGuidance::failing());

        let (status, body) = post_json(app, "/api/ai", json!({ "exerciseName": "Squat" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Error fetching ai guidance" }));
    }
}
