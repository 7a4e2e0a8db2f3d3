use async_trait::async_trait;
use shared::model::Workout;
use tracing::{error, info, instrument};

use crate::{catalog::LoadState, content::ContentReader, session::UserSession, ClientError};

/// Deletes a saved workout
#[async_trait]
pub trait WorkoutRemover: Send + Sync {
    async fn remove(&self, workout_id: &str) -> Result<(), ClientError>;
}

/// A user's saved workouts, newest first
pub struct WorkoutHistory<C, D> {
    content: C,
    remover: D,
    workouts: Vec<Workout>,
    state: LoadState,
}

impl<C: ContentReader, D: WorkoutRemover> WorkoutHistory<C, D> {
    pub fn new(content: C, remover: D) -> Self {
        Self { content, remover, workouts: Vec::new(), state: LoadState::Idle }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    #[instrument(skip_all, fields(user_id = %session.user_id))]
    pub async fn refresh(&mut self, session: &UserSession) -> &LoadState {
        self.state = LoadState::Loading;
        self.state = match self.content.workouts_for_user(&session.user_id).await {
            Ok(workouts) => {
                self.workouts = workouts;
                LoadState::Loaded
            },
            Err(e) => {
                error!("Error fetching workouts: {e}");
                LoadState::Failed(e.to_string())
            },
        };
        &self.state
    }

    /// One workout with its exercise descriptions
    pub async fn record(&self, workout_id: &str) -> Result<Option<Workout>, ClientError> {
        self.content.workout(workout_id).await
    }

    /// Deletes through the server. The list is left alone, refresh to see the change
    #[instrument(skip(self))]
    pub async fn delete(&self, workout_id: &str) -> Result<(), ClientError> {
        self.remover.remove(workout_id).await.map_err(|e| {
            error!("Error deleting workout: {e}");
            e
        })?;
        info!("Workout deleted");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::test_utils::{FakeContent, FakeServer};

    fn workout(id: &str, day: u32) -> Workout {
        Workout {
            id: id.to_owned(),
            date: Some(Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap()),
            duration: Some(1200),
            exercises: None,
        }
    }

    fn content() -> FakeContent {
        FakeContent::default()
            .with_workout("user_1", workout("w-1", 1))
            .with_workout("user_1", workout("w-3", 3))
            .with_workout("user_2", workout("w-2", 2))
    }

    #[tokio::test]
    async fn test_refresh_lists_users_workouts_newest_first() {
        let mut history = WorkoutHistory::new(content(), FakeServer::default());

        assert_eq!(history.refresh(&UserSession::new("user_1")).await, &LoadState::Loaded);

        let ids: Vec<_> = history.workouts().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["w-3", "w-1"]);
    }

    #[tokio::test]
    async fn test_record_and_delete() {
        let server = FakeServer::default();
        let history = WorkoutHistory::new(content(), server.clone());

        assert_eq!(history.record("w-2").await.unwrap().unwrap().id, "w-2");
        assert_eq!(history.record("w-9").await.unwrap(), None);

        history.delete("w-1").await.unwrap();
        assert_eq!(server.removed(), vec!["w-1".to_owned()]);
    }

    #[tokio::test]
    async fn test_failures() {
        let mut history = WorkoutHistory::new(FakeContent::failing(), FakeServer::failing());
        assert!(matches!(history.refresh(&UserSession::new("user_1")).await, LoadState::Failed(_)));
        assert!(history.delete("w-1").await.is_err());
    }
}
