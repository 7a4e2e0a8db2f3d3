//! The active workout screen without the screen

use tracing::info;

use crate::{
    clock::DurationClock,
    session::UserSession,
    store::{PreferenceStore, WorkoutDraftStore},
    submit::{ExerciseResolver, SubmitError, SubmitOutcome, SubmitPipeline, WorkoutSubmitter},
};

pub struct ActiveWorkout<R, S, P> {
    store: WorkoutDraftStore<P>,
    clock: DurationClock,
    pipeline: SubmitPipeline<R, S>,
    session: UserSession,
}

impl<R, S, P> ActiveWorkout<R, S, P>
where
    R: ExerciseResolver,
    S: WorkoutSubmitter,
    P: PreferenceStore,
{
    pub fn new(store: WorkoutDraftStore<P>, pipeline: SubmitPipeline<R, S>, session: UserSession) -> Self {
        Self { store, clock: DurationClock::new(), pipeline, session }
    }

    pub fn store(&self) -> &WorkoutDraftStore<P> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut WorkoutDraftStore<P> {
        &mut self.store
    }

    pub fn clock(&self) -> &DurationClock {
        &self.clock
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    pub fn is_saving(&self) -> bool {
        self.pipeline.is_saving()
    }

    /// Starts timing. A workout already in progress keeps its time
    pub fn enter(&mut self) {
        if self.store.draft().is_empty() {
            self.clock.reset();
        } else {
            self.clock.start();
        }
    }

    pub fn cancel(&mut self) {
        self.store.reset_draft();
        self.clock.stop();
    }

    /// Saves the workout and starts over. On error the draft and clock are kept for a retry
    pub async fn complete(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let elapsed = self.clock.elapsed().total_seconds;
        let outcome = self.pipeline.submit(self.store.draft(), elapsed, &self.session).await?;

        if let SubmitOutcome::Saved { workout_id } = &outcome {
            info!(%workout_id, "Workout complete");
            self.store.reset_draft();
            self.clock.stop();
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        store::{MemoryPreferenceStore, SetField},
        test_utils::{FakeContent, FakeServer},
    };

    type Workout = ActiveWorkout<FakeContent, FakeServer, MemoryPreferenceStore>;

    fn active(server: &FakeServer) -> Workout {
        let content = FakeContent::with_exercises(&[("ex-a", "Squat")]);
        ActiveWorkout::new(
            WorkoutDraftStore::new(MemoryPreferenceStore::default()),
            SubmitPipeline::new(content, server.clone()),
            UserSession::new("user_1"),
        )
    }

    fn log_squat(workout: &mut Workout) {
        let store = workout.store_mut();
        let exercise = store.add_exercise(Some("ex-a".to_owned()), "Squat");
        let set = store.add_set(&exercise).unwrap();
        store.update_set(&exercise, &set, SetField::Reps("5".to_owned()));
        store.update_set(&exercise, &set, SetField::Weight("100".to_owned()));
        store.toggle_set_completion(&exercise, &set);
    }

    #[tokio::test]
    async fn test_complete_starts_over() {
        let server = FakeServer::default();
        let mut workout = active(&server);
        workout.enter();
        assert!(workout.clock().is_running());
        log_squat(&mut workout);

        let outcome = workout.complete().await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Saved { workout_id: "workout-1".to_owned() });
        assert!(workout.store().draft().is_empty());
        assert!(!workout.clock().is_running());
        assert_eq!(server.saved()[0].user_id.0, "user_1");
    }

    #[tokio::test]
    async fn test_failed_complete_keeps_draft() {
        let server = FakeServer::failing();
        let mut workout = active(&server);
        workout.enter();
        log_squat(&mut workout);

        let err = workout.complete().await.unwrap_err();

        assert!(err.is_retryable());
        assert_eq!(workout.store().draft().exercises.len(), 1);
        assert!(workout.clock().is_running());
        assert!(!workout.is_saving());
    }

    #[test]
    fn test_cancel_and_reenter() {
        let server = FakeServer::default();
        let mut workout = active(&server);
        workout.enter();
        log_squat(&mut workout);

        // Coming back to a workout in progress doesn't restart it
        workout.enter();
        assert!(workout.clock().is_running());
        assert_eq!(workout.store().draft().exercises.len(), 1);

        workout.cancel();
        assert!(workout.store().draft().is_empty());
        assert!(!workout.clock().is_running());

        workout.enter();
        assert!(workout.clock().is_running());
    }
}
