//! Turns the draft into a workout document and saves it

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use shared::{
    model::{NewWorkout, NewWorkoutExercise, Reference, WorkoutSet},
    types::DocumentKey,
};
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    content::ContentReader,
    session::UserSession,
    store::{DraftExercise, DraftSet, WorkoutDraft},
    ClientError,
};

/// Looks up the catalog id for an exercise name
#[async_trait]
pub trait ExerciseResolver: Send + Sync {
    async fn resolve_exercise_id(&self, name: &str) -> Result<Option<String>, ClientError>;
}

#[async_trait]
impl<C: ContentReader> ExerciseResolver for C {
    async fn resolve_exercise_id(&self, name: &str) -> Result<Option<String>, ClientError> {
        Ok(self.exercise_by_name(name).await?.map(|e| e.id))
    }
}

/// Persists a finished workout, returning its new id
#[async_trait]
pub trait WorkoutSubmitter: Send + Sync {
    async fn submit(&self, workout: &NewWorkout) -> Result<String, ClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved { workout_id: String },
    /// Another submit was still running so nothing was done
    AlreadySaving,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("No completed sets to save")]
    NoCompletedSets,
    #[error("Exercise {name} not found")]
    ExerciseNotFound { name: String },
    #[error("Failed to save workout: {0}")]
    Transport(#[from] ClientError),
}

impl SubmitError {
    /// Text to show the user
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::NoCompletedSets => {
                "No Completed Sets: Please complete at least one set before saving the workout"
                    .to_owned()
            },
            SubmitError::ExerciseNotFound { name } => {
                format!("Exercise {name} not found in database")
            },
            SubmitError::Transport(_) => "Failed to save workout. Please try again.".to_owned(),
        }
    }

    /// Transport failures can be retried with the same draft
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmitError::Transport(_))
    }
}

/// Numeric prefix of typed input, so `"12kg"` reads as 12 and `"abc"` as nothing
fn numeric_prefix(text: &str, allow_decimal: bool) -> &str {
    let text = text.trim_start();
    let mut seen_point = false;
    let end = text
        .char_indices()
        .find(|&(i, c)| match c {
            '-' | '+' if i == 0 => false,
            '.' if allow_decimal && !seen_point => {
                seen_point = true;
                false
            },
            c => !c.is_ascii_digit(),
        })
        .map_or(text.len(), |(i, _)| i);
    &text[..end]
}

pub(crate) fn parse_reps(text: &str) -> u32 {
    numeric_prefix(text, false).parse::<i64>().map_or(0, |v| v.clamp(0, u32::MAX as i64) as u32)
}

pub(crate) fn parse_weight(text: &str) -> f64 {
    match numeric_prefix(text, true).parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

fn is_loggable(set: &DraftSet) -> bool {
    set.completed && !set.reps.is_empty() && !set.weight.is_empty()
}

/// Completed sets of one exercise in document shape
fn completed_sets(exercise: &DraftExercise) -> Vec<WorkoutSet> {
    exercise
        .sets
        .iter()
        .filter(|s| is_loggable(s))
        .map(|s| WorkoutSet {
            key: DocumentKey::generate(),
            reps: parse_reps(&s.reps),
            weight: parse_weight(&s.weight),
            weight_unit: s.weight_unit,
        })
        .collect()
}

/// Resets the in-flight flag however the submit ends
struct SavingGuard<'a>(&'a AtomicBool);

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct SubmitPipeline<R, S> {
    resolver: R,
    submitter: S,
    saving: AtomicBool,
}

impl<R: ExerciseResolver, S: WorkoutSubmitter> SubmitPipeline<R, S> {
    pub fn new(resolver: R, submitter: S) -> Self {
        Self { resolver, submitter, saving: AtomicBool::new(false) }
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }

    /// Saves the draft as one workout document
    ///
    /// Nothing is written unless every exercise in the draft resolves to a
    /// catalog entry and at least one set was completed.
    #[instrument(skip_all, fields(user_id = %session.user_id, exercises = draft.exercises.len()))]
    pub async fn submit(
        &self,
        draft: &WorkoutDraft,
        elapsed_seconds: u64,
        session: &UserSession,
    ) -> Result<SubmitOutcome, SubmitError> {
        if self
            .saving
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Submit already in flight");
            return Ok(SubmitOutcome::AlreadySaving);
        }
        let _guard = SavingGuard(&self.saving);

        let sets: Vec<Vec<WorkoutSet>> = draft.exercises.iter().map(completed_sets).collect();
        if sets.iter().all(Vec::is_empty) {
            warn!("Nothing to save, no completed sets");
            return Err(SubmitError::NoCompletedSets);
        }

        // Every exercise has to exist, even ones with nothing logged
        let mut exercise_ids = Vec::with_capacity(draft.exercises.len());
        for exercise in &draft.exercises {
            let name = &exercise.display_name;
            match self.resolver.resolve_exercise_id(name).await? {
                Some(id) => exercise_ids.push(id),
                None => {
                    error!(%name, "Exercise not found in catalog");
                    return Err(SubmitError::ExerciseNotFound { name: name.clone() });
                },
            }
        }

        let exercises = exercise_ids
            .into_iter()
            .zip(sets)
            .filter(|(_, sets)| !sets.is_empty())
            .map(|(id, sets)| NewWorkoutExercise {
                key: DocumentKey::generate(),
                exercise: Reference::to(id),
                sets,
            })
            .collect();

        let workout = NewWorkout {
            user_id: session.user_id.clone(),
            date: Utc::now(),
            duration: elapsed_seconds,
            exercises,
        };

        let workout_id = self.submitter.submit(&workout).await.map_err(|e| {
            error!("Error saving workout: {e}");
            SubmitError::from(e)
        })?;

        info!(%workout_id, "Workout saved");
        Ok(SubmitOutcome::Saved { workout_id })
    }
}
