use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    api::error::ValidationError,
    model::{ExerciseSummary, UserId, ValidateModel, WeightUnit},
    types::DocumentKey,
};

/// Reference from one content document to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename = "reference")]
pub struct Reference {
    #[serde(rename = "_ref")]
    pub id: String,
}

impl Reference {
    pub fn to<S: Into<String>>(id: S) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename = "set", rename_all = "camelCase")]
pub struct WorkoutSet {
    #[serde(rename = "_key")]
    pub key: DocumentKey,
    pub reps: u32,
    pub weight: f64,
    pub weight_unit: WeightUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename = "workoutExercise")]
pub struct NewWorkoutExercise {
    #[serde(rename = "_key")]
    pub key: DocumentKey,
    pub exercise: Reference,
    pub sets: Vec<WorkoutSet>,
}

/// The workout document as written to the content backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename = "workout", rename_all = "camelCase")]
pub struct NewWorkout {
    pub user_id: UserId,
    /// When the workout was saved, not when it started
    pub date: DateTime<Utc>,
    /// Seconds
    pub duration: u64,
    pub exercises: Vec<NewWorkoutExercise>,
}

impl ValidateModel for NewWorkout {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.user_id.trim().is_empty() {
            errors.push("userId must not be empty".to_owned());
        }
        if self.exercises.is_empty() {
            errors.push("a workout needs at least one exercise".to_owned());
        }
        for (i, exercise) in self.exercises.iter().enumerate() {
            if exercise.exercise.id.trim().is_empty() {
                errors.push(format!("exercises[{i}] has an empty exercise reference"));
            }
            if exercise.sets.is_empty() {
                errors.push(format!("exercises[{i}] needs at least one set"));
            }
            for (j, set) in exercise.sets.iter().enumerate() {
                if !set.weight.is_finite() || set.weight < 0.0 {
                    errors.push(format!("exercises[{i}].sets[{j}] has an invalid weight"));
                }
            }
        }

        ValidationError::check(errors)
    }
}

/// Any json number as a whole count. Negatives become 0, fractions are
/// truncated and anything that isn't a number is `None`
fn lenient_count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    Ok(lenient_number(deserializer)?.and_then(|v| T::try_from(v.max(0.0) as u64).ok()))
}

/// Any finite json number, anything else is `None`
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64).filter(|v| v.is_finite()))
}

/// A set as read back. Nothing is enforced by the backend so every field
/// may be missing or hold an unexpected number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedSet {
    #[serde(default, deserialize_with = "lenient_count")]
    pub reps: Option<u32>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub weight_unit: Option<WeightUnit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// `None` when the referenced exercise has since been deleted
    #[serde(default)]
    pub exercise: Option<ExerciseSummary>,
    #[serde(default)]
    pub sets: Option<Vec<RecordedSet>>,
}

impl WorkoutExercise {
    pub fn sets(&self) -> &[RecordedSet] {
        self.sets.as_deref().unwrap_or_default()
    }
}

/// A saved workout with its exercises dereferenced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Seconds
    #[serde(default, deserialize_with = "lenient_count")]
    pub duration: Option<u64>,
    #[serde(default)]
    pub exercises: Option<Vec<WorkoutExercise>>,
}

impl Workout {
    pub fn exercises(&self) -> &[WorkoutExercise] {
        self.exercises.as_deref().unwrap_or_default()
    }
}
