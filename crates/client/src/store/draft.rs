use std::fmt;

use rand::{distributions::Alphanumeric, Rng};
use shared::model::WeightUnit;
use tracing::{debug, warn};

use super::{PreferenceStore, Preferences};

const LOCAL_ID_LENGTH: usize = 12;

/// Identifies an exercise or set inside the draft. Never sent anywhere
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalId(String);

impl LocalId {
    fn random() -> Self {
        Self(
            rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(LOCAL_ID_LENGTH)
                .map(char::from)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftSet {
    pub local_id: LocalId,
    /// Text as typed, parsed when the workout is submitted
    pub reps: String,
    pub weight: String,
    pub weight_unit: WeightUnit,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftExercise {
    pub local_id: LocalId,
    pub catalog_ref: Option<String>,
    pub display_name: String,
    pub sets: Vec<DraftSet>,
}

impl DraftExercise {
    pub fn completed_sets(&self) -> usize {
        self.sets.iter().filter(|s| s.completed).count()
    }

    fn set_mut(&mut self, set_id: &LocalId) -> Option<&mut DraftSet> {
        self.sets.iter_mut().find(|s| &s.local_id == set_id)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkoutDraft {
    pub exercises: Vec<DraftExercise>,
    pub weight_unit_preference: WeightUnit,
}

impl WorkoutDraft {
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Whether the workout can be finished: something was logged and every set is ticked off
    pub fn can_complete(&self) -> bool {
        !self.exercises.is_empty()
            && self.exercises.iter().flat_map(|e| &e.sets).all(|s| s.completed)
    }

    pub fn exercise(&self, exercise_id: &LocalId) -> Option<&DraftExercise> {
        self.exercises.iter().find(|e| &e.local_id == exercise_id)
    }

    fn exercise_mut(&mut self, exercise_id: &LocalId) -> Option<&mut DraftExercise> {
        self.exercises.iter_mut().find(|e| &e.local_id == exercise_id)
    }

    fn contains_id(&self, id: &LocalId) -> bool {
        self.exercises
            .iter()
            .any(|e| &e.local_id == id || e.sets.iter().any(|s| &s.local_id == id))
    }

    fn new_id(&self) -> LocalId {
        loop {
            let id = LocalId::random();
            if !self.contains_id(&id) {
                return id;
            }
        }
    }
}

/// One field of a set
#[derive(Debug, Clone, PartialEq)]
pub enum SetField {
    Reps(String),
    Weight(String),
    WeightUnit(WeightUnit),
}

/// Owner of the in-progress workout
///
/// Operations referring to an id that isn't in the draft do nothing and return
/// `false` (or `None`).
pub struct WorkoutDraftStore<P> {
    draft: WorkoutDraft,
    preferences: P,
}

impl<P: PreferenceStore> WorkoutDraftStore<P> {
    pub fn new(preferences: P) -> Self {
        let weight_unit = match preferences.load() {
            Ok(saved) => saved.unwrap_or_default().weight_unit,
            Err(e) => {
                warn!("Failed to load preferences, using defaults: {e}");
                WeightUnit::default()
            },
        };

        Self {
            draft: WorkoutDraft { exercises: Vec::new(), weight_unit_preference: weight_unit },
            preferences,
        }
    }

    pub fn draft(&self) -> &WorkoutDraft {
        &self.draft
    }

    pub fn weight_unit_preference(&self) -> WeightUnit {
        self.draft.weight_unit_preference
    }

    pub fn add_exercise<S: Into<String>>(
        &mut self,
        catalog_ref: Option<String>,
        display_name: S,
    ) -> LocalId {
        let local_id = self.draft.new_id();
        self.draft.exercises.push(DraftExercise {
            local_id: local_id.clone(),
            catalog_ref,
            display_name: display_name.into(),
            sets: Vec::new(),
        });
        local_id
    }

    pub fn remove_exercise(&mut self, exercise_id: &LocalId) -> bool {
        let before = self.draft.exercises.len();
        self.draft.exercises.retain(|e| &e.local_id != exercise_id);
        before != self.draft.exercises.len()
    }

    /// Appends an empty, incomplete set in the current preferred unit
    pub fn add_set(&mut self, exercise_id: &LocalId) -> Option<LocalId> {
        let local_id = self.draft.new_id();
        let weight_unit = self.draft.weight_unit_preference;
        let exercise = self.draft.exercise_mut(exercise_id)?;
        exercise.sets.push(DraftSet {
            local_id: local_id.clone(),
            reps: String::new(),
            weight: String::new(),
            weight_unit,
            completed: false,
        });
        Some(local_id)
    }

    /// Reps and weight are locked once a set is completed, the unit is not
    pub fn update_set(&mut self, exercise_id: &LocalId, set_id: &LocalId, field: SetField) -> bool {
        let Some(set) = self.draft.exercise_mut(exercise_id).and_then(|e| e.set_mut(set_id)) else {
            return false;
        };

        match field {
            SetField::Reps(_) | SetField::Weight(_) if set.completed => false,
            SetField::Reps(reps) => {
                set.reps = reps;
                true
            },
            SetField::Weight(weight) => {
                set.weight = weight;
                true
            },
            SetField::WeightUnit(unit) => {
                set.weight_unit = unit;
                true
            },
        }
    }

    pub fn toggle_set_completion(&mut self, exercise_id: &LocalId, set_id: &LocalId) -> bool {
        match self.draft.exercise_mut(exercise_id).and_then(|e| e.set_mut(set_id)) {
            Some(set) => {
                set.completed = !set.completed;
                true
            },
            None => false,
        }
    }

    pub fn remove_set(&mut self, exercise_id: &LocalId, set_id: &LocalId) -> bool {
        let Some(exercise) = self.draft.exercise_mut(exercise_id) else {
            return false;
        };
        let before = exercise.sets.len();
        exercise.sets.retain(|s| &s.local_id != set_id);
        before != exercise.sets.len()
    }

    /// Applies to sets added from now on. Saving the preference is best effort
    pub fn set_weight_unit_preference(&mut self, unit: WeightUnit) {
        self.draft.weight_unit_preference = unit;
        if let Err(e) = self.preferences.save(&Preferences { weight_unit: unit }) {
            warn!("Failed to save weight unit preference: {e}");
        }
    }

    /// Drops every exercise, the preference stays
    pub fn reset_draft(&mut self) {
        debug!(exercises = self.draft.exercises.len(), "Resetting workout draft");
        self.draft.exercises.clear();
    }
}
