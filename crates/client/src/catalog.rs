use shared::model::Exercise;
use tracing::{error, instrument};

use crate::{content::ContentReader, ClientError};

/// Where a fetched list is at
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The error's message, the previous data is kept
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// The exercise library with a client side name filter
pub struct ExerciseCatalog<C> {
    content: C,
    exercises: Vec<Exercise>,
    state: LoadState,
}

impl<C: ContentReader> ExerciseCatalog<C> {
    pub fn new(content: C) -> Self {
        Self { content, exercises: Vec::new(), state: LoadState::Idle }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Fetches the whole library again
    #[instrument(skip_all)]
    pub async fn refresh(&mut self) -> &LoadState {
        self.state = LoadState::Loading;
        self.state = match self.content.exercises().await {
            Ok(exercises) => {
                self.exercises = exercises;
                LoadState::Loaded
            },
            Err(e) => {
                error!("Error fetching exercises: {e}");
                LoadState::Failed(e.to_string())
            },
        };
        &self.state
    }

    /// Case insensitive substring match on the name. An empty query matches everything
    pub fn filtered(&self, query: &str) -> Vec<&Exercise> {
        let query = query.to_lowercase();
        self.exercises.iter().filter(|e| e.name.to_lowercase().contains(&query)).collect()
    }

    /// A single exercise for the detail view, always fetched fresh
    pub async fn exercise(&self, id: &str) -> Result<Option<Exercise>, ClientError> {
        self.content.exercise(id).await
    }
}
