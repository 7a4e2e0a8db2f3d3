//! Fakes for the network seams

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use shared::model::{Exercise, ExerciseSummary, NewWorkout, UserId, Workout};

use crate::{
    content::ContentReader, guidance::GuidanceSource, history::WorkoutRemover,
    submit::WorkoutSubmitter, ClientError,
};

fn unavailable() -> ClientError {
    ClientError::Request { message: "connection refused".to_owned() }
}

pub fn exercise(id: &str, name: &str) -> Exercise {
    Exercise {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
        difficulty: None,
        image: None,
        video_url: None,
        is_active: Some(true),
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeContent {
    exercises: Vec<Exercise>,
    workouts: Vec<(UserId, Workout)>,
    fail: bool,
    name_lookups: Arc<AtomicUsize>,
}

impl FakeContent {
    pub fn with_exercises(exercises: &[(&str, &str)]) -> Self {
        Self {
            exercises: exercises.iter().map(|(id, name)| exercise(id, name)).collect(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    pub fn with_workout(mut self, user_id: &str, workout: Workout) -> Self {
        self.workouts.push((UserId::from(user_id), workout));
        self
    }

    pub fn name_lookups(&self) -> usize {
        self.name_lookups.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ClientError> {
        if self.fail {
            Err(unavailable())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ContentReader for FakeContent {
    async fn exercises(&self) -> Result<Vec<Exercise>, ClientError> {
        self.check()?;
        Ok(self.exercises.clone())
    }

    async fn exercise(&self, id: &str) -> Result<Option<Exercise>, ClientError> {
        self.check()?;
        Ok(self.exercises.iter().find(|e| e.id == id).cloned())
    }

    async fn exercise_by_name(&self, name: &str) -> Result<Option<ExerciseSummary>, ClientError> {
        self.name_lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.exercises.iter().find(|e| e.name == name).map(|e| ExerciseSummary {
            id: e.id.clone(),
            name: e.name.clone(),
            description: e.description.clone(),
        }))
    }

    async fn workouts_for_user(&self, user_id: &UserId) -> Result<Vec<Workout>, ClientError> {
        self.check()?;
        let mut workouts: Vec<Workout> = self
            .workouts
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .map(|(_, w)| w.clone())
            .collect();
        workouts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(workouts)
    }

    async fn workout(&self, id: &str) -> Result<Option<Workout>, ClientError> {
        self.check()?;
        Ok(self.workouts.iter().map(|(_, w)| w).find(|w| w.id == id).cloned())
    }
}

/// Stands in for the first party server
#[derive(Debug, Clone, Default)]
pub struct FakeServer {
    fail: bool,
    saved: Arc<Mutex<Vec<NewWorkout>>>,
    removed: Arc<Mutex<Vec<String>>>,
    guidance_requests: Arc<AtomicUsize>,
}

impl FakeServer {
    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    pub fn saved(&self) -> Vec<NewWorkout> {
        self.saved.lock().unwrap().clone()
    }

    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }

    pub fn guidance_requests(&self) -> usize {
        self.guidance_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorkoutSubmitter for FakeServer {
    async fn submit(&self, workout: &NewWorkout) -> Result<String, ClientError> {
        // Stay in flight for a poll so overlapping calls can be observed
        tokio::task::yield_now().await;
        if self.fail {
            return Err(unavailable());
        }
        let mut saved = self.saved.lock().unwrap();
        saved.push(workout.clone());
        Ok(format!("workout-{}", saved.len()))
    }
}

#[async_trait]
impl WorkoutRemover for FakeServer {
    async fn remove(&self, workout_id: &str) -> Result<(), ClientError> {
        if self.fail {
            return Err(unavailable());
        }
        self.removed.lock().unwrap().push(workout_id.to_owned());
        Ok(())
    }
}

#[async_trait]
impl GuidanceSource for FakeServer {
    async fn fetch_guidance(&self, exercise_name: &str) -> Result<String, ClientError> {
        self.guidance_requests.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        if self.fail {
            return Err(ClientError::Server {
                status: 500,
                message: "Error fetching ai guidance".to_owned(),
            });
        }
        Ok(format!("## Equipment\nNone for {exercise_name}"))
    }
}
