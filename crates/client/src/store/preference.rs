use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde::{Deserialize, Serialize};
use shared::model::WeightUnit;
use thiserror::Error;

/// The only state that outlives a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub weight_unit: WeightUnit,
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Preference file io error: {0}")]
    Io(#[from] io::Error),
    #[error("Preference file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait PreferenceStore {
    /// `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<Preferences>, PreferenceError>;
    fn save(&self, preferences: &Preferences) -> Result<(), PreferenceError>;
}

/// Preferences as a small json file
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<Preferences>, PreferenceError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, preferences: &Preferences) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(preferences)?)?;
        Ok(())
    }
}

/// Keeps preferences for the life of the process only
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    saved: Mutex<Option<Preferences>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<Preferences>, PreferenceError> {
        Ok(*self.saved.lock().unwrap_or_else(|e| e.into_inner()))
    }

    fn save(&self, preferences: &Preferences) -> Result<(), PreferenceError> {
        *self.saved.lock().unwrap_or_else(|e| e.into_inner()) = Some(*preferences);
        Ok(())
    }
}
