use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    /// Anything the schema doesn't list
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    pub const fn text(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Unknown => "Unknown",
        }
    }
}

/// Display text for an optional difficulty
pub fn difficulty_text(difficulty: Option<Difficulty>) -> &'static str {
    difficulty.map_or("Unknown", |d| d.text())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(rename = "_ref")]
    pub asset_ref: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseImage {
    pub asset: Option<ImageAsset>,
    /// Alt text, the field name is spelled this way in the content schema
    #[serde(default, rename = "atl")]
    pub alt: Option<String>,
}

/// A catalog entry, owned by the content backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub image: Option<ExerciseImage>,
    #[serde(default)]
    pub video_url: Option<String>,
    /// Not used to filter anything yet
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// The dereferenced exercise inside a saved workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
