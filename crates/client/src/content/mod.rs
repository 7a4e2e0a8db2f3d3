//! Reads from the hosted content backend

use async_trait::async_trait;
use shared::{
    api::content::ContentApiConfig,
    model::{Exercise, ExerciseSummary, ImageAsset, UserId, Workout},
};

use crate::ClientError;

mod http_reader;
pub use http_reader::*;

pub mod queries;

const IMAGE_CDN: &str = "https://cdn.sanity.io/images";

#[async_trait]
pub trait ContentReader: Send + Sync {
    async fn exercises(&self) -> Result<Vec<Exercise>, ClientError>;

    async fn exercise(&self, id: &str) -> Result<Option<Exercise>, ClientError>;

    /// Exact, case sensitive match
    async fn exercise_by_name(&self, name: &str) -> Result<Option<ExerciseSummary>, ClientError>;

    /// Newest first
    async fn workouts_for_user(&self, user_id: &UserId) -> Result<Vec<Workout>, ClientError>;

    async fn workout(&self, id: &str) -> Result<Option<Workout>, ClientError>;
}

/// CDN url for an image asset ref shaped `image-<id>-<w>x<h>-<ext>`
pub fn image_url(config: &ContentApiConfig, asset: &ImageAsset) -> Option<String> {
    let rest = asset.asset_ref.strip_prefix("image-")?;
    let (rest, extension) = rest.rsplit_once('-')?;
    let (id, dimensions) = rest.rsplit_once('-')?;
    let (width, height) = dimensions.split_once('x')?;
    if id.is_empty()
        || extension.is_empty()
        || width.parse::<u32>().is_err()
        || height.parse::<u32>().is_err()
    {
        return None;
    }

    Some(format!(
        "{IMAGE_CDN}/{}/{}/{id}-{dimensions}.{extension}",
        config.project_id, config.dataset
    ))
}
