use std::{ops::Deref, sync::Arc};

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};

use crate::guidance::GuidanceProvider;

/// Handler access to the language model
#[derive(Debug)]
pub struct LanguageModel(Arc<dyn GuidanceProvider>);

impl From<Arc<dyn GuidanceProvider>> for LanguageModel {
    fn from(provider: Arc<dyn GuidanceProvider>) -> Self {
        LanguageModel(provider)
    }
}

impl Deref for LanguageModel {
    type Target = Arc<dyn GuidanceProvider>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for LanguageModel
where
    S: Send + Sync,
    Arc<dyn GuidanceProvider>: FromRef<S>,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(<Arc<dyn GuidanceProvider>>::from_ref(state).into())
    }
}
