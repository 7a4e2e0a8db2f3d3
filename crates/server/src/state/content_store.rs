use std::{ops::Deref, sync::Arc};

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};

use crate::content::ContentWriter;

/// Handler access to the content backend writer
#[derive(Debug)]
pub struct ContentStore(Arc<dyn ContentWriter>);

impl From<Arc<dyn ContentWriter>> for ContentStore {
    fn from(writer: Arc<dyn ContentWriter>) -> Self {
        ContentStore(writer)
    }
}

impl Deref for ContentStore {
    type Target = Arc<dyn ContentWriter>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ContentStore
where
    S: Send + Sync,
    Arc<dyn ContentWriter>: FromRef<S>,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(<Arc<dyn ContentWriter>>::from_ref(state).into())
    }
}
