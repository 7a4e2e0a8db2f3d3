use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::{error, instrument};

use crate::ClientError;

/// Shown in place of the guidance text when fetching it fails
pub const GUIDANCE_ERROR_PLACEHOLDER: &str =
    "Sorry, there was an error getting ai guidance. Please try again.";

#[async_trait]
pub trait GuidanceSource: Send + Sync {
    /// Markdown instructions for the exercise
    async fn fetch_guidance(&self, exercise_name: &str) -> Result<String, ClientError>;
}

/// Resets the loading flag however the request ends
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Asks for guidance on behalf of the exercise detail screen, one request at a time
pub struct GuidanceRequester<G> {
    source: G,
    loading: AtomicBool,
}

impl<G: GuidanceSource> GuidanceRequester<G> {
    pub fn new(source: G) -> Self {
        Self { source, loading: AtomicBool::new(false) }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// `None` when a request is already running
    ///
    /// Failures are logged and come back as [GUIDANCE_ERROR_PLACEHOLDER].
    #[instrument(skip(self))]
    pub async fn request(&self, exercise_name: &str) -> Option<String> {
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }
        let _guard = LoadingGuard(&self.loading);

        match self.source.fetch_guidance(exercise_name).await {
            Ok(text) => Some(text),
            Err(e) => {
                error!("Error fetching ai guidance: {e}");
                Some(GUIDANCE_ERROR_PLACEHOLDER.to_owned())
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::FakeServer;

    #[test]
    fn test_guidance_text() {
        let server = FakeServer::default();
        let requester = GuidanceRequester::new(server.clone());

        let text = tokio_test::block_on(requester.request("Plank"));

        assert_eq!(text.as_deref(), Some("## Equipment\nNone for Plank"));
        assert!(!requester.is_loading());
        assert_eq!(server.guidance_requests(), 1);
    }

    #[test]
    fn test_failure_shows_placeholder() {
        let requester = GuidanceRequester::new(FakeServer::failing());

        let text = tokio_test::block_on(requester.request("Plank"));

        assert_eq!(text.as_deref(), Some(GUIDANCE_ERROR_PLACEHOLDER));
        assert!(!requester.is_loading());
    }

    #[tokio::test]
    async fn test_one_request_at_a_time() {
        let server = FakeServer::default();
        let requester = GuidanceRequester::new(server.clone());

        let (first, second) =
            tokio::join!(requester.request("Plank"), requester.request("Plank"));

        assert_eq!([first.is_some(), second.is_some()].iter().filter(|s| **s).count(), 1);
        assert_eq!(server.guidance_requests(), 1);
    }
}
