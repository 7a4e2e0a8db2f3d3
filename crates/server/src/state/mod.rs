use std::sync::Arc;

use axum::extract::FromRef;

mod content_store;
pub use content_store::*;

mod language_model;
pub use language_model::*;

use crate::{
    cli::Cli,
    content::{ContentWriter, HttpContentWriter},
    guidance::{ChatCompletionsProvider, GuidanceProvider},
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub args: Arc<Cli>,
    pub content: Arc<dyn ContentWriter>,
    pub guidance: Arc<dyn GuidanceProvider>,
}

impl AppState {
    /// State backed by the hosted services named in `args`
    pub fn from_args(args: Arc<Cli>) -> Self {
        let content = HttpContentWriter::new(args.content_api(), &args.content_api_token);
        let guidance =
            ChatCompletionsProvider::new(&args.llm_base_url, &args.llm_api_key, &args.llm_model);
        Self { args, content: Arc::new(content), guidance: Arc::new(guidance) }
    }
}

impl FromRef<AppState> for Arc<dyn ContentWriter> {
    fn from_ref(state: &AppState) -> Self {
        state.content.clone()
    }
}

impl FromRef<AppState> for Arc<dyn GuidanceProvider> {
    fn from_ref(state: &AppState) -> Self {
        state.guidance.clone()
    }
}
