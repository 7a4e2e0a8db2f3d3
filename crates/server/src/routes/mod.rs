use std::sync::Arc;

use axum::{
    extract::FromRef,
    http::{header, header::InvalidHeaderValue, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use shared::api::Object;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{content::ContentWriter, guidance::GuidanceProvider, AppState};

mod ping;
pub use ping::*;

mod guidance;
pub use guidance::*;

pub mod workout;

#[cfg(test)]
mod test_utils;

/// The api routes without any middleware
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Arc<dyn ContentWriter>: FromRef<S>,
    Arc<dyn GuidanceProvider>: FromRef<S>,
{
    Router::new()
        .route(Object::Ping.path(), get(ping))
        .route(Object::SaveWorkout.path(), post(workout::save_workout))
        .route(Object::DeleteWorkout.path(), post(workout::delete_workout))
        .route(Object::Guidance.path(), post(ai_guidance))
}

/// The full service: api routes plus cors, body limit and request tracing
pub fn app(state: AppState) -> Result<Router, InvalidHeaderValue> {
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_str(&state.args.cors_origin)?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Ok(router()
        .layer(RequestBodyLimitLayer::new(state.args.max_body_bytes))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state))
}
