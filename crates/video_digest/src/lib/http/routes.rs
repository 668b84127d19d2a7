use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use super::{handlers, state::AppState};
use crate::{cloud::CloudRenderer, yt::VideoSource, Summarizer};

/// Create the HTTP router with all routes
pub fn create_router<V, S, R>(state: AppState<V, S, R>) -> Router
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    R: CloudRenderer + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(handlers::home).fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::method_not_allowed),
        )
        .route(
            "/analyze-youtube",
            get(handlers::analyze_usage)
                .post(handlers::analyze_youtube::<V, S, R>)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/transcript-only/:video_id",
            get(handlers::transcript_only::<V, S, R>).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
