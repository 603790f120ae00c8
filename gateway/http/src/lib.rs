use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::{error_mapper, HttpError};
pub use handlers::*;
pub use state::AppState;

/// Multipart framing on top of the largest accepted file.
const MULTIPART_OVERHEAD_BYTES: u64 = 1024 * 1024;

pub fn create_app_routes(state: AppState, max_upload_bytes: u64) -> Router {
    let body_limit = usize::try_from(max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES))
        .unwrap_or(usize::MAX);
    let media_route = post(media_to_text).layer(DefaultBodyLimit::max(body_limit));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/media-to-text", media_route)
        .route("/api/v1/text-to-audio", post(text_to_audio))
        .route("/api/v1/download/{job_id}", get(download))
        .route("/api/v1/status/{job_id}", get(job_status))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
