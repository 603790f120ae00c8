use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::{error_mapper, HttpError};
pub use handlers::*;
pub use state::AppState;

pub const SERVICE_NAME: &str = "media-processor";

/// Room for the multipart framing and text fields around the file part.
const MULTIPART_OVERHEAD_BYTES: u64 = 1024 * 1024;

pub fn create_app_routes(state: AppState, max_upload_bytes: u64) -> Router {
    let body_limit = usize::try_from(max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES))
        .unwrap_or(usize::MAX);
    let process_route = post(process_media).layer(DefaultBodyLimit::max(body_limit));

    Router::new()
        .route("/health", get(health))
        .route("/process-media", process_route)
        .route("/supported-formats", get(supported_formats))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
