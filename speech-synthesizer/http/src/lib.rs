use axum::{
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

pub const SERVICE_NAME: &str = "text-to-speech";

pub fn create_app_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generate-speech", post(generate_speech))
        .route("/download/{job_id}/{filename}", get(download))
        .route("/files/{job_id}", get(files))
        .route("/supported-languages", get(supported_languages))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
