use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use speech_application::ApplicationError;
use speech_domain::DomainError;

#[derive(Debug)]
pub enum HttpError {
    Validation { message: String },
    NotFound,
    Internal { message: String },
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            HttpError::NotFound => (StatusCode::NOT_FOUND, "File not found".to_string()),
            HttpError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ApplicationError> for HttpError {
    fn from(error: ApplicationError) -> Self {
        error_mapper(error)
    }
}

pub fn error_mapper(error: ApplicationError) -> HttpError {
    let ApplicationError::Domain(domain) = error;
    match domain {
        DomainError::InvalidVoiceType(_) | DomainError::TextTooLong { .. } | DomainError::EmptyText => {
            HttpError::Validation {
                message: domain.to_string(),
            }
        }
        DomainError::NotFound => HttpError::NotFound,
        DomainError::Synthesis(_) => HttpError::Internal {
            message: format!("Speech generation failed: {domain}"),
        },
        DomainError::Storage(_) => HttpError::Internal {
            message: domain.to_string(),
        },
    }
}
