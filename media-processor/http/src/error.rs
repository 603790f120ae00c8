use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use media_application::ApplicationError;
use media_domain::DomainError;
use serde_json::json;

#[derive(Debug)]
pub enum HttpError {
    Validation { message: String },
    PayloadTooLarge { message: String },
    Internal { message: String },
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            HttpError::PayloadTooLarge { message } => (StatusCode::PAYLOAD_TOO_LARGE, message),
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

impl From<MultipartError> for HttpError {
    fn from(error: MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            HttpError::PayloadTooLarge {
                message: error.body_text(),
            }
        } else {
            HttpError::Validation {
                message: error.body_text(),
            }
        }
    }
}

pub fn error_mapper(error: ApplicationError) -> HttpError {
    let ApplicationError::Domain(domain) = error;
    match domain {
        DomainError::PayloadTooLarge { .. } => HttpError::PayloadTooLarge {
            message: domain.to_string(),
        },
        DomainError::InvalidInput(message) => HttpError::Validation { message },
        DomainError::Transcode(message) => HttpError::Internal { message },
        DomainError::Transcription(_)
        | DomainError::Probe(_)
        | DomainError::Storage(_)
        | DomainError::Internal(_) => HttpError::Internal {
            message: format!("Media processing failed: {domain}"),
        },
    }
}
