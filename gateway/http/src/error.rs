use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gateway_application::ApplicationError;
use gateway_domain::DomainError;
use serde_json::json;

#[derive(Debug)]
pub enum HttpError {
    Validation { message: String },
    PayloadTooLarge { message: String },
    NotFound,
    Upstream { status: StatusCode, message: String },
    Internal { message: String },
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            HttpError::PayloadTooLarge { message } => (StatusCode::PAYLOAD_TOO_LARGE, message),
            HttpError::NotFound => (StatusCode::NOT_FOUND, "File not found".to_string()),
            HttpError::Upstream { status, message } => (status, message),
            HttpError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {message}"),
            ),
        };

        (
            status,
            Json(json!({
                "error": message,
            })),
        )
            .into_response()
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
        DomainError::InvalidVoiceType(_) => HttpError::Validation {
            message: domain.to_string(),
        },
        DomainError::NotFound => HttpError::NotFound,
        DomainError::Downstream { status, message } => HttpError::Upstream {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            message,
        },
        DomainError::Transport(_) | DomainError::Storage(_) => HttpError::Internal {
            message: domain.to_string(),
        },
    }
}
