use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::{Validate, ValidationErrors};

/// JSON body that has passed `validator` checks.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[derive(Debug)]
pub enum ValidationRejection {
    Json(JsonRejection),
    Invalid(ValidationErrors),
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidationRejection::Json)?;
        value.validate().map_err(ValidationRejection::Invalid)?;
        Ok(Self(value))
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ValidationRejection::Json(rejection) => (rejection.status(), rejection.body_text()),
            ValidationRejection::Invalid(errors) => {
                (StatusCode::BAD_REQUEST, flatten_messages(&errors))
            }
        };
        tracing::debug!(status = %status, error = %message, "request body rejected");

        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn flatten_messages(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid ({})", err.code),
            })
        })
        .collect::<Vec<_>>();
    messages.sort();
    messages.join("; ")
}
