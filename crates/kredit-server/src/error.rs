//! HTTP error responses.

use axum::Json;
use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kredit_core::error::KreditError;
use serde_json::json;
use tracing::error;

/// A [`KreditError`] on its way out as a JSON error body.
#[derive(Debug)]
pub struct ApiError(pub KreditError);

impl From<KreditError> for ApiError {
    fn from(err: KreditError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(KreditError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.is_server_error() {
            error!(error = %err, "request failed");
            return json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal server error",
            );
        }

        let (status, code) = match &err {
            KreditError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            KreditError::LimitExceeded { .. } => (StatusCode::BAD_REQUEST, "limit_exceeded"),
            KreditError::AlreadyExists { .. } => (StatusCode::CONFLICT, "conflict"),
            KreditError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            KreditError::AuthenticationFailed { .. } => (StatusCode::UNAUTHORIZED, "unauthorized"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };
        json_error(status, code, err.to_string())
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// `Json` extractor whose rejections use the JSON error body.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
