//! Bearer-token authentication for protected routes.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use kredit_core::error::KreditError;
use tracing::warn;

use crate::app::AppState;
use crate::error::ApiError;

/// Validate the `Authorization: Bearer` header and attach the
/// [`SessionClaims`](kredit_auth::SessionClaims) to the request.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = match req.headers().get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| KreditError::AuthenticationFailed {
            reason: "authorization header is not valid text".into(),
        })?),
        None => None,
    };

    let claims = state
        .auth
        .authenticate(header, Utc::now())
        .inspect_err(|e| warn!(error = %e, path = %req.uri().path(), "rejected unauthenticated request"))?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
