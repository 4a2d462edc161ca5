//! Registration and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kredit_auth::LoginInput;
use kredit_core::models::customer::Customer;

use crate::app::AppState;
use crate::dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::error::{ApiError, JsonBody};

pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let candidate = body.into_candidate()?;
    let customer = state.directory.register(candidate).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let output = state
        .auth
        .login(LoginInput {
            nik: body.nik,
            password: body.password,
        })
        .await?;
    Ok(Json(LoginResponse {
        token: output.token,
    }))
}
