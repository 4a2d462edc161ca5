//! Credit limits and transaction admission. Both require a session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use kredit_auth::SessionClaims;
use kredit_core::models::limit::{CreateLimit, Limit};
use kredit_core::models::transaction::{CreateTransaction, Transaction};
use tracing::debug;

use crate::app::AppState;
use crate::error::{ApiError, JsonBody};

pub async fn create_limit(
    State(state): State<AppState>,
    Extension(session): Extension<SessionClaims>,
    JsonBody(body): JsonBody<CreateLimit>,
) -> Result<(StatusCode, Json<Limit>), ApiError> {
    debug!(nik = %session.nik, customer_id = body.customer_id, "create limit");
    let limit = state.ledger.create_limit(body).await?;
    Ok((StatusCode::CREATED, Json(limit)))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Extension(session): Extension<SessionClaims>,
    JsonBody(body): JsonBody<CreateTransaction>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    debug!(nik = %session.nik, customer_id = body.customer_id, "create transaction");
    let transaction = state.admission.admit(body).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}
