//! Public ministry sign-up handler
//!
//! POST /api/account-requests — prospective ministry applies for an
//! account; a platform admin approves or rejects from the admin API.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::util::{now_millis, snowflake_id};
use validator::Validate;

use crate::db;
use crate::error::ServiceResult;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct AccountRequestPayload {
    #[validate(length(min = 1, max = 200))]
    pub ministry_name: String,
    #[validate(length(min = 1, max = 200))]
    pub contact_name: String,
    #[validate(email)]
    pub contact_email: String,
    #[validate(length(max = 2000))]
    pub message: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<AccountRequestPayload>,
) -> ServiceResult<Json<ApiResponse<serde_json::Value>>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let email = payload.contact_email.trim().to_lowercase();

    if db::churches::email_exists(&state.pool, &email).await? {
        return Err(AppError::new(ErrorCode::EmailAlreadyRegistered).into());
    }
    if db::account_requests::pending_exists_for_email(&state.pool, &email).await? {
        return Err(AppError::already_exists("Account request").into());
    }

    let id = snowflake_id();
    db::account_requests::create(
        &state.pool,
        id,
        payload.ministry_name.trim(),
        payload.contact_name.trim(),
        &email,
        payload.message.as_deref(),
        now_millis(),
    )
    .await?;

    tracing::info!(request_id = id, "Account request received");

    Ok(Json(ApiResponse::success(
        serde_json::json!({ "id": id.to_string() }),
    )))
}
