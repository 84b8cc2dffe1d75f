//! Platform admin API handlers
//!
//! Account-request review (approve provisions the church and issues
//! its API token, returned exactly once) plus church plan/status
//! management.

use axum::extract::{Path, Query, State};
use axum::Json;
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::Deserialize;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::{AccountRequest, Church, ChurchStatus, Plan, RequestStatus};
use shared::util::now_millis;

use crate::db;
use crate::db::account_requests::AccountRequestRow;
use crate::db::churches::ChurchRow;
use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;

fn request_model(row: AccountRequestRow) -> Result<AccountRequest, ServiceError> {
    let status: RequestStatus = row
        .status
        .parse()
        .map_err(|_| AppError::internal("Corrupt account request status"))?;
    Ok(AccountRequest {
        id: row.id,
        ministry_name: row.ministry_name,
        contact_name: row.contact_name,
        contact_email: row.contact_email,
        message: row.message,
        status,
        created_at: row.created_at,
        decided_at: row.decided_at,
    })
}

fn church_model(row: ChurchRow) -> Result<Church, ServiceError> {
    let status: ChurchStatus = row
        .status
        .parse()
        .map_err(|_| AppError::internal("Corrupt church status"))?;
    let plan: Plan = row
        .plan
        .parse()
        .map_err(|_| AppError::internal("Corrupt church plan"))?;
    Ok(Church {
        id: row.id,
        name: row.name,
        contact_email: row.contact_email,
        status,
        plan,
        created_at: row.created_at,
    })
}

fn generate_api_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(48)
        .map(char::from)
        .collect()
}

// ── Account requests ──

#[derive(Debug, Deserialize)]
pub struct RequestFilter {
    pub status: Option<String>,
}

pub async fn list_account_requests(
    State(state): State<AppState>,
    Query(filter): Query<RequestFilter>,
) -> ServiceResult<Json<Vec<AccountRequest>>> {
    let status = match filter.status.as_deref() {
        Some(s) => Some(
            s.parse::<RequestStatus>()
                .map_err(|_| AppError::invalid_request(format!("Unknown status: {s}")))?,
        ),
        None => None,
    };

    let rows =
        db::account_requests::list(&state.pool, status.map(|s| s.as_str())).await?;
    rows.into_iter()
        .map(request_model)
        .collect::<Result<Vec<_>, _>>()
        .map(Json)
}

#[derive(Debug, Deserialize)]
pub struct ApprovePayload {
    /// Billing plan assigned at approval; defaults to starter
    pub plan: Option<String>,
}

pub async fn approve_account_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ApprovePayload>,
) -> ServiceResult<Json<ApiResponse<serde_json::Value>>> {
    let plan = match payload.plan.as_deref() {
        Some(p) => p
            .parse::<Plan>()
            .map_err(|_| AppError::with_message(ErrorCode::PlanInvalid, format!("Unknown plan: {p}")))?,
        None => Plan::Starter,
    };

    let request = db::account_requests::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            ServiceError::from(AppError::new(ErrorCode::AccountRequestNotFound))
        })?;

    if db::churches::email_exists(&state.pool, &request.contact_email).await? {
        return Err(AppError::new(ErrorCode::EmailAlreadyRegistered).into());
    }

    let church_id = uuid::Uuid::new_v4().to_string();
    let api_token = generate_api_token();

    let approved = db::account_requests::approve_and_provision(
        &state.pool,
        id,
        &church_id,
        &request.ministry_name,
        &request.contact_email,
        plan.as_str(),
        &api_token,
        now_millis(),
    )
    .await?;

    if !approved {
        return Err(AppError::new(ErrorCode::AccountRequestAlreadyDecided).into());
    }

    tracing::info!(request_id = id, church_id = %church_id, "Account request approved");

    // The API token is shown here and never again.
    Ok(Json(ApiResponse::success(serde_json::json!({
        "churchId": church_id,
        "apiToken": api_token,
        "plan": plan.as_str(),
    }))))
}

pub async fn reject_account_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ServiceResult<Json<ApiResponse<()>>> {
    let exists = db::account_requests::find_by_id(&state.pool, id)
        .await?
        .is_some();
    if !exists {
        return Err(AppError::new(ErrorCode::AccountRequestNotFound).into());
    }

    let decided =
        db::account_requests::decide(&state.pool, id, "rejected", now_millis()).await?;
    if !decided {
        return Err(AppError::new(ErrorCode::AccountRequestAlreadyDecided).into());
    }

    tracing::info!(request_id = id, "Account request rejected");

    Ok(Json(ApiResponse::ok()))
}

// ── Churches ──

pub async fn list_churches(
    State(state): State<AppState>,
) -> ServiceResult<Json<Vec<Church>>> {
    let rows = db::churches::list(&state.pool).await?;
    rows.into_iter()
        .map(church_model)
        .collect::<Result<Vec<_>, _>>()
        .map(Json)
}

#[derive(Debug, Deserialize)]
pub struct PlanPayload {
    pub plan: String,
}

pub async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PlanPayload>,
) -> ServiceResult<Json<ApiResponse<()>>> {
    let plan: Plan = payload.plan.parse().map_err(|_| {
        AppError::with_message(ErrorCode::PlanInvalid, format!("Unknown plan: {}", payload.plan))
    })?;

    let updated = db::churches::update_plan(&state.pool, &id, plan.as_str()).await?;
    if updated == 0 {
        return Err(AppError::new(ErrorCode::ChurchNotFound).into());
    }

    tracing::info!(church_id = %id, plan = plan.as_str(), "Church plan updated");

    Ok(Json(ApiResponse::ok()))
}

#[derive(Debug, Deserialize)]
pub struct StatusPayload {
    pub status: String,
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusPayload>,
) -> ServiceResult<Json<ApiResponse<()>>> {
    let status: ChurchStatus = payload
        .status
        .parse()
        .map_err(|_| AppError::invalid_request(format!("Unknown status: {}", payload.status)))?;

    let updated = db::churches::update_status(&state.pool, &id, status.as_str()).await?;
    if updated == 0 {
        return Err(AppError::new(ErrorCode::ChurchNotFound).into());
    }

    tracing::info!(church_id = %id, status = status.as_str(), "Church status updated");

    Ok(Json(ApiResponse::ok()))
}
