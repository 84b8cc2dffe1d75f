//! Follow-up check-in API handlers
//!
//! Check-ins hang off a convert: list/create are nested under
//! /api/converts/{id}/check-ins, update/delete address the check-in
//! directly.

use axum::extract::{Extension, Path, State};
use axum::Json;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::{CheckIn, CheckInCreate, CheckInUpdate};
use shared::util::{now_millis, snowflake_id};

use crate::auth::ChurchIdentity;
use crate::db;
use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;

const METHODS: [&str; 4] = ["call", "visit", "text", "email"];

fn check_method(method: &str) -> Result<(), ServiceError> {
    if METHODS.contains(&method) {
        Ok(())
    } else {
        Err(AppError::invalid_request(format!("Unknown check-in method: {method}")).into())
    }
}

async fn require_convert(
    state: &AppState,
    church_id: &str,
    convert_id: i64,
) -> Result<(), ServiceError> {
    db::converts::find_by_id(&state.pool, church_id, convert_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::new(ErrorCode::ConvertNotFound).into())
}

pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Path(convert_id): Path<i64>,
) -> ServiceResult<Json<Vec<CheckIn>>> {
    require_convert(&state, &identity.church_id, convert_id).await?;

    let check_ins =
        db::checkins::list_for_convert(&state.pool, &identity.church_id, convert_id).await?;
    Ok(Json(check_ins))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Path(convert_id): Path<i64>,
    Json(payload): Json<CheckInCreate>,
) -> ServiceResult<Json<CheckIn>> {
    check_method(&payload.method)?;
    require_convert(&state, &identity.church_id, convert_id).await?;

    let id = snowflake_id();
    db::checkins::create(
        &state.pool,
        &identity.church_id,
        id,
        convert_id,
        &payload,
        now_millis(),
    )
    .await?;

    let check_in = db::checkins::find_by_id(&state.pool, &identity.church_id, id)
        .await?
        .ok_or_else(|| ServiceError::from(AppError::internal("Check-in vanished after insert")))?;
    Ok(Json(check_in))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Path(id): Path<i64>,
    Json(payload): Json<CheckInUpdate>,
) -> ServiceResult<Json<CheckIn>> {
    if let Some(method) = &payload.method {
        check_method(method)?;
    }

    let updated =
        db::checkins::update(&state.pool, &identity.church_id, id, &payload, now_millis()).await?;
    if updated == 0 {
        return Err(AppError::new(ErrorCode::CheckInNotFound).into());
    }

    let check_in = db::checkins::find_by_id(&state.pool, &identity.church_id, id)
        .await?
        .ok_or_else(|| ServiceError::from(AppError::new(ErrorCode::CheckInNotFound)))?;
    Ok(Json(check_in))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Path(id): Path<i64>,
) -> ServiceResult<Json<ApiResponse<()>>> {
    let deleted = db::checkins::delete(&state.pool, &identity.church_id, id).await?;
    if deleted == 0 {
        return Err(AppError::new(ErrorCode::CheckInNotFound).into());
    }
    Ok(Json(ApiResponse::ok()))
}
