//! Member API handlers (church-scoped CRUD)

use axum::extract::{Extension, Path, State};
use axum::Json;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::{Member, MemberCreate, MemberUpdate};
use shared::util::{now_millis, snowflake_id};

use crate::auth::ChurchIdentity;
use crate::db;
use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
) -> ServiceResult<Json<Vec<Member>>> {
    let members = db::members::list(&state.pool, &identity.church_id).await?;
    Ok(Json(members))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Path(id): Path<i64>,
) -> ServiceResult<Json<Member>> {
    let member = db::members::find_by_id(&state.pool, &identity.church_id, id)
        .await?
        .ok_or_else(|| ServiceError::from(AppError::new(ErrorCode::MemberNotFound)))?;
    Ok(Json(member))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Json(payload): Json<MemberCreate>,
) -> ServiceResult<Json<Member>> {
    if payload.first_name.trim().is_empty() || payload.last_name.trim().is_empty() {
        return Err(AppError::validation("First and last name are required").into());
    }

    let id = snowflake_id();
    db::members::create(&state.pool, &identity.church_id, id, &payload, now_millis()).await?;

    let member = db::members::find_by_id(&state.pool, &identity.church_id, id)
        .await?
        .ok_or_else(|| ServiceError::from(AppError::internal("Member vanished after insert")))?;
    Ok(Json(member))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Path(id): Path<i64>,
    Json(payload): Json<MemberUpdate>,
) -> ServiceResult<Json<Member>> {
    let updated =
        db::members::update(&state.pool, &identity.church_id, id, &payload, now_millis()).await?;
    if updated == 0 {
        return Err(AppError::new(ErrorCode::MemberNotFound).into());
    }

    let member = db::members::find_by_id(&state.pool, &identity.church_id, id)
        .await?
        .ok_or_else(|| ServiceError::from(AppError::new(ErrorCode::MemberNotFound)))?;
    Ok(Json(member))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Path(id): Path<i64>,
) -> ServiceResult<Json<ApiResponse<()>>> {
    let deleted = db::members::delete(&state.pool, &identity.church_id, id).await?;
    if deleted == 0 {
        return Err(AppError::new(ErrorCode::MemberNotFound).into());
    }
    Ok(Json(ApiResponse::ok()))
}
