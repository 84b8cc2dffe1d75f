//! Convert API handlers (church-scoped CRUD)

use axum::extract::{Extension, Path, State};
use axum::Json;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::{Convert, ConvertCreate, ConvertUpdate};
use shared::util::{now_millis, snowflake_id};

use crate::auth::ChurchIdentity;
use crate::db;
use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
) -> ServiceResult<Json<Vec<Convert>>> {
    let converts = db::converts::list(&state.pool, &identity.church_id).await?;
    Ok(Json(converts))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Path(id): Path<i64>,
) -> ServiceResult<Json<Convert>> {
    let convert = db::converts::find_by_id(&state.pool, &identity.church_id, id)
        .await?
        .ok_or_else(|| ServiceError::from(AppError::new(ErrorCode::ConvertNotFound)))?;
    Ok(Json(convert))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Json(payload): Json<ConvertCreate>,
) -> ServiceResult<Json<Convert>> {
    if payload.first_name.trim().is_empty() || payload.last_name.trim().is_empty() {
        return Err(AppError::validation("First and last name are required").into());
    }

    let id = snowflake_id();
    db::converts::create(&state.pool, &identity.church_id, id, &payload, now_millis()).await?;

    let convert = db::converts::find_by_id(&state.pool, &identity.church_id, id)
        .await?
        .ok_or_else(|| ServiceError::from(AppError::internal("Convert vanished after insert")))?;
    Ok(Json(convert))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Path(id): Path<i64>,
    Json(payload): Json<ConvertUpdate>,
) -> ServiceResult<Json<Convert>> {
    let updated =
        db::converts::update(&state.pool, &identity.church_id, id, &payload, now_millis()).await?;
    if updated == 0 {
        return Err(AppError::new(ErrorCode::ConvertNotFound).into());
    }

    let convert = db::converts::find_by_id(&state.pool, &identity.church_id, id)
        .await?
        .ok_or_else(|| ServiceError::from(AppError::new(ErrorCode::ConvertNotFound)))?;
    Ok(Json(convert))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Path(id): Path<i64>,
) -> ServiceResult<Json<ApiResponse<()>>> {
    let deleted = db::converts::delete(&state.pool, &identity.church_id, id).await?;
    if deleted == 0 {
        return Err(AppError::new(ErrorCode::ConvertNotFound).into());
    }
    Ok(Json(ApiResponse::ok()))
}
