//! Form configuration API handlers
//!
//! GET    /api/form-configurations             — all stored overrides for the church
//! PUT    /api/form-configurations/{form_type} — upsert, stored verbatim
//! DELETE /api/form-configurations/{form_type} — reset to defaults

use axum::extract::{Extension, Path, State};
use axum::Json;
use shared::error::{ApiResponse, AppError};
use shared::forms::{FormConfig, FormType, validate_config};
use shared::util::now_millis;

use crate::auth::ChurchIdentity;
use crate::db;
use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;

pub(crate) fn parse_form_type(s: &str) -> Result<FormType, ServiceError> {
    s.parse()
        .map_err(|_| AppError::invalid_request(format!("Unknown form type: {s}")).into())
}

pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
) -> ServiceResult<Json<Vec<FormConfig>>> {
    let configs = db::form_configs::list(&state.pool, &identity.church_id).await?;
    Ok(Json(configs))
}

pub async fn save(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Path(form_type): Path<String>,
    Json(mut config): Json<FormConfig>,
) -> ServiceResult<Json<FormConfig>> {
    let form_type = parse_form_type(&form_type)?;

    // The path segment is authoritative; the body echoing a different
    // form type would otherwise clobber another form's row.
    config.form_type = form_type;

    validate_config(&config)?;

    db::form_configs::upsert(&state.pool, &identity.church_id, &config, now_millis()).await?;

    tracing::info!(
        church_id = %identity.church_id,
        form_type = %form_type,
        "Form configuration saved"
    );

    Ok(Json(config))
}

pub async fn reset(
    State(state): State<AppState>,
    Extension(identity): Extension<ChurchIdentity>,
    Path(form_type): Path<String>,
) -> ServiceResult<Json<ApiResponse<()>>> {
    let form_type = parse_form_type(&form_type)?;

    db::form_configs::delete(&state.pool, &identity.church_id, form_type).await?;

    tracing::info!(
        church_id = %identity.church_id,
        form_type = %form_type,
        "Form configuration reset to defaults"
    );

    Ok(Json(ApiResponse::ok()))
}
