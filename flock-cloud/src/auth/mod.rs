//! Authentication middleware
//!
//! Two identities, both carried as opaque bearer tokens (no
//! login/session flow):
//! - church API token, issued when a platform admin approves an
//!   account request, resolved against the churches table;
//! - platform admin token, compared to the configured `ADMIN_TOKEN`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::error::AppError;
use shared::models::ChurchStatus;

use crate::db;
use crate::state::AppState;

/// Authenticated church identity, attached as a request extension
#[derive(Debug, Clone)]
pub struct ChurchIdentity {
    pub church_id: String,
    pub name: String,
}

fn bearer_token(request: &Request) -> Result<&str, Response> {
    let header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::not_authenticated().into_response())?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::invalid_token("Invalid Authorization format").into_response())
}

/// Middleware that resolves a church API token from the Authorization header
pub async fn church_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = bearer_token(&request)?;

    let church = db::churches::find_by_token(&state.pool, token)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Token lookup failed");
            AppError::internal("Token lookup failed").into_response()
        })?
        .ok_or_else(|| AppError::invalid_token("Unknown API token").into_response())?;

    if church.status.parse::<ChurchStatus>() != Ok(ChurchStatus::Active) {
        return Err(
            AppError::new(shared::error::ErrorCode::ChurchSuspended).into_response()
        );
    }

    let identity = ChurchIdentity {
        church_id: church.id,
        name: church.name,
    };
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Middleware that gates the platform admin API behind `ADMIN_TOKEN`
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = bearer_token(&request)?;

    if token != state.admin_token {
        return Err(
            AppError::new(shared::error::ErrorCode::AdminRequired).into_response()
        );
    }

    Ok(next.run(request).await)
}
