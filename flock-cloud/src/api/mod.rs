//! API routes for flock-cloud

pub mod account_request;
pub mod admin;
pub mod checkin;
pub mod convert;
pub mod form_config;
pub mod health;
pub mod member;
pub mod public_form;

use axum::routing::{get, post, put};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{admin_auth_middleware, church_auth_middleware};
use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Church-facing API (church API-token authenticated)
    let tenant = Router::new()
        .route("/api/form-configurations", get(form_config::list))
        .route(
            "/api/form-configurations/{form_type}",
            put(form_config::save).delete(form_config::reset),
        )
        .route("/api/converts", get(convert::list).post(convert::create))
        .route(
            "/api/converts/{id}",
            get(convert::get_by_id)
                .put(convert::update)
                .delete(convert::delete),
        )
        .route(
            "/api/converts/{id}/check-ins",
            get(checkin::list).post(checkin::create),
        )
        .route(
            "/api/check-ins/{id}",
            put(checkin::update).delete(checkin::delete),
        )
        .route("/api/members", get(member::list).post(member::create))
        .route(
            "/api/members/{id}",
            get(member::get_by_id)
                .put(member::update)
                .delete(member::delete),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            church_auth_middleware,
        ));

    // Public intake forms + prospective-ministry sign-up (no auth)
    let public = Router::new()
        .route(
            "/api/public/forms/{church_id}/{form_type}",
            get(public_form::get_form),
        )
        .route(
            "/api/public/forms/{church_id}/{form_type}/submissions",
            post(public_form::submit),
        )
        .route("/api/account-requests", post(account_request::create));

    // Platform admin (ADMIN_TOKEN authenticated)
    let admin = Router::new()
        .route(
            "/api/admin/account-requests",
            get(admin::list_account_requests),
        )
        .route(
            "/api/admin/account-requests/{id}/approve",
            post(admin::approve_account_request),
        )
        .route(
            "/api/admin/account-requests/{id}/reject",
            post(admin::reject_account_request),
        )
        .route("/api/admin/churches", get(admin::list_churches))
        .route("/api/admin/churches/{id}/plan", put(admin::update_plan))
        .route("/api/admin/churches/{id}/status", put(admin::update_status))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(tenant)
        .merge(public)
        .merge(admin)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
