//! Session endpoints

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::user::{LoginRequest, SessionUser},
};

/// Log in, replacing the current session unconditionally
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session replaced", body = SessionUser),
        (status = 400, description = "Invalid email format")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<SessionUser>> {
    request.validate()?;

    let user = state.services.session.login(request.into());
    Ok(Json(user))
}

/// Log out, clearing the session. Idempotent.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 204, description = "Session cleared")
    )
)]
pub async fn logout(State(state): State<crate::AppState>) -> StatusCode {
    state.services.session.logout();
    StatusCode::NO_CONTENT
}

/// Current session user (`null` when no session is active)
#[utoipa::path(
    get,
    path = "/user",
    tag = "auth",
    responses(
        (status = 200, description = "Current session user, or null when no session is active", body = SessionUser)
    )
)]
pub async fn current_user(State(state): State<crate::AppState>) -> Json<Option<SessionUser>> {
    Json(state.services.session.current_user())
}
