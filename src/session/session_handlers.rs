use axum::{extract::State, Json};

use super::session_service::SessionStatus;
use crate::{error::Result, state::AppState};

/// Current session state
#[utoipa::path(
    get,
    path = "/api/session",
    responses((status = 200, description = "Session state", body = SessionStatus)),
    tag = "session"
)]
pub async fn get_session(State(state): State<AppState>) -> Json<SessionStatus> {
    Json(state.session_service.status().await)
}

/// Start a session: seeds the notification feed and starts reminder polling
#[utoipa::path(
    post,
    path = "/api/session/login",
    responses(
        (status = 200, description = "Session started", body = SessionStatus),
        (status = 409, description = "Session already active")
    ),
    tag = "session"
)]
pub async fn login(State(state): State<AppState>) -> Result<Json<SessionStatus>> {
    Ok(Json(state.session_service.login().await?))
}

/// End the session: stops reminder polling
#[utoipa::path(
    post,
    path = "/api/session/logout",
    responses(
        (status = 200, description = "Session ended", body = SessionStatus),
        (status = 409, description = "No active session")
    ),
    tag = "session"
)]
pub async fn logout(State(state): State<AppState>) -> Result<Json<SessionStatus>> {
    Ok(Json(state.session_service.logout().await?))
}
