use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use storage::{
    dto::auth::{LoginRequest, SessionResponse},
    services::password::verify_password,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::{
    current_session, expired_session_cookie, session_cookie, session_id_from_headers,
};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = SessionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid email or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!("Unreadable login request: {}", rejection.body_text());
        WebError::InvalidCredentials
    })?;
    req.validate()?;

    let admin = state
        .admins
        .find_admin_by_email(&req.email)
        .await?
        .filter(|admin| verify_password(&req.password, &admin.password_hash));

    let Some(admin) = admin else {
        tracing::warn!("Failed admin login attempt");
        return Err(WebError::InvalidCredentials);
    };

    let session = state.sessions.create(admin.admin_id, &admin.email).await;
    tracing::info!(admin = %admin.email, "Admin logged in");

    let cookie = session_cookie(session.session_id, state.sessions.ttl(), state.secure_cookies);
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse::admin(admin.admin_id, admin.email)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current login state", body = SessionResponse)
    ),
    tag = "auth"
)]
pub async fn get_session(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let response = match current_session(&state, &headers).await {
        Some(session) => SessionResponse::admin(session.admin_id, session.email),
        None => SessionResponse::anonymous(),
    };

    Json(response).into_response()
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session destroyed, cookie cleared", body = SessionResponse)
    ),
    tag = "auth"
)]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(session_id) = session_id_from_headers(&headers) {
        state.sessions.destroy(session_id).await;
    }

    (
        [(header::SET_COOKIE, expired_session_cookie(state.secure_cookies))],
        Json(SessionResponse::anonymous()),
    )
        .into_response()
}
