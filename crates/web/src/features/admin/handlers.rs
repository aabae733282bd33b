use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::rider::{AdminPanelResponse, CreateRiderRequest},
    models::Rider,
};

use crate::error::WebError;
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/riders",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "All riders ordered by rider id", body = AdminPanelResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Riders could not be loaded", body = AdminPanelResponse)
    ),
    tag = "admin"
)]
pub async fn list_riders(State(state): State<AppState>) -> Response {
    match state.riders.find_all().await {
        Ok(riders) => Json(AdminPanelResponse::listing(riders)).into_response(),
        Err(e) => {
            tracing::error!("Failed to load riders: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AdminPanelResponse::failure(Vec::new(), "Failed to load riders")),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/riders",
    request_body = CreateRiderRequest,
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 201, description = "Rider added, refreshed listing", body = AdminPanelResponse),
        (status = 400, description = "Validation error or unreadable body, unchanged listing", body = AdminPanelResponse),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Rider ID already exists", body = AdminPanelResponse)
    ),
    tag = "admin"
)]
pub async fn add_rider(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    payload: Result<Json<CreateRiderRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(admin = %session.email, "Unreadable rider submission: {}", rejection.body_text());
            let riders = services::list_riders_or_empty(state.riders.as_ref()).await;
            return (
                StatusCode::BAD_REQUEST,
                Json(AdminPanelResponse::failure(riders, "Failed to add rider")),
            )
                .into_response();
        }
    };

    let outcome = services::add_rider(state.riders.as_ref(), req).await;
    let riders = services::list_riders_or_empty(state.riders.as_ref()).await;

    match outcome {
        Ok(rider) => {
            tracing::info!(rider_id = %rider.rider_id, admin = %session.email, "Rider added");
            (
                StatusCode::CREATED,
                Json(AdminPanelResponse::success(riders, "Rider added successfully!")),
            )
                .into_response()
        }
        Err(e) => {
            let (status, message) = services::failure_message(&e);
            tracing::warn!(admin = %session.email, "Rejected rider: {}", message);
            (status, Json(AdminPanelResponse::failure(riders, message))).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/riders/{rider_id}",
    params(
        ("rider_id" = String, Path, description = "Rider ID")
    ),
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Rider found", body = Rider),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Rider not found")
    ),
    tag = "admin"
)]
pub async fn get_rider(
    State(state): State<AppState>,
    Path(rider_id): Path<String>,
) -> Result<Response, WebError> {
    let rider = state
        .riders
        .find_by_id(&rider_id)
        .await?
        .ok_or(WebError::NotFound)?;

    Ok(Json(rider).into_response())
}
