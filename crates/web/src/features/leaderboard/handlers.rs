use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::leaderboard::DashboardResponse;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Finished and ongoing riders, ranked", body = DashboardResponse),
        (status = 500, description = "Riders could not be loaded")
    ),
    tag = "leaderboard"
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<Response, WebError> {
    let leaderboard = services::load_leaderboard(state.riders.as_ref()).await?;

    Ok(Json(DashboardResponse::new(state.title.as_ref(), leaderboard)).into_response())
}
