use axum::{Router, routing::get};

use super::handlers::get_dashboard;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/leaderboard", get(get_dashboard))
}
