use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{get_session, login, logout};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/session", get(get_session))
        .route("/logout", post(logout).get(logout))
}
