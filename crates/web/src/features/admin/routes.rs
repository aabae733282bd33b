use axum::{Router, middleware, routing::get};

use super::handlers::{add_rider, get_rider, list_riders};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/riders", get(list_riders).post(add_rider))
        .route("/riders/:rider_id", get(get_rider))
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}
