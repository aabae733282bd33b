use std::time::Duration;

use axum::{Router, response::Redirect, routing::get};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::ApiDoc;
use crate::features::{admin, auth, leaderboard};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let api = Router::new()
        .merge(leaderboard::routes::routes())
        .nest("/auth", auth::routes::routes())
        .nest("/admin", admin::routes::routes(state.clone()));

    Router::new()
        .route("/", get(|| async { Redirect::to("/api/dashboard") }))
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state)
}
