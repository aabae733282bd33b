use std::sync::Arc;

use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;
mod state;

use config::Config;
use middleware::auth::SessionStore;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::leaderboard::handlers::get_dashboard,
        features::auth::handlers::login,
        features::auth::handlers::get_session,
        features::auth::handlers::logout,
        features::admin::handlers::list_riders,
        features::admin::handlers::add_rider,
        features::admin::handlers::get_rider,
    ),
    components(
        schemas(
            storage::dto::leaderboard::DashboardResponse,
            storage::dto::leaderboard::RankedRider,
            storage::dto::rider::CreateRiderRequest,
            storage::dto::rider::AdminPanelResponse,
            storage::dto::auth::LoginRequest,
            storage::dto::auth::SessionResponse,
            storage::models::Rider,
        )
    ),
    tags(
        (name = "leaderboard", description = "Public leaderboard endpoints"),
        (name = "auth", description = "Admin login and session endpoints"),
        (name = "admin", description = "Rider registration, admin session required"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Cookie(
                        utoipa::openapi::security::ApiKeyValue::new(
                            middleware::auth::SESSION_COOKIE,
                        ),
                    ),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting DeadLine Drift leaderboard");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let store = Arc::new(db.clone());
    let state = AppState::new(
        store.clone(),
        store,
        SessionStore::new(chrono::Duration::minutes(config.session_ttl_minutes)),
        config.leaderboard_title.clone(),
        config.secure_cookies,
    );

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Leaderboard: http://{}/api/dashboard", bind_address);
    tracing::info!("Admin login: http://{}/api/auth/login", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    axum::serve(listener, routes::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shutting down, closing database pool");
    db.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
