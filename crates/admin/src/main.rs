//! `drift-admin`: bootstrap and maintain the admin account.

use clap::{Parser, Subcommand};
use storage::{
    Database, error::StorageError, repository::admins::AdminRepository,
    services::password::hash_password,
};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "drift-admin")]
#[command(about = "DeadLine Drift admin account tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the admin account
    Create {
        #[arg(long)]
        email: String,

        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Replace the password of an existing admin
    SetPassword {
        #[arg(long)]
        email: String,

        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[derive(Debug, Error)]
enum AdminError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Admin not found: {0}")]
    NotFound(String),

    #[error("Password must not be empty")]
    EmptyPassword,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("drift_admin={},storage={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = Database::new(&cli.database_url).await?;
    db.run_migrations().await?;

    let result = run(&db, cli.command).await;
    db.close().await;

    if let Err(e) = &result {
        tracing::error!("{}", e);
    }
    result.map_err(Into::into)
}

async fn run(db: &Database, command: Commands) -> Result<(), AdminError> {
    let repo = AdminRepository::new(db.pool());

    match command {
        Commands::Create { email, password } => {
            let hash = hash_for(&password)?;
            let admin = repo.create(&email, &hash).await?;
            tracing::info!(admin_id = %admin.admin_id, "Admin created: {}", admin.email);
        }
        Commands::SetPassword { email, password } => {
            let hash = hash_for(&password)?;
            let admin = repo
                .update_password(&email, &hash)
                .await
                .map_err(|e| match e {
                    StorageError::NotFound => AdminError::NotFound(email.clone()),
                    other => AdminError::Storage(other),
                })?;
            tracing::info!("Password updated for {}", admin.email);
        }
    }

    Ok(())
}

fn hash_for(password: &str) -> Result<String, AdminError> {
    if password.is_empty() {
        return Err(AdminError::EmptyPassword);
    }
    Ok(hash_password(password)?)
}
