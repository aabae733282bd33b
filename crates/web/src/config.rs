use anyhow::{Context, Result};

pub const DEFAULT_TITLE: &str = "DeadLine Drift - College Car Race Leaderboard";
const DEFAULT_SESSION_TTL_MINUTES: i64 = 720;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub leaderboard_title: String,
    pub session_ttl_minutes: i64,
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            leaderboard_title: std::env::var("LEADERBOARD_TITLE")
                .unwrap_or_else(|_| DEFAULT_TITLE.to_string()),
            session_ttl_minutes: match std::env::var("SESSION_TTL_MINUTES") {
                Ok(value) => value
                    .parse()
                    .context("SESSION_TTL_MINUTES must be a number")?,
                Err(_) => DEFAULT_SESSION_TTL_MINUTES,
            },
            secure_cookies: std::env::var("SECURE_COOKIES")
                .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}
