use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "drift_session";

/// A logged-in admin, attached to the request by [`require_admin`].
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub session_id: Uuid,
    pub admin_id: Uuid,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// Process-local session map keyed by the session cookie.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, AdminSession>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn create(&self, admin_id: Uuid, email: &str) -> AdminSession {
        let session = AdminSession {
            session_id: Uuid::new_v4(),
            admin_id,
            email: email.to_string(),
            expires_at: Utc::now() + self.ttl,
        };

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| s.expires_at > Utc::now());
        sessions.insert(session.session_id, session.clone());
        session
    }

    /// Returns the live session, dropping it first if it has expired.
    pub async fn get(&self, session_id: Uuid) -> Option<AdminSession> {
        let session = self.sessions.read().await.get(&session_id).cloned()?;
        if session.expires_at > Utc::now() {
            return Some(session);
        }

        self.sessions.write().await.remove(&session_id);
        None
    }

    pub async fn destroy(&self, session_id: Uuid) {
        self.sessions.write().await.remove(&session_id);
    }
}

/// Reads the session id out of the `Cookie` header, if any.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub async fn current_session(state: &AppState, headers: &HeaderMap) -> Option<AdminSession> {
    let session_id = session_id_from_headers(headers)?;
    state.sessions.get(session_id).await
}

pub fn session_cookie(session_id: Uuid, max_age: Duration, secure: bool) -> HeaderValue {
    build_cookie(&session_id.to_string(), max_age.num_seconds(), secure)
}

pub fn expired_session_cookie(secure: bool) -> HeaderValue {
    build_cookie("", 0, secure)
}

fn build_cookie(value: &str, max_age: i64, secure: bool) -> HeaderValue {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE, value, max_age
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).expect("session cookie is built from a uuid and ascii literals")
}

pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let Some(session) = current_session(&state, req.headers()).await else {
        tracing::warn!("Rejected admin request without a live session");
        return Err(WebError::Unauthorized);
    };

    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
