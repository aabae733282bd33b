use std::sync::Arc;

use storage::store::{AdminStore, RiderStore};

use crate::middleware::auth::SessionStore;

/// Shared request state. Cloned per request, so everything inside is a handle.
#[derive(Clone)]
pub struct AppState {
    pub riders: Arc<dyn RiderStore>,
    pub admins: Arc<dyn AdminStore>,
    pub sessions: SessionStore,
    pub title: Arc<str>,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(
        riders: Arc<dyn RiderStore>,
        admins: Arc<dyn AdminStore>,
        sessions: SessionStore,
        title: impl Into<Arc<str>>,
        secure_cookies: bool,
    ) -> Self {
        Self {
            riders,
            admins,
            sessions,
            title: title.into(),
            secure_cookies,
        }
    }
}
