use sqlx::FromRow;
use uuid::Uuid;

/// The admin credential record. The hash never leaves the storage/web boundary.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub admin_id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: chrono::NaiveDateTime,
}
