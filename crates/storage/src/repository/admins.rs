use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Admin;

pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT admin_id, email, password_hash, created_at FROM admins WHERE email = $1",
        )
        .bind(email.trim().to_lowercase())
        .fetch_optional(self.pool)
        .await?;

        Ok(admin)
    }

    /// Create an admin from an already hashed password
    pub async fn create(&self, email: &str, password_hash: &str) -> Result<Admin> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (admin_id, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING admin_id, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email.trim().to_lowercase())
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                StorageError::duplicate_admin_email()
            } else {
                e
            }
        })?;

        Ok(admin)
    }

    /// Replace the password hash of an existing admin
    pub async fn update_password(&self, email: &str, password_hash: &str) -> Result<Admin> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            UPDATE admins
            SET password_hash = $2
            WHERE email = $1
            RETURNING admin_id, email, password_hash, created_at
            "#,
        )
        .bind(email.trim().to_lowercase())
        .bind(password_hash)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(admin)
    }
}
