use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{NewRider, Rider};

const RIDER_COLUMNS: &str =
    "rider_id, name, phone, email, minute, second, distance, finish, created_at";

pub struct RiderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RiderRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all riders, ordered by rider id
    pub async fn list(&self) -> Result<Vec<Rider>> {
        let riders = sqlx::query_as::<_, Rider>(&format!(
            "SELECT {RIDER_COLUMNS} FROM riders ORDER BY rider_id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(riders)
    }

    /// List riders by finish flag. Ordering is left to the leaderboard.
    pub async fn list_by_finished(&self, finished: bool) -> Result<Vec<Rider>> {
        let riders = sqlx::query_as::<_, Rider>(&format!(
            "SELECT {RIDER_COLUMNS} FROM riders WHERE finish = $1"
        ))
        .bind(finished)
        .fetch_all(self.pool)
        .await?;

        Ok(riders)
    }

    pub async fn find_by_id(&self, rider_id: &str) -> Result<Option<Rider>> {
        let rider = sqlx::query_as::<_, Rider>(&format!(
            "SELECT {RIDER_COLUMNS} FROM riders WHERE rider_id = $1"
        ))
        .bind(rider_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(rider)
    }

    /// Insert a rider, rejecting an already used rider id
    pub async fn create(&self, rider: &NewRider) -> Result<Rider> {
        if self.find_by_id(&rider.rider_id).await?.is_some() {
            return Err(StorageError::duplicate_rider_id());
        }

        let created = sqlx::query_as::<_, Rider>(&format!(
            r#"
            INSERT INTO riders (rider_id, name, phone, email, minute, second, distance, finish)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {RIDER_COLUMNS}
            "#
        ))
        .bind(&rider.rider_id)
        .bind(&rider.name)
        .bind(&rider.phone)
        .bind(&rider.email)
        .bind(rider.minute)
        .bind(rider.second)
        .bind(rider.distance)
        .bind(rider.finish)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            // a concurrent insert can slip past the lookup above
            if e.is_unique_violation() {
                StorageError::duplicate_rider_id()
            } else {
                e
            }
        })?;

        Ok(created)
    }
}
