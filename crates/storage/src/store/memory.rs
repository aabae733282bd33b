use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AdminStore, RiderStore};
use crate::error::{Result, StorageError};
use crate::models::{Admin, NewRider, Rider};
use crate::services::password::hash_password;

#[derive(Default)]
pub struct MemoryStore {
    riders: RwLock<Vec<Rider>>,
    admins: RwLock<Vec<Admin>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed rows as they would come back from the database, partial data included.
    pub fn with_riders(riders: Vec<Rider>) -> Self {
        Self {
            riders: RwLock::new(riders),
            admins: RwLock::default(),
        }
    }

    pub async fn add_admin(&self, email: &str, password: &str) -> Result<Admin> {
        let admin = Admin {
            admin_id: Uuid::new_v4(),
            email: email.trim().to_lowercase(),
            password_hash: hash_password(password)?,
            created_at: chrono::Utc::now().naive_utc(),
        };
        self.admins.write().await.push(admin.clone());
        Ok(admin)
    }
}

#[async_trait]
impl RiderStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Rider>> {
        let mut riders = self.riders.read().await.clone();
        riders.sort_by(|a, b| a.rider_id.cmp(&b.rider_id));
        Ok(riders)
    }

    async fn find_by_finished(&self, finished: bool) -> Result<Vec<Rider>> {
        Ok(self
            .riders
            .read()
            .await
            .iter()
            .filter(|r| r.finish == finished)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, rider_id: &str) -> Result<Option<Rider>> {
        Ok(self
            .riders
            .read()
            .await
            .iter()
            .find(|r| r.rider_id == rider_id)
            .cloned())
    }

    async fn insert(&self, rider: &NewRider) -> Result<Rider> {
        let mut riders = self.riders.write().await;
        if riders.iter().any(|r| r.rider_id == rider.rider_id) {
            return Err(StorageError::duplicate_rider_id());
        }

        let created = Rider {
            rider_id: rider.rider_id.clone(),
            name: rider.name.clone(),
            phone: rider.phone.clone(),
            email: rider.email.clone(),
            minute: Some(rider.minute),
            second: Some(rider.second),
            distance: rider.distance,
            finish: rider.finish,
            created_at: chrono::Utc::now().naive_utc(),
        };
        riders.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl AdminStore for MemoryStore {
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>> {
        let email = email.trim().to_lowercase();
        Ok(self
            .admins
            .read()
            .await
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }
}
