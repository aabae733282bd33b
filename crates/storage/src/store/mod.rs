//! Store seams used by the web layer.
//!
//! [`Database`] is the production implementation; [`MemoryStore`] keeps
//! everything in process for tests and local demos.

mod memory;

use async_trait::async_trait;

use crate::Database;
use crate::error::Result;
use crate::models::{Admin, NewRider, Rider};
use crate::repository::{admins::AdminRepository, riders::RiderRepository};

pub use memory::MemoryStore;

#[async_trait]
pub trait RiderStore: Send + Sync {
    /// Every rider, ordered by rider id.
    async fn find_all(&self) -> Result<Vec<Rider>>;

    /// Riders whose finish flag equals `finished`, in no particular order.
    async fn find_by_finished(&self, finished: bool) -> Result<Vec<Rider>>;

    async fn find_by_id(&self, rider_id: &str) -> Result<Option<Rider>>;

    /// Fails with a constraint violation when the rider id is taken.
    async fn insert(&self, rider: &NewRider) -> Result<Rider>;
}

#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>>;
}

#[async_trait]
impl RiderStore for Database {
    async fn find_all(&self) -> Result<Vec<Rider>> {
        RiderRepository::new(self.pool()).list().await
    }

    async fn find_by_finished(&self, finished: bool) -> Result<Vec<Rider>> {
        RiderRepository::new(self.pool())
            .list_by_finished(finished)
            .await
    }

    async fn find_by_id(&self, rider_id: &str) -> Result<Option<Rider>> {
        RiderRepository::new(self.pool()).find_by_id(rider_id).await
    }

    async fn insert(&self, rider: &NewRider) -> Result<Rider> {
        RiderRepository::new(self.pool()).create(rider).await
    }
}

#[async_trait]
impl AdminStore for Database {
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>> {
        AdminRepository::new(self.pool()).find_by_email(email).await
    }
}
