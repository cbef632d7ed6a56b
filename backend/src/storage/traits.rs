//! # Storage Traits
//!
//! Storage abstractions the domain services depend on, so a different backend
//! can be dropped in without touching the domain layer.

use anyhow::Result;
use async_trait::async_trait;
use shared::DevelopmentRecord;

use crate::domain::models::pregnancy::DomainPregnancy;

/// Persistence for pregnancy profiles
#[async_trait]
pub trait PregnancyStorage: Send + Sync {
    /// Store a new pregnancy
    async fn store_pregnancy(&self, pregnancy: &DomainPregnancy) -> Result<()>;

    /// Retrieve a pregnancy by ID
    async fn get_pregnancy(&self, pregnancy_id: &str) -> Result<Option<DomainPregnancy>>;

    /// List all pregnancies of a user, most recently created first
    async fn list_pregnancies(&self, user_id: &str) -> Result<Vec<DomainPregnancy>>;

    /// The user's active pregnancy, if any
    async fn get_active_pregnancy(&self, user_id: &str) -> Result<Option<DomainPregnancy>>;

    /// Overwrite an existing pregnancy
    async fn update_pregnancy(&self, pregnancy: &DomainPregnancy) -> Result<()>;
}

/// Persistence for the development reference table
#[async_trait]
pub trait DevelopmentStorage: Send + Sync {
    /// All records ordered by week
    async fn list_development_records(&self) -> Result<Vec<DevelopmentRecord>>;

    /// Insert or replace the record for `record.week`
    async fn upsert_development_record(&self, record: &DevelopmentRecord) -> Result<()>;
}
