use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::timeline::{self, reference_data, DevelopmentTable};
use crate::storage::traits::DevelopmentStorage;
use shared::DevelopmentRecord;

/// Serves the week-indexed development reference data
#[derive(Clone)]
pub struct DevelopmentService {
    storage: Arc<dyn DevelopmentStorage>,
    comparison_floor: u32,
}

impl DevelopmentService {
    pub fn new(storage: Arc<dyn DevelopmentStorage>, comparison_floor: u32) -> Self {
        Self {
            storage,
            comparison_floor,
        }
    }

    pub fn comparison_floor(&self) -> u32 {
        self.comparison_floor
    }

    /// Seed the stored table from the built-in one if it is empty.
    /// Returns the number of records written.
    pub async fn seed_if_empty(&self) -> Result<usize> {
        let existing = self.storage.list_development_records().await?;
        if !existing.is_empty() {
            info!("Development table already has {} records", existing.len());
            return Ok(0);
        }

        let records = reference_data::builtin_records();
        for record in &records {
            self.storage.upsert_development_record(record).await?;
        }

        info!("Seeded development table with {} records", records.len());
        Ok(records.len())
    }

    /// The stored table, or the built-in one when nothing is stored
    pub async fn table(&self) -> Result<DevelopmentTable> {
        let records = self.storage.list_development_records().await?;
        if records.is_empty() {
            warn!("Development table is empty, using built-in reference data");
            return Ok(reference_data::builtin_table());
        }

        Ok(records.into_iter().map(|record| (record.week, record)).collect())
    }

    pub async fn list_records(&self) -> Result<Vec<DevelopmentRecord>> {
        Ok(self.table().await?.into_values().collect())
    }

    /// Development record for `week`, falling back to the nearest week on record
    pub async fn record_for_week(&self, week: u32) -> Result<DevelopmentRecord> {
        let table = self.table().await?;
        Ok(timeline::resolve(week, &table, self.comparison_floor))
    }
}
