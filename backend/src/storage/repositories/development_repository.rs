use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::DevelopmentRecord;
use sqlx::Row;

use crate::storage::connection::DbConnection;
use crate::storage::traits::DevelopmentStorage;

/// Repository for the week-indexed development reference table
#[derive(Clone)]
pub struct DevelopmentRepository {
    db: DbConnection,
}

impl DevelopmentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DevelopmentStorage for DevelopmentRepository {
    async fn list_development_records(&self) -> Result<Vec<DevelopmentRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT week, size_comparison, length_cm, weight_g, image, milestones
            FROM development_records
            ORDER BY week ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| -> Result<DevelopmentRecord> {
                let week: i64 = row.get("week");
                let milestones: String = row.get("milestones");
                Ok(DevelopmentRecord {
                    week: u32::try_from(week)
                        .with_context(|| format!("Invalid week {} in development_records", week))?,
                    size_comparison: row.get("size_comparison"),
                    length_cm: row.get("length_cm"),
                    weight_g: row.get("weight_g"),
                    image: row.get("image"),
                    milestones: serde_json::from_str(&milestones)
                        .with_context(|| format!("Invalid milestones for week {}", week))?,
                })
            })
            .collect()
    }

    async fn upsert_development_record(&self, record: &DevelopmentRecord) -> Result<()> {
        let milestones = serde_json::to_string(&record.milestones)?;

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO development_records
                (week, size_comparison, length_cm, weight_g, image, milestones)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(i64::from(record.week))
        .bind(&record.size_comparison)
        .bind(record.length_cm)
        .bind(record.weight_g)
        .bind(&record.image)
        .bind(milestones)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }
}
