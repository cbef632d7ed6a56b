use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use shared::AnchorKind;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::pregnancy::{DomainPregnancy, PregnancyError};
use crate::domain::timeline::GestationAnchor;
use crate::storage::connection::DbConnection;
use crate::storage::traits::PregnancyStorage;

const DATE_FORMAT: &str = "%Y-%m-%d";

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, anchor_kind, anchor_date, pre_pregnancy_weight_kg,
           current_weight_kg, is_active, created_at, updated_at
    FROM pregnancies
"#;

/// Repository for pregnancy profiles
#[derive(Clone)]
pub struct PregnancyRepository {
    db: DbConnection,
}

impl PregnancyRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_pregnancy(row: &SqliteRow) -> Result<DomainPregnancy> {
        let id: String = row.get("id");

        let kind_str: String = row.get("anchor_kind");
        let kind = AnchorKind::parse(&kind_str)
            .ok_or_else(|| anyhow!("Unknown anchor kind '{}' for pregnancy {}", kind_str, id))?;

        let date_str: String = row.get("anchor_date");
        let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
            .with_context(|| format!("Failed to parse anchor date for pregnancy {}", id))?;

        let created_at: String = row.get("created_at");
        let updated_at: String = row.get("updated_at");

        Ok(DomainPregnancy {
            user_id: row.get("user_id"),
            anchor: GestationAnchor::from_parts(kind, date),
            pre_pregnancy_weight_kg: row.get("pre_pregnancy_weight_kg"),
            current_weight_kg: row.get("current_weight_kg"),
            is_active: row.get("is_active"),
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
            id,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Failed to parse timestamp '{}'", value))?
        .with_timezone(&Utc))
}

/// Turn a violation of the one-active-pregnancy index into the domain error
fn map_write_error(err: sqlx::Error) -> anyhow::Error {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.message().contains("pregnancies.user_id") {
            return PregnancyError::ActivePregnancyAlreadyExists.into();
        }
    }
    err.into()
}

#[async_trait]
impl PregnancyStorage for PregnancyRepository {
    async fn store_pregnancy(&self, pregnancy: &DomainPregnancy) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO pregnancies (id, user_id, anchor_kind, anchor_date, pre_pregnancy_weight_kg,
                                     current_weight_kg, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&pregnancy.id)
        .bind(&pregnancy.user_id)
        .bind(pregnancy.anchor.kind().as_str())
        .bind(pregnancy.anchor.date().format(DATE_FORMAT).to_string())
        .bind(pregnancy.pre_pregnancy_weight_kg)
        .bind(pregnancy.current_weight_kg)
        .bind(pregnancy.is_active)
        .bind(pregnancy.created_at.to_rfc3339())
        .bind(pregnancy.updated_at.to_rfc3339())
        .execute(self.db.pool())
        .await
        .map_err(map_write_error)?;
        Ok(())
    }

    async fn get_pregnancy(&self, pregnancy_id: &str) -> Result<Option<DomainPregnancy>> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(pregnancy_id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::row_to_pregnancy).transpose()
    }

    async fn list_pregnancies(&self, user_id: &str) -> Result<Vec<DomainPregnancy>> {
        let rows = sqlx::query(&format!(
            "{} WHERE user_id = ? ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_pregnancy).collect()
    }

    async fn get_active_pregnancy(&self, user_id: &str) -> Result<Option<DomainPregnancy>> {
        let row = sqlx::query(&format!(
            "{} WHERE user_id = ? AND is_active = 1 ORDER BY created_at DESC LIMIT 1",
            SELECT_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_pregnancy).transpose()
    }

    async fn update_pregnancy(&self, pregnancy: &DomainPregnancy) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE pregnancies
            SET anchor_kind = ?, anchor_date = ?, pre_pregnancy_weight_kg = ?,
                current_weight_kg = ?, is_active = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(pregnancy.anchor.kind().as_str())
        .bind(pregnancy.anchor.date().format(DATE_FORMAT).to_string())
        .bind(pregnancy.pre_pregnancy_weight_kg)
        .bind(pregnancy.current_weight_kg)
        .bind(pregnancy.is_active)
        .bind(pregnancy.updated_at.to_rfc3339())
        .bind(&pregnancy.id)
        .execute(self.db.pool())
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(anyhow!("Pregnancy not found: {}", pregnancy.id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    async fn setup_test() -> PregnancyRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        PregnancyRepository::new(db)
    }

    fn pregnancy(user_id: &str, anchor: GestationAnchor, created_offset_secs: i64) -> DomainPregnancy {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
            + Duration::seconds(created_offset_secs);
        DomainPregnancy {
            id: DomainPregnancy::generate_id(created_at),
            user_id: user_id.to_string(),
            anchor,
            pre_pregnancy_weight_kg: Some(62.5),
            current_weight_kg: None,
            is_active: true,
            created_at,
            updated_at: created_at,
        }
    }

    fn lmp(y: i32, m: u32, d: u32) -> GestationAnchor {
        GestationAnchor::Lmp(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[tokio::test]
    async fn test_store_and_get_pregnancy() {
        let repo = setup_test().await;
        let stored = pregnancy("user-1", lmp(2024, 1, 1), 0);

        repo.store_pregnancy(&stored).await.expect("Failed to store pregnancy");
        let loaded = repo
            .get_pregnancy(&stored.id)
            .await
            .expect("Failed to get pregnancy")
            .expect("Pregnancy should exist");

        assert_eq!(loaded, stored);
    }

    #[tokio::test]
    async fn test_due_date_anchor_survives_storage() {
        let repo = setup_test().await;
        let due = GestationAnchor::DueDate(NaiveDate::from_ymd_opt(2024, 10, 7).unwrap());
        let stored = pregnancy("user-1", due, 0);

        repo.store_pregnancy(&stored).await.unwrap();
        let loaded = repo.get_pregnancy(&stored.id).await.unwrap().unwrap();

        assert_eq!(loaded.anchor, due);
    }

    #[tokio::test]
    async fn test_get_missing_pregnancy() {
        let repo = setup_test().await;
        assert!(repo.get_pregnancy("pregnancy::1::missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_pregnancies_is_per_user_and_newest_first() {
        let repo = setup_test().await;
        let mut older = pregnancy("user-1", lmp(2022, 5, 1), 0);
        older.is_active = false;
        let newer = pregnancy("user-1", lmp(2024, 1, 1), 60);
        let other_user = pregnancy("user-2", lmp(2024, 2, 1), 30);

        for p in [&older, &newer, &other_user] {
            repo.store_pregnancy(p).await.unwrap();
        }

        let listed = repo.list_pregnancies("user-1").await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec![newer.id.as_str(), older.id.as_str()]);
    }

    #[tokio::test]
    async fn test_get_active_pregnancy_skips_inactive() {
        let repo = setup_test().await;
        let mut inactive = pregnancy("user-1", lmp(2022, 5, 1), 0);
        inactive.is_active = false;
        repo.store_pregnancy(&inactive).await.unwrap();

        assert!(repo.get_active_pregnancy("user-1").await.unwrap().is_none());

        let active = pregnancy("user-1", lmp(2024, 1, 1), 60);
        repo.store_pregnancy(&active).await.unwrap();

        let found = repo.get_active_pregnancy("user-1").await.unwrap().unwrap();
        assert_eq!(found.id, active.id);
    }

    #[tokio::test]
    async fn test_second_active_pregnancy_is_rejected_by_storage() {
        let repo = setup_test().await;
        repo.store_pregnancy(&pregnancy("user-1", lmp(2024, 1, 1), 0)).await.unwrap();

        let err = repo
            .store_pregnancy(&pregnancy("user-1", lmp(2024, 2, 1), 60))
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<PregnancyError>(),
            Some(&PregnancyError::ActivePregnancyAlreadyExists)
        );

        let mut inactive = pregnancy("user-1", lmp(2023, 6, 1), 120);
        inactive.is_active = false;
        repo.store_pregnancy(&inactive).await.expect("Inactive rows are not limited");
    }

    #[tokio::test]
    async fn test_update_pregnancy() {
        let repo = setup_test().await;
        let mut stored = pregnancy("user-1", lmp(2024, 1, 1), 0);
        repo.store_pregnancy(&stored).await.unwrap();

        stored.anchor = GestationAnchor::DueDate(NaiveDate::from_ymd_opt(2024, 10, 10).unwrap());
        stored.current_weight_kg = Some(68.0);
        stored.is_active = false;
        stored.updated_at = stored.updated_at + Duration::days(3);
        repo.update_pregnancy(&stored).await.expect("Failed to update pregnancy");

        let loaded = repo.get_pregnancy(&stored.id).await.unwrap().unwrap();
        assert_eq!(loaded, stored);
    }

    #[tokio::test]
    async fn test_update_missing_pregnancy_fails() {
        let repo = setup_test().await;
        let missing = pregnancy("user-1", lmp(2024, 1, 1), 0);
        assert!(repo.update_pregnancy(&missing).await.is_err());
    }
}
