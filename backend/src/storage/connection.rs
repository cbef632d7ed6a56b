use anyhow::{Context, Result};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;
use tracing::info;

/// DbConnection manages the SQLite pool shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (creating if needed) the database at `url` and make sure the schema exists
    pub async fn init(url: &str) -> Result<Self> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!("Creating database {}", url);
            Sqlite::create_database(url)
                .await
                .with_context(|| format!("Failed to create database {}", url))?;
        }

        let pool = SqlitePool::connect(url)
            .await
            .with_context(|| format!("Failed to connect to {}", url))?;

        Self::from_pool(pool).await
    }

    /// Initialize an isolated in-memory database for tests
    ///
    /// A single connection that never expires keeps the in-memory data alive for the
    /// whole test.
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        Self::setup_schema(&pool).await?;
        Ok(Self { pool: Arc::new(pool) })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pregnancies (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                anchor_kind TEXT NOT NULL,
                anchor_date TEXT NOT NULL,
                pre_pregnancy_weight_kg REAL,
                current_weight_kg REAL,
                is_active INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create pregnancies table")?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_pregnancies_user_id
            ON pregnancies(user_id);
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create pregnancies index")?;

        // At most one active pregnancy per user, even under concurrent inserts
        sqlx::query(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_pregnancies_one_active
            ON pregnancies(user_id) WHERE is_active = 1;
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create active pregnancy index")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS development_records (
                week INTEGER PRIMARY KEY,
                size_comparison TEXT NOT NULL,
                length_cm REAL NOT NULL,
                weight_g REAL NOT NULL,
                image TEXT NOT NULL,
                milestones TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create development_records table")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    #[tokio::test]
    async fn test_schema_is_created() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        let rows = sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Failed to list tables");
        let tables: Vec<String> = rows.iter().map(|row| row.get("name")).collect();

        assert!(tables.contains(&"pregnancies".to_string()));
        assert!(tables.contains(&"development_records".to_string()));

        let index = sqlx::query("SELECT name FROM sqlite_master WHERE type = 'index' AND name = ?")
            .bind("idx_pregnancies_one_active")
            .fetch_optional(db.pool())
            .await
            .expect("Failed to list indexes");
        assert!(index.is_some());
    }

    #[tokio::test]
    async fn test_schema_setup_is_idempotent() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        DbConnection::setup_schema(db.pool())
            .await
            .expect("Second schema setup should succeed");
    }
}
