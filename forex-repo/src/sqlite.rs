//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use forex_types::{Rate, RateId, RatePatch, RateStore, RepoError, StoredRate};

use crate::types::DbRate;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let in_memory = database_url.contains(":memory:");

        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if !in_memory {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to `:memory:` opens its own database, and closing
        // the last one drops it.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(10)
        };
        let pool = pool_options.connect_with(options).await?;

        let repo = Self { pool };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the database schema (for testing with existing pool).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_rates.sql");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl RateStore for SqliteRepo {
    async fn list_rates(&self) -> Result<Vec<StoredRate>, RepoError> {
        let rows: Vec<DbRate> = sqlx::query_as(
            r#"SELECT id, code, name, symbol, flag, buy, sell FROM rates ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbRate::into_domain).collect())
    }

    async fn get_rate(&self, id: &RateId) -> Result<Option<StoredRate>, RepoError> {
        let row: Option<DbRate> = sqlx::query_as(
            r#"SELECT id, code, name, symbol, flag, buy, sell FROM rates WHERE id = ?"#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(DbRate::into_domain))
    }

    async fn put_rate(&self, id: &RateId, rate: &Rate) -> Result<(), RepoError> {
        sqlx::query(
            r#"INSERT INTO rates (id, code, name, symbol, flag, buy, sell) VALUES (?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET
                   code = excluded.code,
                   name = excluded.name,
                   symbol = excluded.symbol,
                   flag = excluded.flag,
                   buy = excluded.buy,
                   sell = excluded.sell"#,
        )
        .bind(id.as_str())
        .bind(&rate.code)
        .bind(&rate.name)
        .bind(&rate.symbol)
        .bind(&rate.flag)
        .bind(&rate.buy)
        .bind(&rate.sell)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }

    async fn merge_rate(&self, id: &RateId, patch: &RatePatch) -> Result<StoredRate, RepoError> {
        let mut db_tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        let result = sqlx::query(
            r#"UPDATE rates SET
                   code = COALESCE(?, code),
                   name = COALESCE(?, name),
                   symbol = COALESCE(?, symbol),
                   flag = COALESCE(?, flag),
                   buy = COALESCE(?, buy),
                   sell = COALESCE(?, sell)
               WHERE id = ?"#,
        )
        .bind(&patch.code)
        .bind(&patch.name)
        .bind(&patch.symbol)
        .bind(&patch.flag)
        .bind(&patch.buy)
        .bind(&patch.sell)
        .bind(id.as_str())
        .execute(&mut *db_tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        let row: DbRate = sqlx::query_as(
            r#"SELECT id, code, name, symbol, flag, buy, sell FROM rates WHERE id = ?"#,
        )
        .bind(id.as_str())
        .fetch_one(&mut *db_tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        db_tx
            .commit()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.into_domain())
    }

    async fn delete_rate(&self, id: &RateId) -> Result<(), RepoError> {
        sqlx::query(r#"DELETE FROM rates WHERE id = ?"#)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }

    async fn count_rates(&self) -> Result<i64, RepoError> {
        sqlx::query_scalar(r#"SELECT COUNT(*) FROM rates"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))
    }
}
