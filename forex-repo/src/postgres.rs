//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use forex_types::{Rate, RateId, RatePatch, RateStore, RepoError, StoredRate};

use crate::types::DbRate;

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_rates.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl RateStore for PostgresRepo {
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
            r#"SELECT id, code, name, symbol, flag, buy, sell FROM rates WHERE id = $1"#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(DbRate::into_domain))
    }

    async fn put_rate(&self, id: &RateId, rate: &Rate) -> Result<(), RepoError> {
        sqlx::query(
            r#"INSERT INTO rates (id, code, name, symbol, flag, buy, sell) VALUES ($1, $2, $3, $4, $5, $6, $7)
               ON CONFLICT (id) DO UPDATE SET
                   code = EXCLUDED.code,
                   name = EXCLUDED.name,
                   symbol = EXCLUDED.symbol,
                   flag = EXCLUDED.flag,
                   buy = EXCLUDED.buy,
                   sell = EXCLUDED.sell"#,
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
        // Single statement: the row lock taken by UPDATE covers the read-back.
        let row: Option<DbRate> = sqlx::query_as(
            r#"UPDATE rates SET
                   code = COALESCE($1, code),
                   name = COALESCE($2, name),
                   symbol = COALESCE($3, symbol),
                   flag = COALESCE($4, flag),
                   buy = COALESCE($5, buy),
                   sell = COALESCE($6, sell)
               WHERE id = $7
               RETURNING id, code, name, symbol, flag, buy, sell"#,
        )
        .bind(&patch.code)
        .bind(&patch.name)
        .bind(&patch.symbol)
        .bind(&patch.flag)
        .bind(&patch.buy)
        .bind(&patch.sell)
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbRate::into_domain).ok_or(RepoError::NotFound)
    }

    async fn delete_rate(&self, id: &RateId) -> Result<(), RepoError> {
        sqlx::query(r#"DELETE FROM rates WHERE id = $1"#)
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
