use super::{Store, StoreResult};
use crate::config::Config;
use crate::error::StoreError;
use crate::models::{Key, Translation};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Column list for `translations` queries.
const TRANSLATION_COLUMNS: &str = "id, key_id, locale, value";

/// PostgreSQL-backed store.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the configured database and create tables
    pub async fn connect(config: &Config) -> Result<Self> {
        let url = config
            .database_url
            .as_deref()
            .context("DATABASE_URL not set")?;

        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        let store = Self { pool };
        store.create_tables().await?;
        Ok(store)
    }

    /// Wrap an existing pool (tables must already exist or be created via
    /// [`PgStore::create_tables`]).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create tables (safe to run always)
    pub async fn create_tables(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS keys (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create keys table")?;

        // One translation per (key, locale); lookups rely on it.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS translations (
                id BIGSERIAL PRIMARY KEY,
                key_id BIGINT NOT NULL REFERENCES keys(id) ON DELETE CASCADE,
                locale VARCHAR(2) NOT NULL,
                value TEXT,
                CONSTRAINT uq_translations_key_locale UNIQUE (key_id, locale)
            )",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create translations table")?;

        info!("Database tables ready");
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_keys(&self) -> StoreResult<Vec<Key>> {
        Ok(
            sqlx::query_as::<_, Key>("SELECT id, name FROM keys ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn create_key(&self, name: &str) -> StoreResult<Key> {
        sqlx::query_as::<_, Key>("INSERT INTO keys (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::classify)
    }

    async fn key_exists(&self, id: i64) -> StoreResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM keys WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn rename_key(&self, id: i64, name: &str) -> StoreResult<Option<Key>> {
        sqlx::query_as::<_, Key>("UPDATE keys SET name = $1 WHERE id = $2 RETURNING id, name")
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::classify)
    }

    async fn list_translations(&self, key_id: i64) -> StoreResult<Vec<Translation>> {
        let query = format!(
            "SELECT {TRANSLATION_COLUMNS} FROM translations WHERE key_id = $1 ORDER BY id"
        );
        Ok(sqlx::query_as::<_, Translation>(&query)
            .bind(key_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn find_translation(
        &self,
        key_id: i64,
        locale: &str,
    ) -> StoreResult<Option<Translation>> {
        let query = format!(
            "SELECT {TRANSLATION_COLUMNS} FROM translations \
             WHERE key_id = $1 AND locale = $2 ORDER BY id LIMIT 1"
        );
        Ok(sqlx::query_as::<_, Translation>(&query)
            .bind(key_id)
            .bind(locale)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_translation(
        &self,
        key_id: i64,
        locale: &str,
        value: &str,
    ) -> StoreResult<Translation> {
        let query = format!(
            "INSERT INTO translations (key_id, locale, value) VALUES ($1, $2, $3) \
             RETURNING {TRANSLATION_COLUMNS}"
        );
        sqlx::query_as::<_, Translation>(&query)
            .bind(key_id)
            .bind(locale)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::classify)
    }

    async fn update_translation_value(
        &self,
        key_id: i64,
        locale: &str,
        value: &str,
    ) -> StoreResult<Option<Translation>> {
        let query = format!(
            "UPDATE translations SET value = $1 WHERE key_id = $2 AND locale = $3 \
             RETURNING {TRANSLATION_COLUMNS}"
        );
        sqlx::query_as::<_, Translation>(&query)
            .bind(value)
            .bind(key_id)
            .bind(locale)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::classify)
    }
}
