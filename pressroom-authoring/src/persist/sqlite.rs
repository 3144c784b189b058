//! SQLite-backed slot store
//!
//! Durable local storage for draft snapshots, following the key-value
//! pattern: one row per slot, upsert on write.

use async_trait::async_trait;
use pressroom_common::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

use super::SlotStore;

pub struct SqliteSlotStore {
    db: SqlitePool,
}

impl SqliteSlotStore {
    /// Open (creating if missing) the slot database at `path`
    pub async fn connect(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(Error::Database)?;
        let store = Self { db };
        store.init_schema().await?;
        Ok(store)
    }

    /// Wrap an existing pool (tests use `:memory:` pools)
    pub async fn from_pool(db: SqlitePool) -> Result<Self> {
        let store = Self { db };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS slots (
                slot TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
        )
        .execute(&self.db)
        .await
        .map_err(Error::Database)?;
        Ok(())
    }
}

#[async_trait]
impl SlotStore for SqliteSlotStore {
    async fn load(&self, slot: &str) -> Result<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM slots WHERE slot = ?")
            .bind(slot)
            .fetch_optional(&self.db)
            .await
            .map_err(Error::Database)?;
        Ok(row.map(|(value,)| value))
    }

    async fn save(&self, slot: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO slots (slot, value, updated_at) VALUES (?, ?, datetime('now'))
             ON CONFLICT(slot) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(slot)
        .bind(value)
        .execute(&self.db)
        .await
        .map_err(Error::Database)?;
        Ok(())
    }

    async fn delete(&self, slot: &str) -> Result<()> {
        sqlx::query("DELETE FROM slots WHERE slot = ?")
            .bind(slot)
            .execute(&self.db)
            .await
            .map_err(Error::Database)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_store() -> SqliteSlotStore {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        SqliteSlotStore::from_pool(pool).await.unwrap()
    }

    #[tokio::test]
    async fn test_connect_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("drafts.db");

        let store = SqliteSlotStore::connect(&path).await.unwrap();
        store.save("pressroom.draft", "{}").await.unwrap();

        assert!(path.exists());
        assert_eq!(
            store.load("pressroom.draft").await.unwrap().as_deref(),
            Some("{}")
        );
    }

    #[tokio::test]
    async fn test_load_missing_slot() {
        let store = setup_store().await;
        assert_eq!(store.load("pressroom.draft").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_overwrites_prior_snapshot() {
        let store = setup_store().await;
        store.save("pressroom.draft", "{\"v\":1}").await.unwrap();
        store.save("pressroom.draft", "{\"v\":2}").await.unwrap();

        let value = store.load("pressroom.draft").await.unwrap();
        assert_eq!(value.as_deref(), Some("{\"v\":2}"));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM slots")
            .fetch_one(&store.db)
            .await
            .unwrap();
        assert_eq!(count, 1, "Upsert must not create duplicate rows");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = setup_store().await;
        store.save("pressroom.preview", "{}").await.unwrap();
        store.delete("pressroom.preview").await.unwrap();
        store.delete("pressroom.preview").await.unwrap();
        assert_eq!(store.load("pressroom.preview").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let store = setup_store().await;
        store.save("pressroom.draft", "{\"a\":1}").await.unwrap();
        store.save("pressroom.preview", "{\"b\":2}").await.unwrap();

        store.delete("pressroom.preview").await.unwrap();
        assert!(store.load("pressroom.draft").await.unwrap().is_some());
    }
}
