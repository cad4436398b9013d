//! SQLite persistence for contact messages.

use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::Row;

use crate::models::{NewMessage, StoredMessage};

/// Message store over a SQLite connection pool.
#[derive(Clone)]
pub struct MessageStore {
    pool: SqlitePool,
}

impl MessageStore {
    /// Open the database, creating the file on first run, and make sure the
    /// messages table exists.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contact_messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&pool)
        .await?;

        tracing::info!("SQLite table 'contact_messages' created or verified");

        Ok(Self { pool })
    }

    /// Insert a message and return it with its assigned id and timestamp.
    pub async fn insert(&self, message: &NewMessage) -> Result<StoredMessage, sqlx::Error> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO contact_messages (name, email, message, created_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(StoredMessage {
            id: result.last_insert_rowid(),
            name: message.name.clone(),
            email: message.email.clone(),
            message: message.message.clone(),
            created_at,
        })
    }

    /// The most recent messages, newest first, at most `limit` of them.
    pub async fn recent(&self, limit: u32) -> Result<Vec<StoredMessage>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, name, email, message, created_at FROM contact_messages \
             ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(StoredMessage {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    email: row.try_get("email")?,
                    message: row.try_get("message")?,
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect()
    }

    /// Number of stored messages.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&self.pool)
            .await
    }

    /// Live connection probe for the health endpoint.
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn test_store() -> (MessageStore, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("messages.db").display());
        let store = MessageStore::connect(&url).await.unwrap();
        (store, dir)
    }

    fn new_message(name: &str) -> NewMessage {
        NewMessage {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            message: "Interested in the Fjord Table.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_connect_creates_the_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.db");

        let _store = MessageStore::connect(&format!("sqlite:{}", path.display()))
            .await
            .unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let (store, _dir) = test_store().await;

        let first = store.insert(&new_message("Ada")).await.unwrap();
        let second = store.insert(&new_message("Grace")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_insert_round_trips_through_recent() {
        let (store, _dir) = test_store().await;
        let stored = store.insert(&new_message("Ada")).await.unwrap();

        let listed = store.recent(10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, stored.id);
        assert_eq!(listed[0].name, "Ada");
        assert_eq!(listed[0].email, "ada@example.com");
        assert_eq!(listed[0].message, "Interested in the Fjord Table.");
        assert_eq!(listed[0].created_at.timestamp(), stored.created_at.timestamp());
    }

    #[tokio::test]
    async fn test_recent_lists_newest_first_and_honors_limit() {
        let (store, _dir) = test_store().await;
        for name in ["Ada", "Grace", "Edsger"] {
            store.insert(&new_message(name)).await.unwrap();
        }

        let listed = store.recent(2).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Edsger");
        assert_eq!(listed[1].name, "Grace");
    }

    #[tokio::test]
    async fn test_reconnect_keeps_existing_messages() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("messages.db").display());

        let store = MessageStore::connect(&url).await.unwrap();
        store.insert(&new_message("Ada")).await.unwrap();
        drop(store);

        // Create-if-missing must not wipe data across restarts.
        let store = MessageStore::connect(&url).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_ping_reports_a_live_connection() {
        let (store, _dir) = test_store().await;
        assert!(store.ping().await);
    }
}
