use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};

use crate::db::models::User;
use crate::db::schema::SQLITE_INIT;
use crate::error::QuillError;

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if missing) the SQLite database behind `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, QuillError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), QuillError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new user in a single statement. The UNIQUE constraint on
    /// `username` makes the duplicate check atomic: a concurrent insert of
    /// the same name loses here with `UsernameTaken`, never with two rows.
    pub async fn create(&self, username: &str, password_hash: &str) -> Result<User, QuillError> {
        let row = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?) RETURNING id")
            .bind(username)
            .bind(password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => QuillError::UsernameTaken,
                _ => QuillError::Database(e),
            })?;
        let id: i64 = row.try_get("id").map_err(QuillError::Database)?;
        Ok(User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    /// Exact-match lookup; no case folding.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, QuillError> {
        let row = sqlx::query("SELECT id, username, password_hash FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_model).transpose()
    }

    fn row_to_model(row: SqliteRow) -> Result<User, QuillError> {
        let id: i64 = row.try_get("id")?;
        let username: String = row.try_get("username")?;
        let password_hash: String = row.try_get("password_hash")?;
        Ok(User {
            id,
            username,
            password_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_storage() -> UserStorage {
        // single connection so the in-memory database is shared
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        let storage = UserStorage::new(pool);
        storage
            .init_schema()
            .await
            .expect("failed to initialize schema");
        storage
    }

    #[tokio::test]
    async fn create_then_find_round_trips() {
        let storage = memory_storage().await;

        let created = storage
            .create("alice", "$2b$12$fakehash")
            .await
            .expect("insert should succeed");
        assert!(created.id > 0);

        let found = storage
            .find_by_username("alice")
            .await
            .expect("lookup should succeed")
            .expect("alice should exist");
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected_atomically() {
        let storage = memory_storage().await;

        storage
            .create("bob", "hash-one")
            .await
            .expect("first insert should succeed");
        let err = storage
            .create("bob", "hash-two")
            .await
            .expect_err("second insert must fail");
        assert!(matches!(err, QuillError::UsernameTaken));
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive() {
        let storage = memory_storage().await;

        storage
            .create("carol", "hash")
            .await
            .expect("insert should succeed");
        let miss = storage
            .find_by_username("Carol")
            .await
            .expect("lookup should succeed");
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let storage = memory_storage().await;
        storage
            .init_schema()
            .await
            .expect("re-running the DDL should be a no-op");
    }
}
