//! User directory database operations

use anyhow::Result;
use sqlx::SqlitePool;

/// A user row in the directory
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    pub id: String,
    pub fullname: Option<String>,
    pub email: Option<String>,
}

/// Input for creating a directory entry
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub fullname: Option<String>,
    pub email: Option<String>,
}

/// Users repository for database operations
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every user in insertion order
    pub async fn list(&self) -> Result<Vec<UserRecord>> {
        let records = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, fullname, email
            FROM users
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Insert a user with a generated id
    pub async fn create(&self, user: CreateUser) -> Result<UserRecord> {
        let id = uuid::Uuid::new_v4().to_string();
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (id, fullname, email)
            VALUES (?, ?, ?)
            RETURNING id, fullname, email
            "#,
        )
        .bind(&id)
        .bind(&user.fullname)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }
}
