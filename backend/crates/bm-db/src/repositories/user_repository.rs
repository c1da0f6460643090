//! User repository - the credential store.
//!
//! Email uniqueness is left to the UNIQUE constraint on `users.email`; a
//! duplicate insert or update surfaces as `DbError::ConstraintViolation`.

use crate::row::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use bm_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    hash: String,
    first_name: Option<String>,
    last_name: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: parse_uuid(&r.id, "users.id")?,
            email: r.email,
            hash: r.hash,
            first_name: r.first_name,
            last_name: r.last_name,
            created_at: parse_timestamp(r.created_at, "users.created_at")?,
            updated_at: parse_timestamp(r.updated_at, "users.updated_at")?,
        })
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (
                  id, email, hash, first_name, last_name, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, email, hash, first_name, last_name, created_at, updated_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, email, hash, first_name, last_name, created_at, updated_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Persist profile fields and credentials. Fails with `NotFound` when the
    /// user no longer exists.
    pub async fn update(&self, user: &User) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
              UPDATE users
              SET email = ?, hash = ?, first_name = ?, last_name = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&user.email)
        .bind(&user.hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.updated_at.timestamp())
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity: "User",
                id: user.id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
