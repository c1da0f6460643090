//! Bookmark repository.
//!
//! Listing and owner-scoped lookups filter on `user_id` in SQL so other users'
//! rows are never loaded. `update` and `delete` repeat the owner predicate,
//! making the ownership check and the write a single statement.

use crate::row::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use bm_core::Bookmark;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct BookmarkRow {
    id: String,
    user_id: String,
    title: String,
    description: Option<String>,
    link: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<BookmarkRow> for Bookmark {
    type Error = DbError;

    fn try_from(r: BookmarkRow) -> DbErrorResult<Self> {
        Ok(Bookmark {
            id: parse_uuid(&r.id, "bookmarks.id")?,
            user_id: parse_uuid(&r.user_id, "bookmarks.user_id")?,
            title: r.title,
            description: r.description,
            link: r.link,
            created_at: parse_timestamp(r.created_at, "bookmarks.created_at")?,
            updated_at: parse_timestamp(r.updated_at, "bookmarks.updated_at")?,
        })
    }
}

#[derive(Clone)]
pub struct BookmarkRepository {
    pool: SqlitePool,
}

impl BookmarkRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, bookmark: &Bookmark) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO bookmarks (
                  id, user_id, title, description, link, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(bookmark.id.to_string())
        .bind(bookmark.user_id.to_string())
        .bind(&bookmark.title)
        .bind(&bookmark.description)
        .bind(&bookmark.link)
        .bind(bookmark.created_at.timestamp())
        .bind(bookmark.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Unscoped lookup, used as the existence check before an ownership check
    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Bookmark>> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
              SELECT id, user_id, title, description, link, created_at, updated_at
              FROM bookmarks
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Bookmark::try_from).transpose()
    }

    pub async fn find_by_id_for_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> DbErrorResult<Option<Bookmark>> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
              SELECT id, user_id, title, description, link, created_at, updated_at
              FROM bookmarks
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Bookmark::try_from).transpose()
    }

    pub async fn list_by_owner(&self, owner_id: Uuid) -> DbErrorResult<Vec<Bookmark>> {
        let rows = sqlx::query_as::<_, BookmarkRow>(
            r#"
              SELECT id, user_id, title, description, link, created_at, updated_at
              FROM bookmarks
              WHERE user_id = ?
              ORDER BY created_at ASC, rowid ASC
              "#,
        )
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Bookmark::try_from).collect()
    }

    /// Persist edited fields. Matches on both id and owner; zero rows means
    /// the bookmark vanished or changed hands and is reported as `NotFound`.
    pub async fn update(&self, bookmark: &Bookmark) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
              UPDATE bookmarks
              SET title = ?, description = ?, link = ?, updated_at = ?
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(&bookmark.title)
        .bind(&bookmark.description)
        .bind(&bookmark.link)
        .bind(bookmark.updated_at.timestamp())
        .bind(bookmark.id.to_string())
        .bind(bookmark.user_id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity: "Bookmark",
                id: bookmark.id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> DbErrorResult<()> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity: "Bookmark",
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
