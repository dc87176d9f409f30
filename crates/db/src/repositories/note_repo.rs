//! Repository for the `notes` table.
//!
//! Every read returns [`Note`] rows joined with the category name. Writes
//! use a data-modifying CTE so the joined row comes back from the same
//! statement. Timestamps are supplied by the caller.

use notes_core::search::contains_pattern;
use notes_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::note::{Note, NoteInput};

/// Raw column list for the `notes` table.
const COLUMNS: &str = "id, title, content, category_id, created_at, updated_at";

/// Column list of a note row (`n`) joined with its category (`c`).
const JOINED_COLUMNS: &str = "n.id, n.title, n.content, n.category_id, \
    c.name AS category_name, n.created_at, n.updated_at";

/// Provides CRUD and search operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List all notes, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM notes n
             LEFT JOIN categories c ON c.id = n.category_id
             ORDER BY n.id ASC"
        );
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM notes n
             LEFT JOIN categories c ON c.id = n.category_id
             WHERE n.id = $1"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the notes filed under any of the given categories, ordered by ID.
    pub async fn list_by_categories(
        pool: &PgPool,
        category_ids: &[DbId],
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM notes n
             JOIN categories c ON c.id = n.category_id
             WHERE n.category_id = ANY($1)
             ORDER BY n.id ASC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(category_ids)
            .fetch_all(pool)
            .await
    }

    /// Search notes whose title contains `title` as a case-insensitive
    /// substring. The query is matched literally; an empty query matches all.
    pub async fn search_by_title(pool: &PgPool, title: &str) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM notes n
             LEFT JOIN categories c ON c.id = n.category_id
             WHERE n.title ILIKE $1 ESCAPE '\\'
             ORDER BY n.id ASC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(contains_pattern(title))
            .fetch_all(pool)
            .await
    }

    /// Create a new note stamped with `now` as both creation and update time.
    ///
    /// A category ID that does not exist fails with a foreign-key violation
    /// on `fk_notes_category`.
    pub async fn create(
        pool: &PgPool,
        input: &NoteInput,
        now: Timestamp,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "WITH inserted AS (
                INSERT INTO notes (title, content, category_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $4)
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM inserted n
             LEFT JOIN categories c ON c.id = n.category_id"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id())
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Replace a note's title, content and category, refreshing `updated_at`.
    ///
    /// `created_at` is untouched and `updated_at` never moves backwards.
    /// Returns `None` if the note does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NoteInput,
        now: Timestamp,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "WITH updated AS (
                UPDATE notes SET
                    title = $2,
                    content = $3,
                    category_id = $4,
                    updated_at = GREATEST(updated_at, $5)
                WHERE id = $1
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM updated n
             LEFT JOIN categories c ON c.id = n.category_id"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id())
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// File a note under a category.
    ///
    /// Updates only when both the note and the category exist; otherwise
    /// returns `None` and nothing changes.
    pub async fn assign_category(
        pool: &PgPool,
        note_id: DbId,
        category_id: DbId,
        now: Timestamp,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "WITH updated AS (
                UPDATE notes SET
                    category_id = $2,
                    updated_at = GREATEST(updated_at, $3)
                WHERE id = $1
                  AND EXISTS (SELECT 1 FROM categories WHERE id = $2 FOR KEY SHARE)
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM updated n
             LEFT JOIN categories c ON c.id = n.category_id"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(note_id)
            .bind(category_id)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all notes.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
