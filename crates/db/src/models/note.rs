//! Note model.

use notes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::category::Category;

/// A row from the `notes` table joined with its category's name.
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Note {
    /// The note's category, if it has one.
    pub fn category(&self) -> Option<Category> {
        match (self.category_id, &self.category_name) {
            (Some(id), Some(name)) => Some(Category {
                id,
                name: name.clone(),
            }),
            _ => None,
        }
    }
}

/// JSON shape of a note returned by the `/notes` endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: Option<Category>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            category: note.category(),
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// JSON shape of a note listed inside its category (no `category` field).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNote {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Note> for CategoryNote {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// Reference to an existing category inside a note payload: `{"id": 3}`.
///
/// Any other fields (e.g. a `name` echoed back by a client) are ignored.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CategoryRef {
    pub id: DbId,
}

/// DTO for creating a note, and for replacing one in full on update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NoteInput {
    #[serde(default, deserialize_with = "super::null_as_empty")]
    #[validate(custom(function = "notes_core::validation::not_blank"))]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    #[validate(custom(function = "notes_core::validation::not_blank"))]
    pub content: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl NoteInput {
    pub fn category_id(&self) -> Option<DbId> {
        self.category.map(|c| c.id)
    }
}

/// Query parameters for `GET /notes/search?title=`.
#[derive(Debug, Deserialize)]
pub struct NoteSearchParams {
    pub title: String,
}
