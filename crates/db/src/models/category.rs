//! Category model.

use std::collections::HashMap;

use notes_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::note::{CategoryNote, Note};

/// A row from the `categories` table.
///
/// Also the shape of the `category` object embedded in a note, which is why
/// it carries no notes of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// A category together with the notes filed under it.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithNotes {
    pub id: DbId,
    pub name: String,
    pub notes: Vec<CategoryNote>,
}

impl CategoryWithNotes {
    pub fn new(category: Category, notes: Vec<Note>) -> Self {
        Self {
            id: category.id,
            name: category.name,
            notes: notes.into_iter().map(CategoryNote::from).collect(),
        }
    }

    /// Attach each note to its category, preserving the order of both inputs.
    ///
    /// Notes without a category, or whose category is not in `categories`,
    /// are dropped.
    pub fn group(categories: Vec<Category>, notes: Vec<Note>) -> Vec<Self> {
        let mut by_category: HashMap<DbId, Vec<CategoryNote>> = HashMap::new();
        for note in notes {
            if let Some(category_id) = note.category_id {
                by_category
                    .entry(category_id)
                    .or_default()
                    .push(CategoryNote::from(note));
            }
        }

        categories
            .into_iter()
            .map(|category| Self {
                notes: by_category.remove(&category.id).unwrap_or_default(),
                id: category.id,
                name: category.name,
            })
            .collect()
    }
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[serde(default, deserialize_with = "super::null_as_empty")]
    #[validate(custom(function = "notes_core::validation::validate_category_name"))]
    pub name: String,
}
