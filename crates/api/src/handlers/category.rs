//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use notes_core::types::DbId;
use notes_db::models::category::{CategoryWithNotes, CreateCategory};
use notes_db::repositories::{CategoryRepo, NoteRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

/// GET /api/categories
///
/// List every category with the notes filed under it.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryWithNotes>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    let ids: Vec<DbId> = categories.iter().map(|c| c.id).collect();
    let notes = NoteRepo::list_by_categories(&state.pool, &ids).await?;
    Ok(Json(CategoryWithNotes::group(categories, notes)))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<CategoryWithNotes>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Category", id))?;
    let notes = NoteRepo::list_by_categories(&state.pool, &[id]).await?;
    Ok(Json(CategoryWithNotes::new(category, notes)))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<CategoryWithNotes>)> {
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        "Category created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CategoryWithNotes::new(category, Vec::new())),
    ))
}

/// DELETE /api/categories/{id}
///
/// Delete a category together with every note filed under it.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found("Category", id));
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
