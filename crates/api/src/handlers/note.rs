//! Handlers for the `/notes` resource.
//!
//! Timestamps are taken here, once per request, and handed to the
//! repository: `createdAt` on create, `updatedAt` on every modification.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use notes_core::types::DbId;
use notes_db::models::note::{Note, NoteInput, NoteResponse, NoteSearchParams};
use notes_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

fn to_responses(notes: Vec<Note>) -> Vec<NoteResponse> {
    notes.into_iter().map(NoteResponse::from).collect()
}

/// GET /api/notes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<NoteResponse>>> {
    let notes = NoteRepo::list(&state.pool).await?;
    Ok(Json(to_responses(notes)))
}

/// GET /api/notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<NoteResponse>> {
    let note = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Note", id))?;
    Ok(Json(note.into()))
}

/// POST /api/notes
///
/// A `category` that does not exist is rejected by the foreign key.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NoteInput>,
) -> AppResult<(StatusCode, Json<NoteResponse>)> {
    let note = NoteRepo::create(&state.pool, &input, Utc::now()).await?;

    tracing::info!(
        note_id = note.id,
        category_id = ?note.category_id,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(note.into())))
}

/// PUT /api/notes/{id}
///
/// Replace title, content and category in full.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<NoteInput>,
) -> AppResult<Json<NoteResponse>> {
    let note = NoteRepo::update(&state.pool, id, &input, Utc::now())
        .await?
        .ok_or(AppError::not_found("Note", id))?;

    tracing::info!(note_id = id, category_id = ?note.category_id, "Note updated");

    Ok(Json(note.into()))
}

/// PUT /api/notes/{id}/category/{category_id}
///
/// 404 if either the note or the category is missing; the note is then left
/// untouched.
pub async fn assign_category(
    State(state): State<AppState>,
    IdPath((note_id, category_id)): IdPath<(DbId, DbId)>,
) -> AppResult<Json<NoteResponse>> {
    let Some(note) = NoteRepo::assign_category(&state.pool, note_id, category_id, Utc::now()).await?
    else {
        tracing::debug!(note_id, category_id, "Category assignment target missing");
        return Err(AppError::not_found("Note", note_id));
    };

    tracing::info!(note_id, category_id, "Note category assigned");

    Ok(Json(note.into()))
}

/// DELETE /api/notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NoteRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found("Note", id));
    }

    tracing::info!(note_id = id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/notes/search?title=
///
/// Case-insensitive substring match on the title. An empty `title` matches
/// every note; a missing one is a 400.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<NoteSearchParams>, QueryRejection>,
) -> AppResult<Json<Vec<NoteResponse>>> {
    let Query(params) = params?;
    let notes = NoteRepo::search_by_title(&state.pool, &params.title).await?;
    Ok(Json(to_responses(notes)))
}
