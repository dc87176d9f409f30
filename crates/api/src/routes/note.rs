//! Route definitions for notes.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::note;
use crate::state::AppState;

/// Routes mounted at `/notes`.
///
/// ```text
/// GET    /                                   -> list
/// POST   /                                   -> create
/// GET    /search?title=                      -> search
/// GET    /{id}                               -> get_by_id
/// PUT    /{id}                               -> update
/// DELETE /{id}                               -> delete
/// PUT    /{id}/category/{category_id}        -> assign_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(note::list).post(note::create))
        .route("/search", get(note::search))
        .route(
            "/{id}",
            get(note::get_by_id).put(note::update).delete(note::delete),
        )
        .route(
            "/{id}/category/{category_id}",
            put(note::assign_category),
        )
}
