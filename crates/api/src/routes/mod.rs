pub mod category;
pub mod health;
pub mod note;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                      list, create
/// /categories/{id}                                 get, delete
///
/// /notes                                           list, create
/// /notes/search?title=                             title search
/// /notes/{id}                                      get, update, delete
/// /notes/{id}/category/{category_id}               assign category (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/notes", note::router())
}
