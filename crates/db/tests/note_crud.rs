//! Integration tests for note persistence.
//!
//! Exercises `NoteRepo` against a real database:
//! - Create, update, delete and the category join
//! - Timestamp handling on create and update
//! - Category assignment and foreign-key violations
//! - Case-insensitive title search

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use notes_db::models::category::CreateCategory;
use notes_db::models::note::{CategoryRef, NoteInput};
use notes_db::repositories::{CategoryRepo, NoteRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_note(title: &str, category_id: Option<i64>) -> NoteInput {
    NoteInput {
        title: title.to_string(),
        content: format!("Content of {title}"),
        category: category_id.map(|id| CategoryRef { id }),
    }
}

async fn new_category(pool: &PgPool, name: &str) -> i64 {
    CategoryRepo::create(
        pool,
        &CreateCategory {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_search_notes(pool: &PgPool) {
    let now = Utc::now();
    for title in [
        "Projekt z baz danych",
        "Zakupy na weekend",
        "Notatka z baz danych",
    ] {
        NoteRepo::create(pool, &new_note(title, None), now)
            .await
            .unwrap();
    }
}

async fn search_titles(pool: &PgPool, query: &str) -> Vec<String> {
    NoteRepo::search_by_title(pool, query)
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect()
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_note_without_category(pool: PgPool) {
    let note = NoteRepo::create(&pool, &new_note("Testowa", None), Utc::now())
        .await
        .unwrap();

    assert!(note.id > 0);
    assert_eq!(note.title, "Testowa");
    assert!(note.category().is_none());
    assert_eq!(note.created_at, note.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_note_joins_category_name(pool: PgPool) {
    let category_id = new_category(&pool, "Uczelnia").await;
    let note = NoteRepo::create(&pool, &new_note("Wyklad", Some(category_id)), Utc::now())
        .await
        .unwrap();

    let category = note.category().expect("Note should carry its category");
    assert_eq!(category.id, category_id);
    assert_eq!(category.name, "Uczelnia");

    let found = NoteRepo::find_by_id(&pool, note.id).await.unwrap().unwrap();
    assert_eq!(found.category_name.as_deref(), Some("Uczelnia"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fk_violation_note_bad_category(pool: PgPool) {
    let err = NoteRepo::create(&pool, &new_note("Ghost", Some(999_999)), Utc::now())
        .await
        .unwrap_err();

    assert_matches!(err, sqlx::Error::Database(ref db_err) => {
        assert_eq!(db_err.code().as_deref(), Some("23503"));
        assert_eq!(db_err.constraint(), Some("fk_notes_category"));
    });
    assert_eq!(NoteRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_categories_scopes_results(pool: PgPool) {
    let a = new_category(&pool, "A").await;
    let b = new_category(&pool, "B").await;
    let now = Utc::now();
    NoteRepo::create(&pool, &new_note("a1", Some(a)), now).await.unwrap();
    NoteRepo::create(&pool, &new_note("b1", Some(b)), now).await.unwrap();
    NoteRepo::create(&pool, &new_note("a2", Some(a)), now).await.unwrap();
    NoteRepo::create(&pool, &new_note("none", None), now).await.unwrap();

    let titles: Vec<String> = NoteRepo::list_by_categories(&pool, &[a])
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, vec!["a1", "a2"]);

    assert_eq!(NoteRepo::list(&pool).await.unwrap().len(), 4);
    assert_eq!(NoteRepo::count(&pool).await.unwrap(), 4);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_fields_and_keeps_created_at(pool: PgPool) {
    let category_id = new_category(&pool, "Praca").await;
    let created_at = Utc::now() - Duration::minutes(5);
    let note = NoteRepo::create(&pool, &new_note("Stary", None), created_at)
        .await
        .unwrap();

    let updated = NoteRepo::update(
        &pool,
        note.id,
        &NoteInput {
            title: "Nowy".to_string(),
            content: "Nowa tresc".to_string(),
            category: Some(CategoryRef { id: category_id }),
        },
        Utc::now(),
    )
    .await
    .unwrap()
    .expect("Update should return the row");

    assert_eq!(updated.id, note.id);
    assert_eq!(updated.title, "Nowy");
    assert_eq!(updated.content, "Nowa tresc");
    assert_eq!(updated.category_id, Some(category_id));
    assert_eq!(updated.created_at, note.created_at);
    assert!(updated.updated_at > note.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_can_clear_category(pool: PgPool) {
    let category_id = new_category(&pool, "Praca").await;
    let note = NoteRepo::create(&pool, &new_note("Z kategoria", Some(category_id)), Utc::now())
        .await
        .unwrap();

    let updated = NoteRepo::update(&pool, note.id, &new_note("Bez", None), Utc::now())
        .await
        .unwrap()
        .unwrap();
    assert!(updated.category().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_never_moves_updated_at_backwards(pool: PgPool) {
    let now = Utc::now();
    let note = NoteRepo::create(&pool, &new_note("Zegar", None), now)
        .await
        .unwrap();

    let updated = NoteRepo::update(
        &pool,
        note.id,
        &new_note("Zegar 2", None),
        now - Duration::hours(1),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.updated_at, note.updated_at);
    assert!(updated.created_at <= updated.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_returns_none(pool: PgPool) {
    let result = NoteRepo::update(&pool, 999_999, &new_note("Ghost", None), Utc::now())
        .await
        .unwrap();
    assert!(result.is_none(), "Updating non-existent ID should return None");
}

// ---------------------------------------------------------------------------
// Category assignment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_category(pool: PgPool) {
    let category_id = new_category(&pool, "Osobiste").await;
    let note = NoteRepo::create(&pool, &new_note("Lista", None), Utc::now())
        .await
        .unwrap();

    let assigned = NoteRepo::assign_category(&pool, note.id, category_id, Utc::now())
        .await
        .unwrap()
        .expect("Both rows exist");
    assert_eq!(assigned.category_name.as_deref(), Some("Osobiste"));
    assert!(assigned.updated_at >= note.updated_at);
    assert_eq!(assigned.created_at, note.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_nonexistent_category_leaves_note_unchanged(pool: PgPool) {
    let category_id = new_category(&pool, "Pierwsza").await;
    let note = NoteRepo::create(&pool, &new_note("Lista", Some(category_id)), Utc::now())
        .await
        .unwrap();

    let result = NoteRepo::assign_category(&pool, note.id, 999_999, Utc::now())
        .await
        .unwrap();
    assert!(result.is_none());

    let reloaded = NoteRepo::find_by_id(&pool, note.id).await.unwrap().unwrap();
    assert_eq!(reloaded.category_id, Some(category_id));
    assert_eq!(reloaded.updated_at, note.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_to_nonexistent_note_returns_none(pool: PgPool) {
    let category_id = new_category(&pool, "Pierwsza").await;
    let result = NoteRepo::assign_category(&pool, 999_999, category_id, Utc::now())
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_note(pool: PgPool) {
    let note = NoteRepo::create(&pool, &new_note("Do usuniecia", None), Utc::now())
        .await
        .unwrap();

    assert!(NoteRepo::delete(&pool, note.id).await.unwrap());
    assert!(NoteRepo::find_by_id(&pool, note.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_note_returns_false(pool: PgPool) {
    NoteRepo::create(&pool, &new_note("Zostaje", None), Utc::now())
        .await
        .unwrap();

    assert!(!NoteRepo::delete(&pool, 999_999).await.unwrap());
    assert_eq!(NoteRepo::count(&pool).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_insensitive_substring(pool: PgPool) {
    seed_search_notes(&pool).await;

    assert_eq!(
        search_titles(&pool, "baz danych").await,
        vec!["Projekt z baz danych", "Notatka z baz danych"]
    );
    assert_eq!(search_titles(&pool, "ZAKUPY").await, vec!["Zakupy na weekend"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_without_match_is_empty(pool: PgPool) {
    seed_search_notes(&pool).await;
    assert!(search_titles(&pool, "nie istnieje").await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_search_matches_everything(pool: PgPool) {
    seed_search_notes(&pool).await;
    assert_eq!(search_titles(&pool, "").await.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    let now = Utc::now();
    NoteRepo::create(&pool, &new_note("Rabat 50% na wszystko", None), now)
        .await
        .unwrap();
    NoteRepo::create(&pool, &new_note("Rabat 500 zl", None), now)
        .await
        .unwrap();

    assert_eq!(search_titles(&pool, "50%").await, vec!["Rabat 50% na wszystko"]);
    assert!(search_titles(&pool, "_").await.is_empty());
}
