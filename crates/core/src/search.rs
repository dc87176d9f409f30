//! Title search pattern construction.
//!
//! Note search is a case-insensitive substring match. The query is matched
//! literally: `%`, `_` and the escape character itself are escaped before the
//! pattern is handed to `ILIKE ... ESCAPE '\'`.

/// Escape character used in `LIKE` / `ILIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Escape `LIKE` metacharacters so `query` matches only itself.
pub fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

/// Build a "contains" pattern for `query`.
///
/// An empty query yields `%%`, which matches every title.
pub fn contains_pattern(query: &str) -> String {
    format!("%{}%", escape_like(query))
}
