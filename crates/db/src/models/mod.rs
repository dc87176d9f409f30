//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Serialize` response shapes for the JSON API
//! - `Deserialize` + `Validate` input DTOs

use serde::{Deserialize, Deserializer};

pub mod category;
pub mod note;

/// Deserialize a required text field, reading JSON `null` as `""`.
///
/// Paired with `#[serde(default)]` so a missing key and a `null` value both
/// reach the `not_blank` validator instead of failing in the JSON layer.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
