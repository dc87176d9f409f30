//! Field validators for note and category input.
//!
//! The functions here plug into `#[validate(custom(function = ...))]` on the
//! request DTOs in `notes-db`. [`field_messages`] flattens a
//! [`ValidationErrors`] tree into the `{ field: [message, ...] }` map that the
//! API returns in 400 responses.

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{ValidationError, ValidationErrors};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a category name, in characters.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 50;

/// Error code for a missing, empty or whitespace-only field.
pub const CODE_BLANK: &str = "blank";

/// Error code for a field longer than its limit.
pub const CODE_TOO_LONG: &str = "too_long";

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Reject empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error(CODE_BLANK, "must not be blank".to_string()));
    }
    Ok(())
}

/// Validate a category name: non-blank and at most
/// [`MAX_CATEGORY_NAME_LENGTH`] characters.
///
/// Length is counted in `char`s so multi-byte names (e.g. Polish diacritics)
/// get the full allowance.
pub fn validate_category_name(name: &str) -> Result<(), ValidationError> {
    not_blank(name)?;
    if name.chars().count() > MAX_CATEGORY_NAME_LENGTH {
        return Err(error(
            CODE_TOO_LONG,
            format!("must be at most {MAX_CATEGORY_NAME_LENGTH} characters"),
        ));
    }
    Ok(())
}

fn error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

// ---------------------------------------------------------------------------
// Error flattening
// ---------------------------------------------------------------------------

/// Flatten field-level validation errors into `field -> messages`.
///
/// Errors without a message fall back to their code. Fields are sorted so the
/// response body is deterministic.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
