//! Domain primitives shared by the notes service crates.
//!
//! Holds no I/O: identifier and timestamp aliases, the domain error type,
//! field validators used by the request DTOs, and the title-search pattern
//! builder.

pub mod error;
pub mod search;
pub mod types;
pub mod validation;
