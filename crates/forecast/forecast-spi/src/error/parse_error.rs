//! Field-level parse errors
//!
//! Input parsing never aborts a run. Each field parser returns one of these
//! and the caller decides the fallback (drop the entry, use `0.0`, use the
//! configured default).

use thiserror::Error;

/// Reasons a raw input field could not be used as-is
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Field absent or null
    #[error("Missing field '{0}'")]
    Missing(&'static str),

    /// Field holds a JSON type the parser does not accept
    #[error("Unexpected type for '{field}': {found}")]
    UnexpectedType { field: &'static str, found: String },

    /// Date string not in a recognised ISO form
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// String could not be read as a number
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Number is NaN or infinite
    #[error("Non-finite number")]
    NonFinite,

    /// Count is zero, negative or out of range
    #[error("Count out of range: {0}")]
    CountOutOfRange(String),

    /// Document is not valid JSON or not an object
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}
