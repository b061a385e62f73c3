//! Error types for flowtrack-core

use thiserror::Error;

/// Result type alias using flowtrack-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in flowtrack-core operations
///
/// Storage corruption never appears here: the storage adapter absorbs it,
/// logs a diagnostic, and reports the value as absent. Every variant below
/// leaves persisted state exactly as it was before the failed operation.
#[derive(Error, Debug)]
pub enum Error {
    /// Required text was empty or whitespace-only after trimming
    #[error("Text cannot be empty")]
    EmptyText,

    /// A required form field was left blank
    #[error("Please fill all fields.")]
    MissingFields,

    /// Signup attempted with an email that already has an account
    #[error("An account with that email already exists. Please login.")]
    EmailConflict(String),

    /// Login email/password pair did not match the stored account
    #[error("Invalid credentials. Try again.")]
    InvalidCredentials,

    /// Record or profile not found
    #[error("Not found: {0}")]
    NotFound(String),
}
