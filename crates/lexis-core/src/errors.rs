//! Cross-cutting error types for Lexis.
//!
//! Loader and configuration errors live in their own crates. A unified error
//! is deferred to `lexis-cli`, where everything converges on `anyhow`.

use thiserror::Error;

/// Errors that can be raised by core components.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A preference store could not be read or written.
    #[error("Preference store error: {0}")]
    Preference(String),

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
