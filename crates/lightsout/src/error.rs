//! Error types for the scheduler core.

use thiserror::Error;

/// Errors surfaced to the host's error-handling path.
///
/// Nothing here is retried; each error aborts the scheduling cycle that
/// produced it and leaves the timer state untouched.
#[derive(Error, Debug)]
pub enum LightsOutError {
    /// Settings could not be read from the host.
    #[error("settings read failed: {0}")]
    Settings(String),

    /// A settings value is unusable.
    #[error("invalid settings value: {0}")]
    InvalidSettings(String),

    /// The host command sink rejected a dispatch.
    #[error("command dispatch failed: {0}")]
    Dispatch(String),
}

/// Result type for scheduler operations.
pub type Result<T> = std::result::Result<T, LightsOutError>;
