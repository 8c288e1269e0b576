//! Error types for mwi-doctor operations.
//!
//! This module defines [`DoctorError`], the error type for the few fallible
//! operations the tool performs internally, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Probe failures are never errors: the report captures them as data
//!   (error flags and recommendation text), so a broken environment still
//!   produces a complete document
//! - `DoctorError` covers environment-level faults (a shell that cannot be
//!   spawned, an unreadable stream); the probe runner converts these into
//!   failed outcomes at its boundary
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for mwi-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// The platform shell could not be started for a command probe.
    #[error("Failed to start shell for `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for mwi-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
