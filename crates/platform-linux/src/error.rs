//! Error types for /proc snapshot operations

use thiserror::Error;

/// Errors that can occur while reading the process table
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Process not found
    #[error("process {pid} not found")]
    ProcessNotFound { pid: u32 },

    /// Enumerating /proc failed outright
    #[error("failed to enumerate /proc: {0}")]
    SnapshotFailed(String),
}

impl SnapshotError {
    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, SnapshotError::ProcessNotFound { .. })
    }
}

/// Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;
