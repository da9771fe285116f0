//! rstree-platform-linux: Linux collectors for rstree
//!
//! Reads the /proc filesystem and produces the flat process records the
//! core tree builder consumes.

pub mod error;
#[cfg(target_os = "linux")]
pub mod process_snapshot;

pub use error::*;
#[cfg(target_os = "linux")]
pub use process_snapshot::*;

// Stub for non-Linux platforms (for cross-compilation/testing)
#[cfg(not(target_os = "linux"))]
pub fn list_processes() -> error::SnapshotResult<Vec<rstree_core::ProcessRecord>> {
    Ok(Vec::new())
}
