//! Core data model for process tree construction
//!
//! These types are OS-agnostic: a platform collaborator produces
//! [`ProcessRecord`]s and the tree builder consumes them.

use serde::{Deserialize, Serialize};

/// Parent pid sentinel meaning "no parent"; marks the root of the tree.
pub const NO_PARENT: u32 = 0;

/// A single process at snapshot time: a flat (pid, ppid, name) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process ID, unique within one snapshot
    pub pid: u32,
    /// Parent process ID ([`NO_PARENT`] for the root)
    pub ppid: u32,
    /// Display name (the kernel `comm` field, already stripped)
    pub name: String,
}

impl ProcessRecord {
    /// Create a record from its parts.
    pub fn new(pid: u32, ppid: u32, name: impl Into<String>) -> Self {
        Self {
            pid,
            ppid,
            name: name.into(),
        }
    }

    /// Whether this record carries the "no parent" sentinel.
    pub fn is_root(&self) -> bool {
        self.ppid == NO_PARENT
    }

    /// Data anomaly: a record claiming to be its own parent.
    pub fn is_self_parented(&self) -> bool {
        self.pid == self.ppid && self.ppid != NO_PARENT
    }
}

impl std::fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (pid {})", self.name, self.pid)
    }
}

/// Sibling ordering policy, applied to each parent's child list
/// independently of every other parent's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Ascending byte-wise lexicographic order on the display name
    #[default]
    ByName,
    /// Ascending numeric pid order
    ByPid,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::ByName => write!(f, "name"),
            SortMode::ByPid => write!(f, "pid"),
        }
    }
}
