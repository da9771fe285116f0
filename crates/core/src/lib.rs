//! rstree-core: process tree construction and rendering for rstree
//!
//! This crate contains the OS-agnostic core of the tool: it takes a flat
//! snapshot of (pid, ppid, name) records, rebuilds the parent/child forest,
//! orders each sibling set, and renders the result as indented text.
//!
//! # Modules
//!
//! - [`models`] - Core data structures (ProcessRecord, SortMode)
//! - [`tree`] - The ProcessTree builder and sibling ordering
//! - [`render`] - Output rendering (indented text)
//!
//! # Example
//!
//! ```
//! use rstree_core::{render, ProcessRecord, ProcessTree, SortMode};
//!
//! let records = vec![
//!     ProcessRecord::new(1, 0, "init"),
//!     ProcessRecord::new(10, 1, "bash"),
//! ];
//! let mut tree = ProcessTree::build(records).expect("snapshot has a root");
//! tree.sort_children(SortMode::ByName);
//! print!("{}", render::render_tree(&tree, false));
//! ```

pub mod models;
pub mod render;
pub mod tree;

// Re-export commonly used types at crate root
pub use models::{ProcessRecord, SortMode, NO_PARENT};
pub use tree::{ProcessTree, TreeError};
