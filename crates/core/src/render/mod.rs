//! Output rendering for process trees

pub mod text;

pub use text::render_tree;
