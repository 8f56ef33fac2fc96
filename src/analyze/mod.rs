//! Whole-board analysis pipeline.
//!
//! Runs the effort model over every text-bearing button on every reachable
//! page to produce effort-table rows, and derives vocabulary summaries and
//! board-to-board comparisons from them.

pub mod scorer;
pub mod summary;

// Re-export commonly used types
pub use scorer::*;
pub use summary::*;
