//! Sentence-level effort resolution.
//!
//! Given free text and a precomputed effort table, produce the ordered
//! selection steps and total effort needed to construct it, using exact
//! phrase matching, fuzzy phrase matching, per-word lookup, and a
//! letter-by-letter spelling fallback.

pub mod cache;
pub mod resolver;
pub mod similarity;

// Re-export commonly used types
pub use cache::*;
pub use resolver::*;
pub use similarity::*;
