//! Explanation system for Categuess.
//!
//! Answers "why did this guess match (or not)?":
//! - [`explain_match`] - Full trace for one guess against one category
//! - [`MatchExplainer`] - Config-driven wrapper used by the game loop

pub mod explainer;
pub mod trace;

pub use explainer::{Explained, MatchExplainer};
pub use trace::{MatchTrace, explain_match};
