//! Category match engine for Categuess.
//!
//! This crate decides whether a free-text guess names a category.
//!
//! # Architecture
//!
//! ```text
//! "Dog-breeds!"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   NORMALIZER    │  → "breed dog"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CANONICAL /     │  → equal to normalize("Dog breeds")?
//! │ ALIASES         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MATCHER         │  → equal to a generated pattern ("types of dog breeds", ...)?
//! │ PATTERNS        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RELATED /       │  → single related word, or enough concept token hits
//! │ CONCEPT OVERLAP │
//! └─────────────────┘
//!          │
//!          ▼
//!   MatchVerdict { matched, reason }
//! ```
//!
//! Every function here is pure: no shared mutable state, no I/O. The word
//! lists in [`vocabulary`] are immutable constants.
//!
//! # Modules
//!
//! - [`vocabulary`] - Stopwords and structural words excluded from concepts
//! - [`normalize`] - Canonical, order-independent form of a phrase
//! - [`pattern`] - Phrases generated by a [`CategoryMatcher`](categuess_foundation::CategoryMatcher)
//! - [`concept`] - Concept token extraction and overlap scoring
//! - [`evaluator`] - Strategy precedence and the final verdict

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod concept;
pub mod evaluator;
pub mod normalize;
pub mod pattern;
pub mod vocabulary;

// Re-export main types for convenience
pub use concept::{ConceptOverlap, concept_tokens, filter_concept_tokens};
pub use evaluator::{evaluate, evaluate_normalized, is_match};
pub use normalize::{normalize, singularize};
pub use pattern::patterns_for;
