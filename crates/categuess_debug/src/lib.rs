//! Match diagnostics for Categuess.
//!
//! This crate provides:
//! - [`MatchTrace`] - Why a guess did or did not match a category
//! - [`MatchExplainer`] - Evaluates guesses and emits traces when enabled
//! - [`TraceFormatter`] - Human-readable and JSON trace output
//! - [`DebugConfig`] - Development-mode switches

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod explain;
pub mod format;

pub use config::DebugConfig;
pub use explain::{MatchExplainer, MatchTrace, explain_match};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
