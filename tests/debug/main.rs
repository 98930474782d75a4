//! Integration tests for Layer 2: Debug
//!
//! Tests for match traces, the explainer, and trace formatting.

mod explainer;
mod format;
mod properties;
mod trace;
