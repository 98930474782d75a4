//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for match traces.

use std::fmt::Write;

use crate::explain::MatchTrace;

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting match traces.
pub trait TraceFormatter {
    /// Formats a single trace to a string.
    fn format(&self, trace: &MatchTrace) -> String;

    /// Formats multiple traces.
    fn format_many(&self, traces: &[&MatchTrace]) -> String {
        traces
            .iter()
            .map(|t| self.format(t))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats traces as an indented block of labelled lines.
#[derive(Clone, Debug)]
pub struct HumanFormatter {
    /// Whether to include the generated matcher patterns.
    pub show_patterns: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_patterns: true,
        }
    }

    /// Builder method to hide matcher patterns.
    #[must_use]
    pub fn without_patterns(mut self) -> Self {
        self.show_patterns = false;
        self
    }

    fn token_list(tokens: &[String]) -> String {
        format!("[{}]", tokens.join(", "))
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, trace: &MatchTrace) -> String {
        let mut out = String::new();
        let status = if trace.matched() { "MATCH" } else { "MISS" };

        let _ = writeln!(out, "{status} {:?} ({})", trace.guess, trace.verdict.reason);
        let _ = writeln!(out, "  normalized: {:?}", trace.normalized_guess);
        let _ = writeln!(
            out,
            "  guess concepts: {}",
            Self::token_list(&trace.guess_concept_tokens)
        );
        let _ = writeln!(
            out,
            "  category concepts: {}",
            Self::token_list(&trace.category_concept_tokens)
        );
        if self.show_patterns {
            if let Some(patterns) = &trace.matcher_patterns {
                let _ = writeln!(out, "  matcher patterns: {}", Self::token_list(patterns));
            }
        }
        let _ = write!(
            out,
            "  concept hits: {}/{}",
            trace.hit_count, trace.required_hits
        );
        out
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats traces as JSON objects.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print JSON.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, trace: &MatchTrace) -> String {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(trace)
        } else {
            serde_json::to_string(trace)
        };
        // MatchTrace holds only strings, numbers, and plain enums
        encoded.unwrap_or_else(|e| format!("{{\"error\":{:?}}}", e.to_string()))
    }

    fn format_many(&self, traces: &[&MatchTrace]) -> String {
        traces
            .iter()
            .map(|t| self.format(t))
            .collect::<Vec<_>>()
            .join(",\n")
    }
}
