//! Config-driven match evaluation.

use std::io::{self, Write};

use categuess_foundation::{Category, MatchVerdict};
use categuess_matcher::evaluate;

use super::trace::{MatchTrace, explain_match};
use crate::config::DebugConfig;
use crate::format::{HumanFormatter, JsonFormatter, TraceFormatter};

/// Result of evaluating a guess through a [`MatchExplainer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explained {
    /// The verdict.
    pub verdict: MatchVerdict,
    /// The trace, present only when diagnostics are enabled.
    pub trace: Option<MatchTrace>,
}

/// Evaluates guesses, building traces only when diagnostics are enabled.
///
/// With diagnostics off this is exactly [`categuess_matcher::evaluate`].
/// With them on, the verdict is read from the trace, which is computed by
/// the same evaluator.
#[derive(Clone, Debug, Default)]
pub struct MatchExplainer {
    config: DebugConfig,
}

impl MatchExplainer {
    /// Creates an explainer with the given configuration.
    #[must_use]
    pub fn new(config: DebugConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &DebugConfig {
        &self.config
    }

    /// Turns diagnostics on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Evaluates `guess` against `category`.
    #[must_use]
    pub fn evaluate(&self, guess: &str, category: &Category) -> Explained {
        if !self.config.enabled {
            return Explained {
                verdict: evaluate(guess, category),
                trace: None,
            };
        }

        let trace = explain_match(guess, category);
        Explained {
            verdict: trace.verdict,
            trace: Some(trace),
        }
    }

    /// Renders a trace with the configured formatter.
    #[must_use]
    pub fn render(&self, trace: &MatchTrace) -> String {
        if self.config.json_output {
            JsonFormatter::new().format(trace)
        } else {
            HumanFormatter::new().format(trace)
        }
    }

    /// Writes a trace to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_trace<W: Write>(&self, out: &mut W, trace: &MatchTrace) -> io::Result<()> {
        writeln!(out, "{}", self.render(trace))
    }

    /// Writes a trace to stderr if the configuration asks for it.
    pub fn emit(&self, trace: &MatchTrace) {
        if self.config.enabled && self.config.trace_to_stderr {
            // A closed stderr is not worth failing a guess over
            let _ = self.write_trace(&mut io::stderr().lock(), trace);
        }
    }
}
