//! Configuration for match diagnostics.

/// Configuration for match diagnostics.
///
/// Controls whether traces are built and where they go. Production play
/// leaves this disabled and only ever reads the verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugConfig {
    /// Whether traces are built (false = plain verdicts only).
    pub enabled: bool,

    /// Write each trace to stderr.
    pub trace_to_stderr: bool,

    /// Output format: true for JSON, false for human-readable.
    pub json_output: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            trace_to_stderr: true,
            json_output: false,
        }
    }
}

impl DebugConfig {
    /// Creates a configuration for development: traces on, human-readable.
    #[must_use]
    pub fn development() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Builder method to set enabled state.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder method to enable/disable stderr tracing.
    #[must_use]
    pub fn with_trace_to_stderr(mut self, trace: bool) -> Self {
        self.trace_to_stderr = trace;
        self
    }

    /// Builder method to enable/disable JSON output.
    #[must_use]
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }
}
