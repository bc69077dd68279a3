//! Presentation settings shared by the report commands.

use serde::{Deserialize, Serialize};

use crate::types::OutputMode;

/// Settings for a single report invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format written to stdout.
    pub output: OutputMode,
    /// Show every thread instead of one row per process.
    ///
    /// Only meaningful for the process collector.
    pub threads: bool,
}

impl ReportConfig {
    /// Creates a configuration for the given output mode.
    #[must_use]
    pub const fn new(output: OutputMode) -> Self {
        Self {
            output,
            threads: false,
        }
    }

    /// Returns a copy with the thread setting replaced.
    #[must_use]
    pub const fn with_threads(self, threads: bool) -> Self {
        Self { threads, ..self }
    }
}
