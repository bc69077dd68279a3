//! Error types for the gadgetview workspace.
//!
//! Decode failures are per-node and non-fatal: the pipelines collect them
//! next to the records they managed to decode. Everything in
//! [`ReportError`] aborts the invocation.

use std::path::PathBuf;

use thiserror::Error;

/// A node's result fragment is not a valid encoding of the expected record array.
#[derive(Debug, Error)]
#[error("malformed output from node {node}: {source}")]
pub struct DecodeError {
    /// Node whose fragment failed to decode.
    pub node: String,
    /// Underlying JSON error.
    pub source: serde_json::Error,
}

/// Fatal errors raised while building a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The node status list could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The node status list itself is malformed.
    #[error("invalid node status list: {source}")]
    Input {
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Structured rendering failed.
    #[error("error marshalling results: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<Vec<u32>>("[1,").expect_err("truncated array must fail")
    }

    #[test]
    fn decode_error_names_the_node() {
        let err = DecodeError {
            node: "worker-2".into(),
            source: json_error(),
        };
        assert!(err.to_string().starts_with("malformed output from node worker-2:"));
    }

    #[test]
    fn serialization_error_converts_from_json_error() {
        let err: ReportError = json_error().into();
        assert!(matches!(err, ReportError::Serialization { .. }));
        assert!(err.to_string().contains("marshalling"));
    }

    #[test]
    fn config_error_displays_message() {
        let err = ReportError::Config {
            message: "unknown output mode: yaml".into(),
        };
        assert_eq!(err.to_string(), "invalid configuration: unknown output mode: yaml");
    }
}
