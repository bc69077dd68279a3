//! Domain types shared by the report pipelines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Returns `true` when `value` equals its type's zero value.
///
/// Used as the per-field omission predicate for integer fields of the
/// structured output; string fields use [`String::is_empty`].
pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Status of the trace on a single node, as reported by the orchestrator.
///
/// The fragment is read from `output` or `nodeOutput`. When both keys are
/// present, `output` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawNodeStatus")]
pub struct NodeStatus {
    /// Node name.
    pub node: String,
    /// Trace state on the node (e.g. "Completed").
    pub state: String,
    /// Raw result fragment: a JSON array of records.
    pub output: String,
    /// Error reported by the orchestrator for this node, if any.
    pub operation_error: String,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawNodeStatus {
    node: String,
    state: String,
    output: Option<String>,
    node_output: Option<String>,
    operation_error: String,
}

impl From<RawNodeStatus> for NodeStatus {
    fn from(raw: RawNodeStatus) -> Self {
        Self {
            node: raw.node,
            state: raw.state,
            output: raw.output.or(raw.node_output).unwrap_or_default(),
            operation_error: raw.operation_error,
        }
    }
}

impl NodeStatus {
    /// Creates a status carrying only a node name and its output fragment.
    #[must_use]
    pub fn new(node: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            output: output.into(),
            ..Self::default()
        }
    }
}

/// One OS thread observed by the process collector.
///
/// `pid == tgid` marks the main thread of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessRecord {
    /// Thread group ID (the process ID).
    #[serde(skip_serializing_if = "is_zero")]
    pub tgid: u32,
    /// Thread ID.
    #[serde(skip_serializing_if = "is_zero")]
    pub pid: u32,
    /// Command name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comm: String,
    /// Kubernetes namespace owning the process.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    /// Kubernetes pod owning the process.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pod: String,
    /// Container owning the process.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub container: String,
}

impl ProcessRecord {
    /// Returns `true` if this thread is its process's main thread.
    #[must_use]
    pub const fn is_main_thread(&self) -> bool {
        self.tgid == self.pid
    }
}

/// One socket observed by the socket collector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SocketRecord {
    /// Node the socket was seen on.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub node: String,
    /// Kubernetes namespace owning the socket.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    /// Kubernetes pod owning the socket.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pod: String,
    /// Transport protocol, e.g. "TCP" or "UDP".
    #[serde(skip_serializing_if = "String::is_empty")]
    pub protocol: String,
    /// Local IP literal.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub local_address: String,
    /// Local port.
    #[serde(skip_serializing_if = "is_zero")]
    pub local_port: u16,
    /// Remote IP literal.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remote_address: String,
    /// Remote port.
    #[serde(skip_serializing_if = "is_zero")]
    pub remote_port: u16,
    /// Connection state, e.g. "LISTEN" or "ESTABLISHED".
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
}

impl SocketRecord {
    /// Local endpoint as `address:port`.
    #[must_use]
    pub fn local_endpoint(&self) -> String {
        format!("{}:{}", self.local_address, self.local_port)
    }

    /// Remote endpoint as `address:port`.
    #[must_use]
    pub fn remote_endpoint(&self) -> String {
        format!("{}:{}", self.remote_address, self.remote_port)
    }
}

/// How a report is written to standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable aligned columns.
    #[default]
    Columns,
    /// Indented JSON document.
    Json,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Columns => write!(f, "columns"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "columns" => Ok(Self::Columns),
            "json" => Ok(Self::Json),
            other => Err(ReportError::Config {
                message: format!("unknown output mode: {other} (expected columns or json)"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_record_decodes_missing_fields_as_zero() {
        let p: ProcessRecord = serde_json::from_str(r#"{"pid":7,"comm":"sh"}"#).expect("decode");
        assert_eq!(p.pid, 7);
        assert_eq!(p.tgid, 0);
        assert_eq!(p.comm, "sh");
        assert!(p.namespace.is_empty());
    }

    #[test]
    fn process_record_omits_empty_fields() {
        let p = ProcessRecord {
            tgid: 3,
            pid: 3,
            comm: "nginx".into(),
            ..ProcessRecord::default()
        };
        let json = serde_json::to_string(&p).expect("encode");
        assert_eq!(json, r#"{"tgid":3,"pid":3,"comm":"nginx"}"#);
    }

    #[test]
    fn socket_record_uses_snake_case_wire_names() {
        let s = SocketRecord {
            protocol: "TCP".into(),
            local_address: "10.0.0.1".into(),
            local_port: 80,
            status: "LISTEN".into(),
            ..SocketRecord::default()
        };
        let json = serde_json::to_string(&s).expect("encode");
        assert_eq!(
            json,
            r#"{"protocol":"TCP","local_address":"10.0.0.1","local_port":80,"status":"LISTEN"}"#
        );
    }

    #[test]
    fn socket_endpoints_join_address_and_port() {
        let s = SocketRecord {
            local_address: "0.0.0.0".into(),
            local_port: 53,
            remote_address: "0.0.0.0".into(),
            ..SocketRecord::default()
        };
        assert_eq!(s.local_endpoint(), "0.0.0.0:53");
        assert_eq!(s.remote_endpoint(), "0.0.0.0:0");
    }

    #[test]
    fn main_thread_detection() {
        let main = ProcessRecord {
            tgid: 10,
            pid: 10,
            ..ProcessRecord::default()
        };
        let worker = ProcessRecord {
            tgid: 10,
            pid: 11,
            ..ProcessRecord::default()
        };
        assert!(main.is_main_thread());
        assert!(!worker.is_main_thread());
    }

    #[test]
    fn node_status_accepts_node_output_alias() {
        let s: NodeStatus =
            serde_json::from_str(r#"{"node":"n1","nodeOutput":"[]"}"#).expect("decode");
        assert_eq!(s.output, "[]");
        assert!(s.operation_error.is_empty());
    }

    #[test]
    fn node_status_prefers_output_over_node_output() {
        let s: NodeStatus = serde_json::from_str(
            r#"{"node":"n1","output":"[{\"pid\":1}]","nodeOutput":"[]"}"#,
        )
        .expect("both keys must decode");
        assert_eq!(s.output, r#"[{"pid":1}]"#);
    }

    #[test]
    fn node_status_serializes_output_key() {
        let json = serde_json::to_string(&NodeStatus::new("n1", "[]")).expect("encode");
        assert_eq!(
            json,
            r#"{"node":"n1","state":"","output":"[]","operationError":""}"#
        );
    }

    #[test]
    fn output_mode_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputMode>().expect("parse"), OutputMode::Json);
        assert_eq!("columns".parse::<OutputMode>().expect("parse"), OutputMode::Columns);
        assert!("yaml".parse::<OutputMode>().is_err());
    }

    #[test]
    fn output_mode_display_matches_parse() {
        for mode in [OutputMode::Columns, OutputMode::Json] {
            assert_eq!(mode.to_string().parse::<OutputMode>().expect("parse"), mode);
        }
    }

    #[test]
    fn is_zero_predicate() {
        assert!(is_zero(&0_u16));
        assert!(!is_zero(&1_u32));
    }
}
