//! Merging of per-node fragments into one record collection.

use gadgetview_common::error::DecodeError;
use gadgetview_common::types::NodeStatus;
use serde::de::DeserializeOwned;

use crate::decode::decode_fragment;

/// Records decoded from every node, plus the nodes that failed to decode.
#[derive(Debug)]
pub struct Aggregated<T> {
    /// Records from all nodes, concatenated in node order.
    pub records: Vec<T>,
    /// One entry per node whose fragment was malformed, in node order.
    pub failures: Vec<DecodeError>,
}

impl<T> Default for Aggregated<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            failures: Vec::new(),
        }
    }
}

/// Decodes every node's fragment and concatenates the results.
///
/// A malformed fragment does not stop the others from being decoded; it is
/// logged and kept in [`Aggregated::failures`]. Node-level operation errors
/// reported by the orchestrator are logged as well.
pub fn aggregate<T: DeserializeOwned>(nodes: &[NodeStatus]) -> Aggregated<T> {
    let mut aggregated = Aggregated::default();

    for status in nodes {
        if !status.operation_error.is_empty() {
            tracing::warn!(
                node = %status.node,
                error = %status.operation_error,
                "node reported an error"
            );
        }

        match decode_fragment::<T>(&status.node, &status.output) {
            Ok(mut records) => {
                tracing::debug!(node = %status.node, count = records.len(), "decoded node output");
                aggregated.records.append(&mut records);
            }
            Err(err) => {
                tracing::warn!(
                    node = %err.node,
                    error = %err.source,
                    "skipping malformed node output, results are partial"
                );
                aggregated.failures.push(err);
            }
        }
    }

    aggregated
}

#[cfg(test)]
mod tests {
    use gadgetview_common::types::{ProcessRecord, SocketRecord};

    use super::*;

    #[test]
    fn concatenates_in_node_order() {
        let nodes = vec![
            NodeStatus::new("n1", r#"[{"pid":3},{"pid":1}]"#),
            NodeStatus::new("n2", r#"[{"pid":2}]"#),
        ];
        let aggregated = aggregate::<ProcessRecord>(&nodes);
        let pids: Vec<u32> = aggregated.records.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![3, 1, 2]);
        assert!(aggregated.failures.is_empty());
    }

    #[test]
    fn keeps_duplicates() {
        let fragment = r#"[{"node":"n1","protocol":"TCP"}]"#;
        let nodes = vec![NodeStatus::new("n1", fragment), NodeStatus::new("n1", fragment)];
        let aggregated = aggregate::<SocketRecord>(&nodes);
        assert_eq!(aggregated.records.len(), 2);
        assert_eq!(aggregated.records[0], aggregated.records[1]);
    }

    #[test]
    fn malformed_node_does_not_block_others() {
        let nodes = vec![
            NodeStatus::new("bad", "not json"),
            NodeStatus::new("good", r#"[{"pid":9,"tgid":9}]"#),
            NodeStatus::new("empty", ""),
        ];
        let aggregated = aggregate::<ProcessRecord>(&nodes);
        assert_eq!(aggregated.records.len(), 1);
        assert_eq!(aggregated.failures.len(), 1);
        assert_eq!(aggregated.failures[0].node, "bad");
    }

    #[test]
    fn operation_error_still_decodes_output() {
        let nodes = vec![NodeStatus {
            operation_error: "tracer restarted".into(),
            ..NodeStatus::new("n1", r#"[{"pid":1}]"#)
        }];
        let aggregated = aggregate::<ProcessRecord>(&nodes);
        assert_eq!(aggregated.records.len(), 1);
        assert!(aggregated.failures.is_empty());
    }

    #[test]
    fn no_nodes_yields_nothing() {
        let aggregated = aggregate::<SocketRecord>(&[]);
        assert!(aggregated.records.is_empty());
        assert!(aggregated.failures.is_empty());
    }
}
