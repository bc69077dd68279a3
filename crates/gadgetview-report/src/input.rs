//! Loading the node status list produced by the trace orchestrator.
//!
//! The list is a JSON document, either a bare array of node statuses or a
//! trace list object wrapping them in `items`. Items of a trace list may be
//! flat node statuses or full trace objects keeping the node under `spec`
//! and the results under `status`.

use std::io::Read;
use std::path::Path;

use gadgetview_common::constants::STDIN_PATH;
use gadgetview_common::error::{ReportError, Result};
use gadgetview_common::types::NodeStatus;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum StatusList {
    Bare(Vec<StatusItem>),
    Items { items: Vec<StatusItem> },
}

// `Trace` must come first: a flat status accepts any object.
#[derive(Deserialize)]
#[serde(untagged)]
enum StatusItem {
    Trace(TraceItem),
    Flat(NodeStatus),
}

#[derive(Deserialize)]
struct TraceItem {
    #[serde(default)]
    spec: TraceSpec,
    status: NodeStatus,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct TraceSpec {
    node: String,
}

impl From<StatusItem> for NodeStatus {
    fn from(item: StatusItem) -> Self {
        match item {
            StatusItem::Flat(status) => status,
            StatusItem::Trace(TraceItem { spec, status }) if status.node.is_empty() => Self {
                node: spec.node,
                ..status
            },
            StatusItem::Trace(TraceItem { status, .. }) => status,
        }
    }
}

/// Parses a node status list.
///
/// # Errors
///
/// Returns [`ReportError::Input`] if the document is neither an array of
/// node statuses nor an object with an `items` array.
pub fn parse_node_statuses(json: &str) -> Result<Vec<NodeStatus>> {
    let list: StatusList =
        serde_json::from_str(json).map_err(|source| ReportError::Input { source })?;
    let items = match list {
        StatusList::Bare(items) | StatusList::Items { items } => items,
    };
    let statuses: Vec<NodeStatus> = items.into_iter().map(NodeStatus::from).collect();

    for (index, status) in statuses.iter().enumerate() {
        let blank = status.node.is_empty()
            && status.output.is_empty()
            && status.operation_error.is_empty();
        if blank {
            tracing::warn!(index, "node status has no node name and no output");
        }
    }
    tracing::debug!(nodes = statuses.len(), "parsed node status list");
    Ok(statuses)
}

/// Reads a node status list from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be read or does not parse.
pub fn read_node_statuses(path: &Path) -> Result<Vec<NodeStatus>> {
    if path.as_os_str() == STDIN_PATH {
        return read_from(std::io::stdin().lock(), path);
    }
    tracing::debug!(path = %path.display(), "reading node status list");
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_node_statuses(&content)
}

/// Reads a node status list from an arbitrary reader.
///
/// `path` only labels I/O errors.
///
/// # Errors
///
/// Returns an error if the reader fails or the content does not parse.
pub fn read_from(mut reader: impl Read, path: &Path) -> Result<Vec<NodeStatus>> {
    let mut content = String::new();
    let _ = reader
        .read_to_string(&mut content)
        .map_err(|e| ReportError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    parse_node_statuses(&content)
}
