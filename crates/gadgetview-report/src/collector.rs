//! End-to-end report pipelines for the process and socket collectors.

use gadgetview_common::config::ReportConfig;
use gadgetview_common::error::{DecodeError, Result};
use gadgetview_common::types::{NodeStatus, ProcessRecord, SocketRecord};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::aggregate::{Aggregated, aggregate};
use crate::filter::retain_processes;
use crate::render::{TableLayout, render};
use crate::sort::{Sortable, sort_records};

/// A rendered report and what went into it.
#[derive(Debug)]
pub struct Report {
    /// Text to write to stdout.
    pub output: String,
    /// Number of records decoded across all nodes, before filtering.
    pub decoded: usize,
    /// Number of records rendered.
    pub records: usize,
    /// Nodes whose output could not be decoded.
    pub failures: Vec<DecodeError>,
}

impl Report {
    /// Returns `true` if some nodes' results are missing from the report.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

fn build_report<T, F>(nodes: &[NodeStatus], config: &ReportConfig, filter: F) -> Result<Report>
where
    T: DeserializeOwned + Serialize + Sortable + TableLayout,
    F: FnOnce(Vec<T>) -> Vec<T>,
{
    let Aggregated { records, failures } = aggregate::<T>(nodes);
    let decoded = records.len();

    let mut records = filter(records);
    sort_records(&mut records);
    let output = render(&records, config)?;

    tracing::info!(
        nodes = nodes.len(),
        decoded,
        records = records.len(),
        failed_nodes = failures.len(),
        output = %config.output,
        "report built"
    );

    Ok(Report {
        output,
        decoded,
        records: records.len(),
        failures,
    })
}

/// Builds the process collector report.
///
/// Unless `config.threads` is set, only each process's main thread is shown.
///
/// # Errors
///
/// Returns an error if structured rendering fails. Malformed node output
/// is not an error; it is listed in [`Report::failures`].
pub fn process_report(nodes: &[NodeStatus], config: &ReportConfig) -> Result<Report> {
    build_report::<ProcessRecord, _>(nodes, config, |records| {
        retain_processes(records, config.threads)
    })
}

/// Builds the socket collector report.
///
/// # Errors
///
/// Returns an error if structured rendering fails. Malformed node output
/// is not an error; it is listed in [`Report::failures`].
pub fn socket_report(nodes: &[NodeStatus], config: &ReportConfig) -> Result<Report> {
    build_report::<SocketRecord, _>(nodes, config, |records| records)
}
