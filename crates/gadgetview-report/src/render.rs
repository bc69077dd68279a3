//! Report rendering: indented JSON or aligned columns.

use std::fmt::Write as _;

use gadgetview_common::config::ReportConfig;
use gadgetview_common::constants::{
    PROCESS_COLUMNS, PROCESS_THREAD_COLUMNS, SOCKET_COLUMNS, TABLE_PADDING,
};
use gadgetview_common::error::Result;
use gadgetview_common::types::{OutputMode, ProcessRecord, SocketRecord};
use serde::Serialize;

/// Column layout of a record kind in the tabular view.
pub trait TableLayout {
    /// Header row for the given settings.
    fn columns(config: &ReportConfig) -> &'static [&'static str];

    /// Cells of this record, matching [`TableLayout::columns`].
    fn cells(&self, config: &ReportConfig) -> Vec<String>;
}

impl TableLayout for ProcessRecord {
    fn columns(config: &ReportConfig) -> &'static [&'static str] {
        if config.threads {
            PROCESS_THREAD_COLUMNS
        } else {
            PROCESS_COLUMNS
        }
    }

    fn cells(&self, config: &ReportConfig) -> Vec<String> {
        let mut cells = vec![
            self.namespace.clone(),
            self.pod.clone(),
            self.container.clone(),
            self.comm.clone(),
        ];
        if config.threads {
            cells.push(self.tgid.to_string());
        }
        cells.push(self.pid.to_string());
        cells
    }
}

impl TableLayout for SocketRecord {
    fn columns(_config: &ReportConfig) -> &'static [&'static str] {
        SOCKET_COLUMNS
    }

    fn cells(&self, _config: &ReportConfig) -> Vec<String> {
        vec![
            self.node.clone(),
            self.namespace.clone(),
            self.pod.clone(),
            self.protocol.clone(),
            self.local_endpoint(),
            self.remote_endpoint(),
            self.status.clone(),
        ]
    }
}

/// A left-aligned text table.
///
/// Every column but the last is padded to its widest cell plus
/// [`TABLE_PADDING`] spaces.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given header row.
    #[must_use]
    pub fn new(header: &[&str]) -> Self {
        Self {
            rows: vec![header.iter().map(|h| (*h).to_owned()).collect()],
        }
    }

    /// Appends a data row.
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Renders all rows, each terminated by a newline.
    #[must_use]
    pub fn render(&self) -> String {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0; columns];
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for row in &self.rows {
            let last = row.len().saturating_sub(1);
            for (i, cell) in row.iter().enumerate() {
                if i == last {
                    out.push_str(cell);
                } else {
                    let _ = write!(out, "{cell:<width$}", width = widths[i] + TABLE_PADDING);
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Serializes records as a JSON array indented by two spaces, plus a newline.
///
/// # Errors
///
/// Returns [`ReportError::Serialization`](gadgetview_common::error::ReportError::Serialization)
/// if a record cannot be serialized.
pub fn render_structured<T: Serialize>(records: &[T]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(records)?;
    out.push('\n');
    Ok(out)
}

/// Renders records as a header row followed by one aligned row per record.
pub fn render_tabular<T: TableLayout>(records: &[T], config: &ReportConfig) -> String {
    let mut table = Table::new(T::columns(config));
    for record in records {
        table.push_row(record.cells(config));
    }
    table.render()
}

/// Renders records in the configured output mode.
///
/// # Errors
///
/// Returns an error if structured serialization fails.
pub fn render<T: Serialize + TableLayout>(records: &[T], config: &ReportConfig) -> Result<String> {
    match config.output {
        OutputMode::Json => render_structured(records),
        OutputMode::Columns => Ok(render_tabular(records, config)),
    }
}
