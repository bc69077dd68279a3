//! CLI command definitions and dispatch.

pub mod process;
pub mod socket;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gadgetview_common::config::ReportConfig;
use gadgetview_common::constants::{BIN_NAME, INPUT_ENV, OUTPUT_ENV, STDIN_PATH};
use gadgetview_common::types::OutputMode;
use gadgetview_report::collector::Report;
use gadgetview_report::input::read_node_statuses;

/// gadgetview — Render per-node gadget results as one sorted report.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Output mode: `columns` or `json`.
    #[arg(short, long, global = true, env = OUTPUT_ENV, default_value = "columns")]
    pub output: OutputMode,

    /// Node status list produced by the trace orchestrator (`-` for stdin).
    #[arg(short, long, global = true, env = INPUT_ENV, default_value = STDIN_PATH)]
    pub input: PathBuf,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Gather information about running processes.
    ProcessCollector(process::ProcessArgs),
    /// Gather information about network sockets.
    SocketCollector(socket::SocketArgs),
}

impl Cli {
    /// Presentation settings derived from the global flags.
    #[must_use]
    pub const fn config(&self) -> ReportConfig {
        ReportConfig::new(self.output)
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the node status list cannot be loaded, the report
/// cannot be rendered, or stdout cannot be written.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let nodes = read_node_statuses(&cli.input)
        .with_context(|| format!("loading node statuses from {}", cli.input.display()))?;
    let config = cli.config();

    let report = match cli.command {
        Command::ProcessCollector(args) => process::execute(&args, &nodes, config)?,
        Command::SocketCollector(args) => socket::execute(&args, &nodes, config)?,
    };

    crate::output::print_report(&report.output).context("writing report to stdout")?;
    warn_if_partial(&report, nodes.len());
    Ok(())
}

fn warn_if_partial(report: &Report, nodes: usize) {
    if report.is_partial() {
        let failed: Vec<&str> = report.failures.iter().map(|f| f.node.as_str()).collect();
        tracing::warn!(
            failed = failed.len(),
            nodes,
            failed_nodes = %failed.join(","),
            "report is partial: some nodes returned malformed output"
        );
    }
}
