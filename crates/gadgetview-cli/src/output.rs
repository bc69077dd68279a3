//! Writing rendered reports to standard output.

use std::io::{self, Write};

/// Writes a complete report in one write and flushes.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_report(out: &mut impl Write, report: &str) -> io::Result<()> {
    out.write_all(report.as_bytes())?;
    out.flush()
}

/// Writes a complete report to stdout.
///
/// # Errors
///
/// Returns an error if stdout is closed or not writable.
pub fn print_report(report: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_report(&mut lock, report)
}
