//! Column layouts, environment variables, and other fixed values.

/// Binary name for the CLI.
pub const BIN_NAME: &str = "gadgetview";

/// Path value meaning "read from standard input".
pub const STDIN_PATH: &str = "-";

/// Environment variable overriding the output mode.
pub const OUTPUT_ENV: &str = "GADGETVIEW_OUTPUT";

/// Environment variable overriding the node status list path.
pub const INPUT_ENV: &str = "GADGETVIEW_INPUT";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Spaces inserted between table columns.
pub const TABLE_PADDING: usize = 4;

/// Process table header, one row per process.
pub const PROCESS_COLUMNS: &[&str] = &["NAMESPACE", "POD", "CONTAINER", "COMM", "PID"];

/// Process table header, one row per thread.
pub const PROCESS_THREAD_COLUMNS: &[&str] =
    &["NAMESPACE", "POD", "CONTAINER", "COMM", "TGID", "PID"];

/// Socket table header.
pub const SOCKET_COLUMNS: &[&str] =
    &["NODE", "NAMESPACE", "POD", "PROTOCOL", "LOCAL", "REMOTE", "STATUS"];
