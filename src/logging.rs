// ==========================================
// Logging initialization
// ==========================================
// tracing + tracing-subscriber, level from RUST_LOG.
// Output goes to stderr; stdout carries the CLI's JSON.
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Output format of the log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging with human-readable output.
///
/// # Environment
/// - RUST_LOG: level filter (default: info)
///   e.g. RUST_LOG=debug or RUST_LOG=gradpath_planner::engine=trace
///
/// # Example
/// ```no_run
/// use gradpath_planner::logging;
/// logging::init();
/// ```
pub fn init() {
    init_with_format(LogFormat::Text);
}

/// Initialize logging with the given format.
pub fn init_with_format(format: LogFormat) {
    let builder = fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Initialize logging for tests.
///
/// Debug level, routed through the test writer; repeated calls are no-ops.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
