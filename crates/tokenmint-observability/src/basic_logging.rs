use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown at the configured level.
const TOKENMINT_TARGETS: [&str; 5] = [
    "tokenmint",
    "tokenmint_core",
    "tokenmint_config",
    "tokenmint_auth",
    "tokenmint_observability",
];

/// Builds the default filter: tokenmint crates at `log_level`, everything
/// else at `warn`.
pub fn build_env_filter(log_level: &str) -> EnvFilter {
    let directives = TOKENMINT_TARGETS
        .iter()
        .map(|target| format!("{target}={log_level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(format!("warn,{directives}"))
}

/// Initialize basic console logging.
///
/// # Configuration
///
/// - **Filtering**: `RUST_LOG` when set, otherwise `LOG_LEVEL` (default: "info")
///   applied to the tokenmint crates
/// - **Format**: Compact format with file and line numbers
///
/// Panics if a global subscriber is already installed; use
/// [`try_init_basic_console_logging`] when that is possible.
pub fn init_basic_console_logging() {
    if let Err(e) = try_init_basic_console_logging() {
        panic!("failed to initialize console logging: {e}");
    }
}

/// Like [`init_basic_console_logging`] but reports an already-installed
/// subscriber as an error.
pub fn try_init_basic_console_logging() -> Result<(), TryInitError> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| build_env_filter(&log_level));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).try_init()?;

    tracing::debug!(log_level = %log_level, "Console logging initialized");
    Ok(())
}
