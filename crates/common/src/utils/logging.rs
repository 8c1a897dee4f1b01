use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Output flavour for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { LogFormat::Json } else { LogFormat::Compact }
    }
}

/// Initialize the global tracing subscriber on stdout.
/// - `RUST_LOG` wins over `fallback_filter` when set
/// - Safe to call more than once; later calls are no-ops
pub fn init_logging(format: LogFormat, fallback_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

/// Compact logging with the service's default filter.
pub fn init_logging_default() {
    init_logging(LogFormat::Compact, "info,tower_http=info,axum=info");
}
