//! Diagnostic logging bootstrap.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialise the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `level` when set. Unknown levels fall back to `warn`.
/// Calling it twice is harmless: the second registration is ignored.
pub fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(normalise_level(level)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry().with(filter).with(layer).try_init().ok();
}

/// Accept common spellings (`WARNING`, `Debug`, …) and map them to
/// `tracing` directives.
fn normalise_level(level: &str) -> String {
    match level.trim().to_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        "" => "warn".to_string(),
        other => other.to_string(),
    }
}
