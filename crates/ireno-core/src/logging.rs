//! Logging bootstrap.
//!
//! The TUI owns stderr, so diagnostics go to daily-rolling files under
//! ${IRENO_HOME}/logs. Filtering follows RUST_LOG, defaulting to info
//! for this workspace's crates.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::settings::paths;

/// Initializes the global tracing subscriber with a file writer.
///
/// Returns the appender guard; dropping it flushes buffered log lines,
/// so callers keep it alive for the life of the process. Logging is
/// best-effort: if the log directory cannot be created, diagnostics are
/// simply lost rather than failing startup.
pub fn init() -> Option<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::daily(logs_dir, "ireno.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ireno_core=info,ireno_tui=info,ireno=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}
