//! Log output
//!
//! The alternate screen owns the terminal for the whole session, so events
//! are written to a file under the platform data dir, never to stderr.

use anyhow::Result;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "fiva-waitlist-tui.log";

/// Used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "fiva_waitlist_tui=info";

/// Directory holding the log file
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("co", "fiva", "fiva-waitlist-tui")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

fn file_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered lines on drop; hold it until exit.
/// Without a home directory nothing is installed and events are dropped.
pub fn init() -> Result<Option<WorkerGuard>> {
    let Some(dir) = log_dir() else {
        return Ok(None);
    };
    let (writer, guard) = file_writer(&dir)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();

    Ok(Some(guard))
}
