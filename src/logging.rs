//! Logging subscriber initialisation.
//!
//! Filtering is controlled by `TURNSTILE_LOG` (same syntax as `RUST_LOG`).
//! One-shot commands log to stderr. The dashboard owns the terminal, so it
//! logs to a file in the data directory instead.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "TURNSTILE_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Log to stderr. Safe to call more than once; later calls are ignored.
pub fn init_stderr() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(io::stderr),
        )
        .with(build_env_filter())
        .try_init();
}

/// Log to the dashboard log file.
///
/// Returns `false` (and installs nothing) when the file cannot be opened.
pub fn init_dashboard() -> bool {
    let Some(path) = crate::paths::log_path() else {
        return false;
    };
    init_file(&path).is_ok()
}

fn init_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .with(build_env_filter())
        .try_init();
    Ok(())
}
