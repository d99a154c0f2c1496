//! Logging initialisation
//!
//! Diagnostics go through `tracing`. A non-blocking file writer under the
//! log directory always receives them; command-line modes also get a stderr
//! layer, while the TUI writes to the file only because it owns the terminal.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{Settings, WizardPaths};
use crate::error::{WizardError, WizardResult};

/// File name of the diagnostic log inside the log directory
pub const LOG_FILE_NAME: &str = "signup-wizard.log";

/// Where log output should go besides the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Log file only (the TUI owns the terminal)
    FileOnly,
    /// Log file plus warnings and errors on stderr
    FileAndStderr,
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// flushes the file writer when dropped and must be held for the program's
/// lifetime.
pub fn init(
    paths: &WizardPaths,
    settings: &Settings,
    target: LogTarget,
) -> WizardResult<WorkerGuard> {
    paths.ensure_directories()?;

    let file_appender = tracing_appender::rolling::never(paths.log_dir(), LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_filter(file_filter);

    let stderr_layer = match target {
        LogTarget::FileAndStderr => Some(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(EnvFilter::new("warn")),
        ),
        LogTarget::FileOnly => None,
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| WizardError::Config(format!("Failed to initialise logging: {}", e)))?;

    Ok(guard)
}
