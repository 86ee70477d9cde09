//! Tracing subscriber setup shared by the binaries.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// No subscriber is installed.
    Off,
    Stderr,
    /// Appended to a file, without ANSI colors.
    File(PathBuf),
}

impl LogTarget {
    /// File when a path is configured, otherwise off. The terminal app uses
    /// this so log lines never land on the scoreboard.
    pub fn file_or_off(path: Option<PathBuf>) -> Self {
        path.map(LogTarget::File).unwrap_or(LogTarget::Off)
    }
}

/// Install the global subscriber once; later calls are no-ops.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing(target: LogTarget) -> Result<()> {
    if TRACING_INIT.get().is_some() {
        return Ok(());
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .try_init()?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()?;
        }
    }

    let _ = TRACING_INIT.set(());
    Ok(())
}
