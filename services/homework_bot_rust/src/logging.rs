use anyhow::{anyhow, Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::fmt::writer::{MakeWriter, MakeWriterExt, Tee};
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset: everything from debug up, minus HTTP internals.
pub const DEFAULT_FILTER: &str = "debug,hyper=info,reqwest=info,h2=info";

/// Open `path` for appending, creating it when missing.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Writer that sends every line to `console` and to `file`.
pub fn mirrored<M>(console: M, file: File) -> Tee<M, Arc<File>>
where
    M: for<'a> MakeWriter<'a>,
{
    console.and(Arc::new(file))
}

/// Install the global subscriber. Every line goes to stdout and is
/// appended to `log_file`.
pub fn init(log_file: &Path) -> Result<()> {
    let file = open_log_file(log_file)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(mirrored(std::io::stdout, file))
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}
