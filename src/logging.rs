//! Tracing setup for the binary.
//!
//! The terminal belongs to the UI, so logs go to a file:
//! `<cache dir>/marsdeck/marsdeck.log`, falling back to the home directory.
//! Filtering comes from `MARSDECK_LOG` (same syntax as `RUST_LOG`).

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "MARSDECK_LOG";

const DEFAULT_FILTER: &str = "marsdeck=info";
const LOG_DIR: &str = "marsdeck";
const LOG_FILE: &str = "marsdeck.log";

/// Where the log file lives, if a cache or home directory is known.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir()
        .map(|dir| dir.join(LOG_DIR))
        .or_else(|| dirs::home_dir().map(|home| home.join(format!(".{}", LOG_DIR))))
        .map(|dir| dir.join(LOG_FILE))
}

/// Build the filter from `MARSDECK_LOG`, or the default when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to [`log_path`].
///
/// Returns the path logged to. Logging is skipped (and `None` returned) if
/// no file can be opened; the deck runs fine without it.
pub fn init() -> Option<PathBuf> {
    let path = log_path()?;
    let file = open_log(&path).ok()?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Starting marsdeck v{}", env!("CARGO_PKG_VERSION"));
        Some(path)
    } else {
        None
    }
}

fn open_log(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
