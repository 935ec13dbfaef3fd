#![forbid(unsafe_code)]

//! Log file setup.
//!
//! The demo owns the terminal, so logs only go to a file. Without
//! `--log-file` no subscriber is installed and every event is dropped.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "ORBIT_LOG";

const DEFAULT_FILTER: &str = "info";

/// Build the filter from `ORBIT_LOG`, falling back to `info` when unset or
/// unparsable.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global `fmt` subscriber appending to `path`.
///
/// Returns `Ok(false)` if another subscriber was already installed.
pub fn init(path: &Path) -> io::Result<bool> {
    let file = open(path)?;
    let directives = std::env::var(LOG_ENV).ok();
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter_from(directives.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();
    Ok(installed)
}

fn open(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_filter_is_info() {
        assert_eq!(filter_from(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn directives_are_honored() {
        let filter = filter_from(Some("orbit_tree=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn log_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orbit.log");
        open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("orbit.log");
        assert!(init(&path).is_err());
    }
}
