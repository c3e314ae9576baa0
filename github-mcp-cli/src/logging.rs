//! Logging setup
//!
//! stdout carries the MCP stream, so logs always go to stderr or to the file
//! named by `GITHUB_MCP_LOG_FILE`. `RUST_LOG` overrides the level chosen from
//! the command-line flags.

use anyhow::{anyhow, Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a log file
pub const LOG_FILE_ENV: &str = "GITHUB_MCP_LOG_FILE";

/// A thread-safe writer that flushes and syncs every write.
///
/// Used for file logging in MCP mode, where the process is usually killed by
/// its client rather than exiting cleanly and buffered lines would be lost.
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    /// Creates a new `FileWriterGuard` wrapping the given file.
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, File>> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("log file mutex poisoned"))
    }
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.lock()?;
        let written = file.write(buf)?;
        file.flush()?;
        file.sync_all()?;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self.lock()?;
        file.flush()?;
        file.sync_all()
    }
}

/// Pick the log level from the verbosity flags
pub fn level_for(quiet: bool, debug: bool, verbose: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::TRACE
    } else if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

fn filter_for(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy()
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Install the global subscriber
pub fn init_logging(level: Level) -> Result<()> {
    let log_file = std::env::var_os(LOG_FILE_ENV).filter(|path| !path.is_empty());

    match log_file {
        Some(path) => {
            let shared = Arc::new(Mutex::new(open_log_file(Path::new(&path))?));
            tracing_subscriber::fmt()
                .with_writer(move || FileWriterGuard::new(shared.clone()))
                .with_env_filter(filter_for(level))
                .with_ansi(false)
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(filter_for(level))
            .try_init(),
    }
    .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(true, true, true), Level::ERROR);
        assert_eq!(level_for(false, false, true), Level::TRACE);
        assert_eq!(level_for(false, true, false), Level::DEBUG);
        assert_eq!(level_for(false, false, false), Level::INFO);
    }

    #[test]
    fn test_file_writer_guard_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mcp.log");
        let shared = Arc::new(Mutex::new(open_log_file(&path).unwrap()));

        let mut first = FileWriterGuard::new(shared.clone());
        let mut second = FileWriterGuard::new(shared);
        first.write_all(b"one\n").unwrap();
        second.write_all(b"two\n").unwrap();

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "one\ntwo\n");
    }
}
