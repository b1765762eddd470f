//! Operator log
//!
//! Fetch failures and request tracing go here, never to the UI.

use crate::consts::cli_consts::{APP_DIR, LOG_DIR, LOG_FILE_NAME};
use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file. Used while the TUI owns the terminal.
    File(PathBuf),
    Stderr,
}

/// Returns `~/.gradebook/logs/gradebook.log`.
pub fn default_log_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(APP_DIR).join(LOG_DIR).join(LOG_FILE_NAME))
}

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber.
pub fn init_logging(target: &LogTarget) -> Result<(), Box<dyn Error>> {
    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| e as Box<dyn Error>)?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| e as Box<dyn Error>)?;
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::CapturedLogs;
    use super::*;

    #[test]
    fn default_log_path_lives_under_app_dir() {
        if let Ok(path) = default_log_path() {
            assert!(path.ends_with(".gradebook/logs/gradebook.log"));
        }
    }

    #[test]
    fn global_subscriber_installs_once() {
        // The only test in this crate that touches the global subscriber.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("gradebook.log");

        assert!(init_logging(&LogTarget::File(path.clone())).is_ok());
        assert!(path.exists());
        let again = init_logging(&LogTarget::Stderr);
        assert!(again.is_err());
    }

    #[test]
    fn captured_logs_record_levels_and_fields() {
        let logs = CapturedLogs::default();
        logs.capture(|| {
            tracing::error!(request = 3, "Failed to fetch dashboard summary");
            tracing::debug!("Applied dashboard summary");
        });
        let text = logs.contents();
        assert!(text.contains("ERROR"));
        assert!(text.contains("request=3"));
        assert!(text.contains("Applied dashboard summary"));
    }
}
