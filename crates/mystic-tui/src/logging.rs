//! File-backed structured logging.
//!
//! The terminal belongs to the UI while it runs, so log lines go to a file
//! chosen with `--log-file`. Without one, no subscriber is installed and
//! tracing events are dropped.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{TuiError, TuiResult};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "MYSTIC8_LOG";

/// Filter used when `MYSTIC8_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber that appends to `path`.
///
/// Does nothing when `path` is `None`.
pub fn init_logging(path: Option<&Path>) -> TuiResult<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| TuiError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_is_a_no_op() {
        assert!(init_logging(None).is_ok());
    }

    #[test]
    fn unopenable_path_reports_log_file_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("mystic8.log");
        let err = init_logging(Some(&path)).unwrap_err();
        assert!(matches!(err, TuiError::LogFile { .. }));
        assert!(err.to_string().contains("mystic8.log"));
    }

    #[test]
    fn events_reach_the_log_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("mystic8.log");
        init_logging(Some(&path)).unwrap();
        tracing::info!("the orb awakens");
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("the orb awakens"));
    }
}
