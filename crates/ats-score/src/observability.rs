//! Logging setup: human-readable events on stderr, JSONL events in a log file.
//!
//! Log file location, highest precedence first:
//! 1. `ATS_SCORE_LOG_PATH` (exact file)
//! 2. `ATS_SCORE_LOG_DIR` (directory, file name `ats-score.jsonl`)
//! 3. `log_dir` from configuration
//! 4. `<platform data dir>/ats-score/logs`
//!
//! A log file that cannot be opened never stops the CLI; it falls back to
//! stderr only and says so.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_PATH_ENV: &str = "ATS_SCORE_LOG_PATH";
const LOG_DIR_ENV: &str = "ATS_SCORE_LOG_DIR";
const LOG_FILE_NAME: &str = "ats-score.jsonl";

/// Where JSONL logs go.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Directory holding the log file; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// File name inside `log_dir`.
    pub file_name: String,
}

impl ObservabilityConfig {
    /// Resolve the log location from the environment, then `config_log_dir`,
    /// then the platform default.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path
            && let Some(file_name) = path.file_name().and_then(|n| n.to_str())
        {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: Some(dir),
                file_name: file_name.to_string(),
            };
        }

        let log_dir = env_dir.or(config_dir).or_else(|| {
            ats_score_core::config::user_data_local_dir().map(|d| d.join("logs").into_std_path_buf())
        });
        Self {
            log_dir,
            file_name: LOG_FILE_NAME.to_string(),
        }
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` means errors only, `-v` debug,
/// `-vv` and beyond trace, and no flag uses the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(directive(quiet, verbose, config_level))
}

fn directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes buffered file output.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard, file_error) = match open_log_file(config) {
        Ok(Some(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Ok(None) => (None, None, None),
        Err(err) => (None, None, Some(err)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    if let Some(err) = file_error {
        tracing::warn!(error = %err, "file logging disabled");
    }
    Ok(guard)
}

fn open_log_file(config: &ObservabilityConfig) -> anyhow::Result<Option<RollingFileAppender>> {
    let Some(ref dir) = config.log_dir else {
        return Ok(None);
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&config.file_name)
        .build(dir)
        .with_context(|| format!("failed to open log file in {}", dir.display()))?;
    Ok(Some(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_splits_into_dir_and_file() {
        let config = ObservabilityConfig::resolve(
            Some(PathBuf::from("/var/log/ats/run.jsonl")),
            Some(PathBuf::from("/ignored")),
            None,
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/ats")));
        assert_eq!(config.file_name, "run.jsonl");
    }

    #[test]
    fn bare_log_path_uses_current_dir() {
        let config = ObservabilityConfig::resolve(Some(PathBuf::from("run.jsonl")), None, None);
        assert_eq!(config.log_dir, Some(PathBuf::from(".")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let config = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/env")),
            Some(PathBuf::from("/config")),
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/env")));
        assert_eq!(config.file_name, LOG_FILE_NAME);
    }

    #[test]
    fn config_dir_used_when_env_unset() {
        let config = ObservabilityConfig::resolve(None, None, Some(PathBuf::from("/config")));
        assert_eq!(config.log_dir, Some(PathBuf::from("/config")));
    }

    #[test]
    fn verbosity_flags_map_to_levels() {
        assert_eq!(directive(true, 2, "info"), "error");
        assert_eq!(directive(false, 0, "warn"), "warn");
        assert_eq!(directive(false, 1, "info"), "debug");
        assert_eq!(directive(false, 3, "info"), "trace");
    }
}
