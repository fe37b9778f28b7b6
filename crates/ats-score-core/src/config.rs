//! Layered configuration for the scorer and its front ends.
//!
//! Layers, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. user config: `<config dir>/ats-score/config.<ext>`
//! 3. project config: the nearest directory (walking up from the search
//!    root, stopping at `.git`) holding any of `.ats.<ext>`, `ats.<ext>`,
//!    `.ats-score.<ext>`, `ats-score.<ext>`; every match there is merged
//!    in that order
//! 4. explicit files, in the order given
//! 5. `ATS_SCORE_*` environment variables, with `__` for nesting
//!    (`ATS_SCORE_THRESHOLDS__LONG_LINE_CHARS=100`)
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`; within one name later
//! extensions win.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use ats_score_core::config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir()?)?;
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load()?;
//! println!("long lines start at {} chars", config.thresholds.long_line_chars);
//! if let Some(file) = sources.primary_file() {
//!     println!("from {file}");
//! }
//! # Ok(())
//! # }
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::extract::DEFAULT_MIN_CHARS;
use crate::scoring::Thresholds;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

const APP_NAME: &str = "ats-score";
/// Project config base names, lowest precedence first.
const PROJECT_NAMES: &[&str] = &["ats", "ats-score"];
const EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];
const ENV_PREFIX: &str = "ATS_SCORE_";
const DEFAULT_BOUNDARY: &str = ".git";

/// Effective settings for a run.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level when neither `RUST_LOG` nor `-q`/`-v` say otherwise.
    pub log_level: LogLevel,
    /// Directory for JSONL log files.
    pub log_dir: Option<Utf8PathBuf>,
    /// Quality gate for `score` when `--min-score` is not given.
    pub min_score: Option<u32>,
    /// Fewest characters a resume must yield after extraction (default: 50).
    pub min_resume_chars: Option<usize>,
    /// Largest input accepted, in bytes (default: 5 MiB).
    pub max_input_bytes: Option<usize>,
    /// Accept inputs of any size; `max_input_bytes` is ignored.
    pub disable_input_limit: bool,
    /// Limits for the formatting and structure checks.
    pub thresholds: Thresholds,
}

impl Config {
    /// Effective input size limit, or `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        (!self.disable_input_limit)
            .then(|| self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
    }

    /// Effective minimum resume length for extraction.
    pub fn min_resume_chars(&self) -> usize {
        self.min_resume_chars.unwrap_or(DEFAULT_MIN_CHARS)
    }
}

/// Configured log verbosity.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Debug events and up.
    Debug,
    /// Info events and up.
    #[default]
    Info,
    /// Warnings and errors.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// The level as an `EnvFilter` directive.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Files that contributed to a loaded [`Config`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project files, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// The user config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files passed explicitly, such as `--config`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file whose values win: last explicit, else last project, else user.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .or_else(|| self.project_files.last())
            .or(self.user_file.as_ref())
            .map(Utf8PathBuf::as_path)
    }

    fn is_empty(&self) -> bool {
        self.user_file.is_none() && self.project_files.is_empty() && self.explicit_files.is_empty()
    }

    /// Every file in merge order.
    fn in_merge_order(&self) -> impl Iterator<Item = &Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
            .map(Utf8PathBuf::as_path)
    }
}

/// Builder that finds config files and merges them with the environment.
#[derive(Debug)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_config: bool,
    boundary: Option<String>,
    files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads user config, stops discovery at `.git`, and has
    /// no search root yet.
    pub fn new() -> Self {
        Self {
            search_root: None,
            user_config: true,
            boundary: Some(DEFAULT_BOUNDARY.to_string()),
            files: Vec::new(),
        }
    }

    /// Walk up from `dir` looking for project config.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.search_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Whether to read the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Stop walking up above a directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary = Some(marker.into());
        self
    }

    /// Walk all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary = None;
        self
    }

    /// Merge `path` after every discovered file; later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge every layer into a [`Config`].
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        Self::merge(sources)
    }

    /// Like [`load`](Self::load), but fails with [`ConfigError::NotFound`]
    /// when no config file exists anywhere.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        if sources.is_empty() {
            return Err(ConfigError::NotFound);
        }
        Self::merge(sources)
    }

    fn discover(self) -> ConfigSources {
        let user_file = if self.user_config {
            find_user_config()
        } else {
            None
        };
        let project_files = self
            .search_root
            .as_deref()
            .map(|root| find_project_configs(root, self.boundary.as_deref()))
            .unwrap_or_default();

        tracing::debug!(
            user = ?user_file,
            project = project_files.len(),
            explicit = self.files.len(),
            "config files discovered"
        );
        ConfigSources {
            project_files,
            user_file,
            explicit_files: self.files,
        }
    }

    fn merge(sources: ConfigSources) -> ConfigResult<(Config, ConfigSources)> {
        let figment = sources.in_merge_order().fold(
            Figment::from(Serialized::defaults(Config::default())),
            merge_file,
        );
        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()
            .map_err(Box::new)?;

        tracing::info!(
            log_level = config.log_level.as_str(),
            min_score = ?config.min_score,
            primary = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

/// Candidate project file names in merge order: dotfile then plain file
/// for each base name, every extension within each.
fn project_file_names() -> impl Iterator<Item = String> {
    PROJECT_NAMES.iter().flat_map(|name| {
        [".", ""].into_iter().flat_map(move |prefix| {
            EXTENSIONS
                .iter()
                .map(move |ext| format!("{prefix}{name}.{ext}"))
        })
    })
}

/// Config files in the nearest directory at or above `start` that has any.
fn find_project_configs(start: &Utf8Path, boundary: Option<&str>) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = project_file_names()
            .map(|name| dir.join(name))
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return found;
        }
        // a config beside the marker still counts; the marker only stops the climb
        if dir != start && boundary.is_some_and(|marker| dir.join(marker).exists()) {
            break;
        }
    }
    Vec::new()
}

fn find_user_config() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    let file = path.as_str();
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(file)),
        Some("json") => figment.merge(Json::file_exact(file)),
        _ => figment.merge(Toml::file_exact(file)),
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Per-user config directory, e.g. `~/.config/ats-score` on Linux.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(project_dirs()?.config_dir().to_path_buf()).ok()
}

/// Per-machine data directory; logs default to its `logs/` child.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(project_dirs()?.data_local_dir().to_path_buf()).ok()
}
