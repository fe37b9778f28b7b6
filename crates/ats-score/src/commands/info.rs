//! Info command: package metadata and the settings a `score` run would use.

use ats_score_core::config::{Config, ConfigSources};
use ats_score_core::scoring::Thresholds;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // Output format comes from the global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

const PACKAGE: PackageInfo = PackageInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    description: env!("CARGO_PKG_DESCRIPTION"),
    repository: env!("CARGO_PKG_REPOSITORY"),
    license: env!("CARGO_PKG_LICENSE"),
};

/// Effective settings, with defaults resolved.
#[derive(Serialize)]
struct EffectiveConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<&'a str>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<u32>,
    min_resume_chars: usize,
    /// Absent when the limit is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    thresholds: &'a Thresholds,
}

impl<'a> EffectiveConfig<'a> {
    fn resolve(config: &'a Config, sources: &'a ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.as_str()),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_deref().map(|p| p.as_str()),
            min_score: config.min_score,
            min_resume_chars: config.min_resume_chars(),
            max_input_bytes: config.input_limit(),
            thresholds: &config.thresholds,
        }
    }
}

#[derive(Serialize)]
struct Info<'a> {
    #[serde(flatten)]
    package: &'a PackageInfo,
    config: EffectiveConfig<'a>,
}

/// Print package metadata and the effective configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let info = Info {
        package: &PACKAGE,
        config: EffectiveConfig::resolve(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_text(&info);
    }
    Ok(())
}

fn print_text(info: &Info<'_>) {
    let package = info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    field("License", package.license);
    if !package.repository.is_empty() {
        field("Repository", package.repository.cyan());
    }

    let config = &info.config;
    heading("Configuration");
    match config.config_file {
        Some(path) => field("Config file", path.cyan()),
        None => field("Config file", "none loaded".yellow()),
    }
    field("Log level", config.log_level);
    if let Some(dir) = config.log_dir {
        field("Log directory", dir);
    }

    heading("Quality Gate");
    match config.min_score {
        Some(min) => field("Min score", min),
        None => field("Min score", "(not set)".dimmed()),
    }
    field("Min resume chars", config.min_resume_chars);
    match config.max_input_bytes {
        Some(max) => field("Max input bytes", max),
        None => field("Max input bytes", "unlimited".yellow()),
    }

    let t = config.thresholds;
    heading("Thresholds");
    field(
        "Long lines",
        format!("over {} chars, more than {} lines", t.long_line_chars, t.max_long_lines),
    );
    field("Min sections", t.min_sections);
    field(
        "Long sentences",
        format!(
            "over {} words, more than {} sentences",
            t.long_sentence_words, t.max_long_sentences
        ),
    );
    field("Max passive matches", t.max_passive_matches);
    field("Repetition limit", t.repetition_limit);
}

fn heading(title: &str) {
    println!("\n{}", title.bold().underline());
}

fn field(label: &str, value: impl std::fmt::Display) {
    let value = value.to_string();
    if !value.is_empty() {
        println!("{}: {value}", label.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn runs_in_both_modes() {
        let (config, sources) = (Config::default(), ConfigSources::default());
        assert!(cmd_info(InfoArgs::default(), false, &config, &sources).is_ok());
        assert!(cmd_info(InfoArgs::default(), true, &config, &sources).is_ok());
    }

    #[test]
    fn defaults_are_resolved() {
        let (config, sources) = (Config::default(), ConfigSources::default());
        let effective = EffectiveConfig::resolve(&config, &sources);
        assert!(effective.config_file.is_none());
        assert_eq!(effective.log_level, "info");
        assert_eq!(effective.min_resume_chars, 50);
        assert_eq!(effective.max_input_bytes, Some(5 * 1024 * 1024));
        assert_eq!(effective.thresholds, &Thresholds::default());
    }

    #[test]
    fn primary_file_and_disabled_limit() {
        let config = Config {
            disable_input_limit: true,
            min_score: Some(70),
            ..Config::default()
        };
        let sources = ConfigSources {
            project_files: vec![Utf8PathBuf::from("/work/.ats.toml")],
            ..ConfigSources::default()
        };

        let json = serde_json::to_value(EffectiveConfig::resolve(&config, &sources)).unwrap();
        assert_eq!(json["config_file"], "/work/.ats.toml");
        assert_eq!(json["min_score"], 70);
        assert!(json.get("max_input_bytes").is_none());
        assert_eq!(json["thresholds"]["repetition_limit"], 10);
    }
}
