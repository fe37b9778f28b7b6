//! Command-line front end for `ats-score-core`.
//!
//! The parser lives in the library half of the crate so `xtask` can render
//! man pages and completions from [`command()`]. `main.rs` owns process
//! setup and dispatch.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Set the process-wide owo-colors override. Call once, before any output.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                  Log filter (e.g., debug, ats_score_core=trace)
    ATS_SCORE_LOG_PATH        Explicit log file path
    ATS_SCORE_LOG_DIR         Log directory
    ATS_SCORE_MIN_SCORE       Default minimum overall score for `score`
    ATS_SCORE_THRESHOLDS__*   Heuristic limits (e.g., ATS_SCORE_THRESHOLDS__LONG_LINE_CHARS=100)
";
/// Command-line interface definition for ats-score.
#[derive(Parser)]
#[command(name = "ats-score")]
#[command(about = "Score resumes the way applicant tracking systems read them", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the bare version number and exit
    #[arg(long)]
    pub version_only: bool,

    /// Extra config file, merged over discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume, optionally against a job description
    Score(commands::score::ScoreArgs),

    /// List the skills and action verbs the scorer looks for
    Skills(commands::skills::SkillsArgs),

    /// Show package information and the effective configuration
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
