//! Core library for ats-score.
//!
//! Scores a resume the way an applicant tracking system might: keyword
//! relevance, skill coverage, formatting, and sentence structure, blended
//! into one 0–100 number with a list of concrete issues.
//!
//! # Modules
//!
//! - [`scoring`] - The aggregate [`analyze`] entry point and [`ScoreReport`]
//! - [`skills`] - Builtin skill, verb, and section reference lists
//! - [`matcher`] - Skill presence and coverage
//! - [`keywords`] - Job keyword and action-verb relevance
//! - [`formatting`] / [`structure`] - Penalty-based layout and style checks
//! - [`text`] - Normalization and tokenization
//! - [`extract`] / [`markdown`] - Turning documents into plain text
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use ats_score_core::analyze;
//!
//! let report = analyze(
//!     "jane@example.com\nExperience: led a team shipping python services.",
//!     "Looking for python and docker experience",
//! );
//! assert!(report.overall <= 100);
//! assert!(report.missing_skills.contains(&"docker".to_string()));
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod extract;
pub mod formatting;
pub mod keywords;
pub mod markdown;
pub mod matcher;
pub mod scoring;
pub mod skills;
pub mod structure;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult, ExtractionError, ExtractionResult};
pub use extract::{DocumentFormat, extract_text};
pub use scoring::{Rating, ScoreReport, Thresholds, analyze, analyze_with};
pub use skills::{ReferenceData, SkillCategory};
