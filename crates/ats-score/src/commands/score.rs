//! Score command: run a resume through the ATS heuristics.

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use ats_score_core::config::Config;
use ats_score_core::scoring::{Rating, ScoreReport, analyze_with};
use ats_score_core::skills::ReferenceData;

use super::read_document;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Resume to score (.pdf, .docx, .txt, .md, or no extension).
    pub resume: Utf8PathBuf,

    /// Job description file to score against.
    #[arg(long, value_name = "FILE", conflicts_with = "job_text")]
    pub job: Option<Utf8PathBuf>,

    /// Job description given inline.
    #[arg(long, value_name = "TEXT")]
    pub job_text: Option<String>,

    /// Fail when the overall score is below this.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub min_score: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreOutput<'a> {
    file: &'a str,
    rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<u32>,
    #[serde(flatten)]
    report: &'a ScoreReport,
}

/// Score a resume file, optionally against a job description.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.resume))]
pub fn cmd_score(args: ScoreArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(
        file = %args.resume,
        job = ?args.job,
        inline_job = args.job_text.is_some(),
        min_score = ?args.min_score,
        "executing score command"
    );

    let max_input = config.input_limit();
    let resume = read_document(&args.resume, max_input, config.min_resume_chars())?;
    let job = match (args.job, args.job_text) {
        (Some(path), _) => read_document(&path, max_input, 0)?,
        (None, Some(text)) => text,
        (None, None) => String::new(),
    };
    let min_score = args.min_score.or(config.min_score);

    let report = analyze_with(&resume, &job, ReferenceData::builtin(), &config.thresholds);
    // Same test the engine uses to pick its job-relative branches
    let has_job = !job.is_empty();

    if global_json {
        let output = ScoreOutput {
            file: args.resume.as_str(),
            rating: report.rating(),
            min_score,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&args.resume, &report, has_job);
    }

    if let Some(min) = min_score
        && report.overall < min
    {
        bail!(
            "{} scores {} (min: {}). Address the issues above and add missing keywords.",
            args.resume,
            report.overall,
            min,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8Path, report: &ScoreReport, has_job: bool) {
    let rating = report.rating();
    println!("{}", file.bold());
    println!(
        "\n  {} {}/100 ({})",
        "Overall:".cyan(),
        banded(f64::from(report.overall)),
        rating,
    );

    println!();
    for (label, score) in [
        ("Keyword match", report.keyword_match),
        ("Skills", report.skills_score),
        ("Formatting", report.formatting),
        ("Structure", report.structure),
    ] {
        println!("  {:<14} {:>3}", label, banded(score));
    }

    if !report.found_skills.is_empty() {
        println!(
            "\n  {} {}",
            "Found skills:".cyan(),
            report.found_skills.join(", ")
        );
    }

    if has_job {
        if report.missing_skills.is_empty() {
            println!("\n  {} none", "Missing keywords:".cyan());
        } else {
            println!(
                "\n  {} {}",
                "Missing keywords:".yellow(),
                report.missing_skills.join(", ")
            );
        }
    }

    print_issues("Formatting issues:", &report.formatting_issues);
    print_issues("Structure issues:", &report.structure_issues);

    if report.formatting_issues.is_empty() && report.structure_issues.is_empty() {
        println!("\n  {} no formatting or structure issues", "PASS:".green());
    }
}

fn print_issues(heading: &str, issues: &[String]) {
    if issues.is_empty() {
        return;
    }
    println!("\n  {}", heading.yellow());
    for issue in issues {
        println!("    - {issue}");
    }
}

/// Render a score in its rating band's color.
fn banded(score: f64) -> String {
    let text = format!("{score:.0}");
    match Rating::from_score(score) {
        Rating::Excellent => text.green().to_string(),
        Rating::Good => text.yellow().to_string(),
        Rating::NeedsImprovement => text.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const RESUME: &str = "Jane Doe - jane@example.com\n\
        Summary\nEngineer who led and built data platforms.\n\
        Experience\nDeveloped python services and designed docker pipelines.\n\
        Education\nBSc Computer Science\n";

    fn resume_file(dir: &TempDir) -> Utf8PathBuf {
        let path = dir.path().join("resume.txt");
        fs::write(&path, RESUME).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    fn args(resume: Utf8PathBuf) -> ScoreArgs {
        ScoreArgs {
            resume,
            job: None,
            job_text: None,
            min_score: None,
        }
    }

    #[test]
    fn scores_text_and_json() {
        let tmp = TempDir::new().unwrap();
        let path = resume_file(&tmp);
        assert!(cmd_score(args(path.clone()), false, &Config::default()).is_ok());
        assert!(cmd_score(args(path), true, &Config::default()).is_ok());
    }

    #[test]
    fn min_score_gate_fails_below_threshold() {
        let tmp = TempDir::new().unwrap();
        let mut score_args = args(resume_file(&tmp));
        score_args.min_score = Some(100);
        score_args.job_text = Some("Kubernetes, terraform, and golang".to_string());
        let err = cmd_score(score_args, false, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("(min: 100)"));
    }

    #[test]
    fn config_min_score_applies_when_flag_absent() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            min_score: Some(100),
            ..Config::default()
        };
        assert!(cmd_score(args(resume_file(&tmp)), true, &config).is_err());
    }

    #[test]
    fn job_file_is_read() {
        let tmp = TempDir::new().unwrap();
        let job = tmp.path().join("job.md");
        fs::write(&job, "# Role\n\nPython").unwrap();
        let mut score_args = args(resume_file(&tmp));
        score_args.job = Some(Utf8PathBuf::try_from(job).unwrap());
        assert!(cmd_score(score_args, true, &Config::default()).is_ok());
    }

    #[test]
    fn output_flattens_report() {
        let report = ats_score_core::analyze(RESUME, "");
        let output = ScoreOutput {
            file: "resume.txt",
            rating: report.rating(),
            min_score: None,
            report: &report,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["file"], "resume.txt");
        assert!(json["overall"].is_u64());
        assert!(json["keywordMatch"].is_number());
        assert!(json.get("minScore").is_none());
    }

    #[test]
    fn output_keys_are_camel_case() {
        let report = ats_score_core::analyze(RESUME, "python");
        let output = ScoreOutput {
            file: "resume.txt",
            rating: report.rating(),
            min_score: Some(70),
            report: &report,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["minScore"], 70);
        for key in json.as_object().unwrap().keys() {
            assert!(!key.contains('_'), "snake_case key in score output: {key}");
        }
    }
}
