//! Skills command: list the reference data the scorer matches against.

use clap::{Args, ValueEnum};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use ats_score_core::skills::{ReferenceData, SkillCategory};

/// Which list to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SkillList {
    /// Technical skills.
    Technical,
    /// Soft skills.
    Soft,
    /// Action verbs rewarded when no job description is given.
    Verbs,
}

/// Arguments for the `skills` subcommand.
#[derive(Args, Debug, Default)]
pub struct SkillsArgs {
    /// Only print one list (default: all, in scan order).
    #[arg(long, value_enum)]
    pub category: Option<SkillList>,
}

#[derive(Serialize, Default)]
struct SkillListing<'a> {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    technical: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    soft: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    action_verbs: Vec<&'a str>,
}

impl<'a> SkillListing<'a> {
    fn build(reference: &'a ReferenceData, only: Option<SkillList>) -> Self {
        let terms = |category| -> Vec<&'a str> {
            reference
                .skills_in(category)
                .map(|skill| skill.term.as_str())
                .collect()
        };
        let wants = |list| only.is_none_or(|o| o == list);

        Self {
            technical: if wants(SkillList::Technical) {
                terms(SkillCategory::Technical)
            } else {
                Vec::new()
            },
            soft: if wants(SkillList::Soft) {
                terms(SkillCategory::Soft)
            } else {
                Vec::new()
            },
            action_verbs: if wants(SkillList::Verbs) {
                reference.action_verbs().iter().map(String::as_str).collect()
            } else {
                Vec::new()
            },
        }
    }
}

/// Print the builtin skill lists.
#[instrument(name = "cmd_skills", skip_all)]
pub fn cmd_skills(args: SkillsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(category = ?args.category, "executing skills command");

    let listing = SkillListing::build(ReferenceData::builtin(), args.category);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for (heading, terms) in [
        ("Technical skills", &listing.technical),
        ("Soft skills", &listing.soft),
        ("Action verbs", &listing.action_verbs),
    ] {
        if terms.is_empty() {
            continue;
        }
        println!("{} ({})", heading.bold(), terms.len());
        for term in terms {
            println!("  {term}");
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ats_score_core::skills::{ACTION_VERBS, SOFT_SKILLS, TECHNICAL_SKILLS};

    #[test]
    fn all_lists_by_default() {
        let listing = SkillListing::build(ReferenceData::builtin(), None);
        assert_eq!(listing.technical, TECHNICAL_SKILLS);
        assert_eq!(listing.soft, SOFT_SKILLS);
        assert_eq!(listing.action_verbs, ACTION_VERBS);
    }

    #[test]
    fn single_category_filters_others() {
        let listing = SkillListing::build(ReferenceData::builtin(), Some(SkillList::Soft));
        assert!(listing.technical.is_empty());
        assert!(listing.action_verbs.is_empty());
        assert_eq!(listing.soft[0], "communication");
    }

    #[test]
    fn command_succeeds_in_both_modes() {
        assert!(cmd_skills(SkillsArgs::default(), false).is_ok());
        let verbs = SkillsArgs {
            category: Some(SkillList::Verbs),
        };
        assert!(cmd_skills(verbs, true).is_ok());
    }
}
