//! Skill Matcher: compares extracted résumé skills with a comma-separated requirement list.
//!
//! Algorithm:
//! 1. Split the job description on commas, trim and lowercase each segment.
//!    Empty segments are dropped, so a blank description means "no requirements".
//! 2. missing = required − resume skills
//! 3. matched = required − missing
//! 4. score = |matched| / |required| × 100, rounded to 2 decimals (0 when nothing is required)

use serde::{Deserialize, Serialize};

use crate::extraction::skills::SkillSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: SkillSet,
    pub missing: SkillSet,
    pub score: f64, // 0 – 100
}

impl MatchResult {
    /// True when nothing required is missing.
    pub fn all_present(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Parses a comma-separated requirement list into a normalised set.
pub fn parse_required_skills(job_description: &str) -> SkillSet {
    job_description
        .split(',')
        .map(|segment| segment.trim().to_lowercase())
        .filter(|segment| !segment.is_empty())
        .collect()
}

pub fn match_skills(resume_skills: &SkillSet, job_description: &str) -> MatchResult {
    let required = parse_required_skills(job_description);

    let missing: SkillSet = required.difference(resume_skills).cloned().collect();
    let matched: SkillSet = required.difference(&missing).cloned().collect();

    let score = if required.is_empty() {
        0.0
    } else {
        round_to_hundredths(matched.len() as f64 / required.len() as f64 * 100.0)
    };

    MatchResult {
        matched,
        missing,
        score,
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
