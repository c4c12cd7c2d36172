//! Weighted CV scoring (0-100)
//!
//! Five additive components:
//! - keyword match, up to 40 points
//! - CV length, 5 to 15 points
//! - section completeness, up to 20 points
//! - skill diversity across categories, up to 15 points
//! - missing critical skills, 10 points minus 2 per critical gap
//!
//! The sum is rounded and clamped to `0..=100`. An empty CV or job
//! description scores exactly 0.

use crate::processing::keywords::{extract_keywords, word_count};
use crate::processing::matcher::{match_skills, SkillComparison};
use crate::processing::skills::SkillCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const KEYWORD_MATCH_POINTS: f64 = 40.0;
pub const LENGTH_IDEAL_POINTS: f64 = 15.0;
pub const LENGTH_ACCEPTABLE_POINTS: f64 = 10.0;
pub const LENGTH_FLOOR_POINTS: f64 = 5.0;
pub const SECTION_POINTS: f64 = 20.0;
pub const DIVERSITY_POINTS: f64 = 15.0;
pub const MISSING_PENALTY_POINTS: f64 = 10.0;
pub const POINTS_PER_CRITICAL_GAP: f64 = 2.0;

/// The job keyword count is scaled by this before dividing. Keyword sets hold
/// unigrams, bigrams and trigrams, so the count runs roughly 3x the word count.
pub const JOB_KEYWORD_DAMPENING: f64 = 0.1;

pub const IDEAL_WORD_RANGE: (usize, usize) = (400, 800);
pub const ACCEPTABLE_WORD_RANGE: (usize, usize) = (300, 1000);

/// Literal words whose presence anywhere in the CV counts as a section.
pub const EXPECTED_SECTIONS: [&str; 3] = ["experience", "education", "skills"];

/// Unrounded points per scoring component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword_match: f64,
    pub length: f64,
    pub section_completeness: f64,
    pub skill_diversity: f64,
    pub missing_penalty: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.keyword_match + self.length + self.section_completeness + self.skill_diversity + self.missing_penalty
    }

    /// Final 0-100 score.
    pub fn score(&self) -> u8 {
        self.total().clamp(0.0, 100.0).round() as u8
    }
}

/// Score a CV against a job description.
pub fn calculate_cv_score(cv_text: &str, job_description: &str) -> u8 {
    if cv_text.is_empty() || job_description.is_empty() {
        return 0;
    }

    let job_keywords = extract_keywords(job_description);
    let comparison = match_skills(&extract_keywords(cv_text), &job_keywords);

    score_breakdown(cv_text, job_keywords.len(), &comparison).score()
}

/// Compute every component from already-extracted pieces.
///
/// Callers must handle the empty-input short circuit themselves.
pub fn score_breakdown(cv_text: &str, job_keyword_count: usize, comparison: &SkillComparison) -> ScoreBreakdown {
    ScoreBreakdown {
        keyword_match: keyword_match_points(comparison.matches.len(), job_keyword_count),
        length: length_points(word_count(cv_text)),
        section_completeness: section_points(cv_text),
        skill_diversity: diversity_points(comparison),
        missing_penalty: missing_penalty_points(comparison),
    }
}

pub fn keyword_match_points(match_count: usize, job_keyword_count: usize) -> f64 {
    let denominator = (job_keyword_count as f64 * JOB_KEYWORD_DAMPENING).max(1.0);
    let ratio = match_count as f64 / denominator;
    (ratio * KEYWORD_MATCH_POINTS).min(KEYWORD_MATCH_POINTS)
}

pub fn length_points(words: usize) -> f64 {
    let within = |(low, high): (usize, usize)| (low..=high).contains(&words);

    if within(IDEAL_WORD_RANGE) {
        LENGTH_IDEAL_POINTS
    } else if within(ACCEPTABLE_WORD_RANGE) {
        LENGTH_ACCEPTABLE_POINTS
    } else {
        LENGTH_FLOOR_POINTS
    }
}

/// Naive substring check; a passing mention of "skills" counts.
pub fn section_points(cv_text: &str) -> f64 {
    let lowered = cv_text.to_lowercase();
    let found = EXPECTED_SECTIONS
        .iter()
        .filter(|section| lowered.contains(*section))
        .count();

    found as f64 / EXPECTED_SECTIONS.len() as f64 * SECTION_POINTS
}

pub fn diversity_points(comparison: &SkillComparison) -> f64 {
    let categories: HashSet<SkillCategory> = comparison.matches.iter().map(|m| m.category).collect();
    categories.len() as f64 / SkillCategory::count() as f64 * DIVERSITY_POINTS
}

pub fn missing_penalty_points(comparison: &SkillComparison) -> f64 {
    let critical = comparison.missing.iter().filter(|m| m.is_critical()).count();
    (MISSING_PENALTY_POINTS - POINTS_PER_CRITICAL_GAP * critical as f64).max(0.0)
}
