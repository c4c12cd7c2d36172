//! Human-readable advice derived from the score, gaps and CV length

use crate::processing::keywords::word_count;
use crate::processing::matcher::MissingSkill;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Critical,
    Warning,
    Info,
    Success,
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecommendationType::Critical => "critical",
            RecommendationType::Warning => "warning",
            RecommendationType::Info => "info",
            RecommendationType::Success => "success",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: String,
    pub action: String,
}

impl Recommendation {
    fn new(kind: RecommendationType, title: &str, description: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.into(),
            action: action.into(),
        }
    }
}

pub const LOW_SCORE_THRESHOLD: u8 = 60;
pub const EXCELLENT_SCORE_THRESHOLD: u8 = 80;
pub const MANY_MISSING_SKILLS: usize = 5;
pub const SHORT_CV_WORDS: usize = 300;
pub const LONG_CV_WORDS: usize = 1000;

/// Build recommendations in a fixed order. Each rule is evaluated on its own
/// except the short/long CV pair, which are exclusive.
pub fn generate_recommendations(score: u8, missing_skills: &[MissingSkill], cv_text: &str) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if score < LOW_SCORE_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationType::Critical,
            "Low Match Score",
            "Your CV needs significant optimization for this role",
            "Consider adding more relevant keywords and skills",
        ));
    }

    if missing_skills.len() > MANY_MISSING_SKILLS {
        let top: Vec<&str> = missing_skills.iter().take(3).map(|m| m.skill.as_str()).collect();
        recommendations.push(Recommendation::new(
            RecommendationType::Warning,
            "Missing Key Skills",
            format!("{} important skills not found in your CV", missing_skills.len()),
            format!("Focus on adding: {}", top.join(", ")),
        ));
    }

    let words = word_count(cv_text);
    if words < SHORT_CV_WORDS {
        recommendations.push(Recommendation::new(
            RecommendationType::Info,
            "CV Too Short",
            "Your CV might be too brief for this role",
            "Consider adding more detail to your experience sections",
        ));
    } else if words > LONG_CV_WORDS {
        recommendations.push(Recommendation::new(
            RecommendationType::Info,
            "CV Too Long",
            "Your CV might be too lengthy for quick screening",
            "Consider condensing to the most relevant information",
        ));
    }

    if score >= EXCELLENT_SCORE_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationType::Success,
            "Excellent Match!",
            "Your CV is well-optimized for this position",
            "Review the optimized version and apply with confidence",
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::skills::SkillCategory;

    fn missing(names: &[&str]) -> Vec<MissingSkill> {
        names
            .iter()
            .map(|name| MissingSkill {
                skill: name.to_string(),
                category: SkillCategory::Backend,
                priority: 1,
            })
            .collect()
    }

    fn cv_of(words: usize) -> String {
        vec!["word"; words].join(" ")
    }

    fn kinds(recommendations: &[Recommendation]) -> Vec<RecommendationType> {
        recommendations.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_low_score_short_cv() {
        let recs = generate_recommendations(30, &[], "tiny cv");

        assert_eq!(kinds(&recs), vec![RecommendationType::Critical, RecommendationType::Info]);
        assert_eq!(recs[0].title, "Low Match Score");
        assert_eq!(recs[1].title, "CV Too Short");
    }

    #[test]
    fn test_missing_skills_warning_lists_top_three() {
        let gaps = missing(&["Docker", "AWS", "Go", "Rust", "Java", "PHP"]);
        let recs = generate_recommendations(65, &gaps, &cv_of(500));

        assert_eq!(kinds(&recs), vec![RecommendationType::Warning]);
        assert_eq!(recs[0].description, "6 important skills not found in your CV");
        assert_eq!(recs[0].action, "Focus on adding: Docker, AWS, Go");
    }

    #[test]
    fn test_five_missing_is_not_a_warning() {
        let gaps = missing(&["Docker", "AWS", "Go", "Rust", "Java"]);
        let recs = generate_recommendations(65, &gaps, &cv_of(500));

        assert!(recs.is_empty());
    }

    #[test]
    fn test_long_cv_and_excellent_score() {
        let recs = generate_recommendations(85, &[], &cv_of(1001));

        assert_eq!(kinds(&recs), vec![RecommendationType::Info, RecommendationType::Success]);
        assert_eq!(recs[0].title, "CV Too Long");
        assert_eq!(recs[1].title, "Excellent Match!");
    }

    #[test]
    fn test_length_thresholds() {
        assert!(generate_recommendations(70, &[], &cv_of(300)).is_empty());
        assert!(generate_recommendations(70, &[], &cv_of(1000)).is_empty());
    }

    #[test]
    fn test_type_serializes_lowercase() {
        let rec = generate_recommendations(10, &[], &cv_of(500)).remove(0);
        let json = serde_json::to_value(&rec).unwrap();

        assert_eq!(json["type"], "critical");
        assert_eq!(RecommendationType::Success.to_string(), "success");
    }
}
