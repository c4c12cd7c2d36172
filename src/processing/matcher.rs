//! Skill matching between CV and job keywords, with missing-skill ranking

use crate::processing::keywords::KeywordSet;
use crate::processing::skills::{catalog, CanonicalSkill, NormalizedKeywords, SkillCategory};
use log::debug;
use serde::{Deserialize, Serialize};

/// A catalog skill found in both the CV and the job description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill: String,
    pub category: SkillCategory,
}

/// A catalog skill the job asks for that the CV does not mention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill: String,
    pub category: SkillCategory,
    pub priority: usize,
}

impl MissingSkill {
    /// Mentioned at least twice in the job description
    pub fn is_critical(&self) -> bool {
        self.priority >= CRITICAL_PRIORITY
    }
}

/// Missing skills at or above this priority count as critical.
pub const CRITICAL_PRIORITY: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillComparison {
    pub matches: Vec<SkillMatch>,
    /// Sorted by priority, highest first; ties keep catalog order.
    pub missing: Vec<MissingSkill>,
}

/// Compare CV and job keywords over the full skill catalog.
pub fn match_skills(cv_keywords: &KeywordSet, job_keywords: &KeywordSet) -> SkillComparison {
    let cv_normalized = cv_keywords.normalized();
    let job_normalized = job_keywords.normalized();
    compare_normalized(&cv_normalized, &job_normalized)
}

/// Same as [`match_skills`] for keywords that are already normalized.
pub fn compare_normalized(cv: &NormalizedKeywords, job: &NormalizedKeywords) -> SkillComparison {
    let mut comparison = SkillComparison::default();

    for skill in catalog() {
        if !skill.is_present_in(job) {
            continue;
        }

        if skill.is_present_in(cv) {
            comparison.matches.push(SkillMatch {
                skill: skill.name.to_string(),
                category: skill.category,
            });
        } else {
            comparison.missing.push(MissingSkill {
                skill: skill.name.to_string(),
                category: skill.category,
                priority: priority(skill, job),
            });
        }
    }

    // stable: equal priorities stay in catalog order
    comparison.missing.sort_by(|a, b| b.priority.cmp(&a.priority));

    debug!(
        "Skill comparison: {} matched, {} missing",
        comparison.matches.len(),
        comparison.missing.len()
    );

    comparison
}

/// How often the job description mentions any spelling of the skill.
pub fn priority(skill: &CanonicalSkill, job_keywords: &NormalizedKeywords) -> usize {
    skill.mentions_in(job_keywords)
}
