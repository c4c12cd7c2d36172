//! Analysis report assembly and the memoizing analysis engine

use crate::config::AnalysisConfig;
use crate::processing::keywords::{extract_keywords, word_count};
use crate::processing::matcher::{match_skills, MissingSkill, SkillMatch};
use crate::processing::recommendations::{generate_recommendations, Recommendation};
use crate::processing::scoring::{score_breakdown, ScoreBreakdown};
use crate::processing::skills::SkillCategory;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;

/// Missing skills kept in the report after priority sorting
pub const MAX_REPORTED_MISSING: usize = 10;

/// Everything derived from one (CV, job description) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Overall match score (0-100)
    pub score: u8,

    /// Points per scoring component, before rounding
    pub score_breakdown: ScoreBreakdown,

    pub total_skill_matches: usize,
    pub total_missing_skills: usize,

    pub skill_matches: Vec<SkillMatch>,

    /// Highest-priority missing skills, at most [`MAX_REPORTED_MISSING`]
    pub missing_skills: Vec<MissingSkill>,

    /// Every category is present, possibly with an empty list
    pub matches_by_category: BTreeMap<SkillCategory, Vec<SkillMatch>>,
    pub missing_by_category: BTreeMap<SkillCategory, Vec<MissingSkill>>,

    /// Whitespace-separated words in the raw CV text
    pub word_count: usize,

    pub recommendations: Vec<Recommendation>,
}

/// Analyze a CV against a job description.
pub fn generate_analysis_report(cv_text: &str, job_description: &str) -> AnalysisReport {
    let cv_keywords = extract_keywords(cv_text);
    let job_keywords = extract_keywords(job_description);
    let comparison = match_skills(&cv_keywords, &job_keywords);

    let score_breakdown = if cv_text.is_empty() || job_description.is_empty() {
        ScoreBreakdown::default()
    } else {
        score_breakdown(cv_text, job_keywords.len(), &comparison)
    };
    let score = score_breakdown.score();

    let recommendations = generate_recommendations(score, &comparison.missing, cv_text);
    let matches_by_category = bucket_by_category(&comparison.matches, |m| m.category);
    let missing_by_category = bucket_by_category(&comparison.missing, |m| m.category);

    debug!(
        "CV keywords: {}, job keywords: {}, score: {}",
        cv_keywords.len(),
        job_keywords.len(),
        score
    );

    AnalysisReport {
        score,
        score_breakdown,
        total_skill_matches: comparison.matches.len(),
        total_missing_skills: comparison.missing.len(),
        missing_skills: comparison.missing.iter().take(MAX_REPORTED_MISSING).cloned().collect(),
        skill_matches: comparison.matches,
        matches_by_category,
        missing_by_category,
        word_count: word_count(cv_text),
        recommendations,
    }
}

fn bucket_by_category<T: Clone>(
    items: &[T],
    category_of: impl Fn(&T) -> SkillCategory,
) -> BTreeMap<SkillCategory, Vec<T>> {
    let mut buckets: BTreeMap<SkillCategory, Vec<T>> =
        SkillCategory::ALL.iter().map(|category| (*category, Vec::new())).collect();

    for item in items {
        buckets.entry(category_of(item)).or_default().push(item.clone());
    }

    buckets
}

/// Report analysis that remembers recent results.
///
/// Analysis is a pure function of its two inputs, so identical inputs can
/// share one report.
pub struct AnalysisEngine {
    cache: HashMap<(String, String), Arc<AnalysisReport>>,
    insertion_order: VecDeque<(String, String)>,
    enable_cache: bool,
    capacity: usize,
    cache_hits: usize,
    cache_misses: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStats {
    pub cache_size: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
}

impl AnalysisEngine {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            cache: HashMap::new(),
            insertion_order: VecDeque::new(),
            enable_cache: config.enable_cache && config.cache_capacity > 0,
            capacity: config.cache_capacity,
            cache_hits: 0,
            cache_misses: 0,
        }
    }

    pub fn analyze(&mut self, cv_text: &str, job_description: &str) -> Arc<AnalysisReport> {
        if !self.enable_cache {
            return Arc::new(generate_analysis_report(cv_text, job_description));
        }

        let key = (cv_text.to_string(), job_description.to_string());
        if let Some(report) = self.cache.get(&key) {
            self.cache_hits += 1;
            debug!("Using cached analysis report");
            return Arc::clone(report);
        }

        self.cache_misses += 1;
        let report = Arc::new(generate_analysis_report(cv_text, job_description));

        if self.cache.len() >= self.capacity {
            if let Some(oldest) = self.insertion_order.pop_front() {
                self.cache.remove(&oldest);
            }
        }
        self.insertion_order.push_back(key.clone());
        self.cache.insert(key, Arc::clone(&report));

        info!("Analysis complete: score {}/100", report.score);
        report
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.insertion_order.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            cache_size: self.cache.len(),
            cache_hits: self.cache_hits,
            cache_misses: self.cache_misses,
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CV: &str = "John Doe\nEXPERIENCE\n- Developed web applications using JavaScript and React\nEDUCATION\nSKILLS\nJavaScript, React";
    const JOB: &str = "We need a React and JavaScript developer with CI/CD experience";

    #[test]
    fn test_reference_scenario() {
        let report = generate_analysis_report(CV, JOB);

        let matched: Vec<&str> = report.skill_matches.iter().map(|m| m.skill.as_str()).collect();
        assert!(matched.contains(&"React"));
        assert!(matched.contains(&"JavaScript"));

        let ci = report.missing_skills.iter().find(|m| m.skill == "CI/CD").unwrap();
        assert!(ci.priority >= 1);
        assert_eq!(ci.category, SkillCategory::Cloud);
        assert!(report.score > 0);
    }

    #[test]
    fn test_reference_scenario_exact_score() {
        // job: 9 tokens -> 9 + 8 + 7 = 24 keywords, denominator 2.4
        // 2 matches -> 33.33; 15 words -> 5; all sections -> 20;
        // one category -> 2.5; no critical gaps -> 10; total 70.83
        let report = generate_analysis_report(CV, JOB);

        assert_eq!(report.score, 71);
        assert_eq!(report.word_count, 15);
        assert!((report.score_breakdown.total() - 70.8333).abs() < 0.01);
        assert_eq!(report.score, crate::processing::scoring::calculate_cv_score(CV, JOB));
    }

    #[test]
    fn test_every_category_present() {
        for (cv, job) in [("", ""), (CV, JOB), ("Rust", "Go")] {
            let report = generate_analysis_report(cv, job);
            let match_keys: Vec<_> = report.matches_by_category.keys().copied().collect();
            let missing_keys: Vec<_> = report.missing_by_category.keys().copied().collect();

            assert_eq!(match_keys, SkillCategory::ALL.to_vec());
            assert_eq!(missing_keys, SkillCategory::ALL.to_vec());
        }
    }

    #[test]
    fn test_missing_list_truncated_to_ten() {
        let job = "React Vue Angular TypeScript HTML CSS Python Java PHP Ruby Rust Django \
                   MySQL Redis AWS Docker Kubernetes Git Jira Figma";
        let report = generate_analysis_report("Nothing to see", job);

        assert_eq!(report.total_missing_skills, 20);
        assert_eq!(report.missing_skills.len(), MAX_REPORTED_MISSING);
        let bucketed: usize = report.missing_by_category.values().map(Vec::len).sum();
        assert_eq!(bucketed, 20);
    }

    #[test]
    fn test_empty_inputs() {
        let report = generate_analysis_report("", JOB);

        assert_eq!(report.score, 0);
        assert_eq!(report.word_count, 0);
        assert!(report.skill_matches.is_empty());
        assert_eq!(report.score_breakdown, ScoreBreakdown::default());
    }

    #[test]
    fn test_whitespace_job_is_not_empty() {
        let report = generate_analysis_report("EXPERIENCE EDUCATION SKILLS React", "  \n ");

        assert_eq!(report.score, 35);
        assert!(report.skill_matches.is_empty());
    }

    #[test]
    fn test_trailing_period_does_not_raise_priority() {
        let report = generate_analysis_report("Nothing", "We use Python. Python is great");

        assert_eq!(report.missing_skills[0].skill, "Python");
        assert_eq!(report.missing_skills[0].priority, 1);
        assert_eq!(
            report.score,
            generate_analysis_report("Nothing", "We use Python and Python is great").score
        );
    }

    #[test]
    fn test_report_is_deterministic() {
        assert_eq!(generate_analysis_report(CV, JOB), generate_analysis_report(CV, JOB));
    }

    #[test]
    fn test_engine_caches_identical_inputs() {
        let mut engine = AnalysisEngine::default();

        let first = engine.analyze(CV, JOB);
        let second = engine.analyze(CV, JOB);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(engine.stats(), EngineStats { cache_size: 1, cache_hits: 1, cache_misses: 1 });
    }

    #[test]
    fn test_engine_evicts_oldest_entry() {
        let config = AnalysisConfig {
            cache_capacity: 2,
            ..AnalysisConfig::default()
        };
        let mut engine = AnalysisEngine::new(&config);

        let first = engine.analyze("one", JOB);
        engine.analyze("two", JOB);
        engine.analyze("three", JOB);
        assert_eq!(engine.cache_size(), 2);

        let again = engine.analyze("one", JOB);
        assert!(!Arc::ptr_eq(&first, &again));
        assert_eq!(*first, *again);
    }

    #[test]
    fn test_engine_without_cache() {
        let config = AnalysisConfig {
            enable_cache: false,
            ..AnalysisConfig::default()
        };
        let mut engine = AnalysisEngine::new(&config);

        engine.analyze(CV, JOB);
        assert_eq!(engine.cache_size(), 0);

        engine.clear_cache();
        assert_eq!(engine.stats().cache_misses, 0);
    }
}
