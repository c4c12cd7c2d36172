//! Deterministic CV tailoring and cover letter generation
//!
//! Both are template driven: terms from the configured highlight vocabulary
//! that occur in the job description steer the wording.

pub mod cover_letter;
pub mod rewriter;

pub use cover_letter::{generate_cover_letter, CoverLetterRequest};
pub use rewriter::optimize_cv;

/// Highlight terms mentioned in the job description, in vocabulary order.
///
/// Matching is a case-insensitive substring test, so "API" also matches
/// "rapid".
pub fn job_highlights<'a>(job_description: &str, vocabulary: &'a [String]) -> Vec<&'a str> {
    let job = job_description.to_lowercase();

    vocabulary
        .iter()
        .filter(|term| !term.is_empty() && job.contains(&term.to_lowercase()))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptimizerConfig;

    #[test]
    fn test_highlights_keep_vocabulary_order() {
        let config = OptimizerConfig::default();
        let found = job_highlights("Kubernetes, docker and react on AWS", &config.highlight_keywords);

        assert_eq!(found, vec!["React", "AWS", "Docker", "kubernetes"]);
    }

    #[test]
    fn test_highlights_substring_semantics() {
        let config = OptimizerConfig::default();
        let found = job_highlights("A rapid prototyping role", &config.highlight_keywords);

        assert_eq!(found, vec!["API"]);
        assert!(job_highlights("", &config.highlight_keywords).is_empty());
    }
}
