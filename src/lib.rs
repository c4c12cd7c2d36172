//! CV analyzer library
//!
//! Scores a CV against a job description, reports matched and missing
//! skills per category, and produces a rewritten CV plus a cover letter.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod optimizer;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{CvAnalyzerError, Result};
pub use processing::analyzer::{generate_analysis_report, AnalysisEngine, AnalysisReport};
pub use processing::keywords::extract_keywords;
pub use processing::scoring::calculate_cv_score;
pub use processing::skills::normalize;
