//! Report view helpers shared by the formatters

use crate::processing::analyzer::AnalysisReport;
use crate::processing::matcher::MissingSkill;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of missing skills shown in summaries
pub const DEFAULT_TOP_MISSING: usize = 5;

/// Scores below this always leave room for optimization.
pub const OPTIMIZATION_SCORE_THRESHOLD: u8 = 70;
pub const OPTIMIZATION_MISSING_THRESHOLD: usize = 3;

/// Qualitative band for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Fair,
            _ => ScoreBand::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent Match!",
            ScoreBand::Good => "Good Match",
            ScoreBand::Fair => "Fair Match",
            ScoreBand::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Good => Color::Yellow,
            ScoreBand::Fair => Color::TrueColor { r: 255, g: 165, b: 0 },
            ScoreBand::NeedsImprovement => Color::Red,
        }
    }

    /// Emoji marker used in Markdown output
    pub fn marker(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "🟢",
            ScoreBand::Good => "🟡",
            ScoreBand::Fair => "🟠",
            ScoreBand::NeedsImprovement => "🔴",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn has_optimization_potential(report: &AnalysisReport) -> bool {
    report.score < OPTIMIZATION_SCORE_THRESHOLD || report.total_missing_skills > OPTIMIZATION_MISSING_THRESHOLD
}

pub fn top_missing_skills(report: &AnalysisReport, n: usize) -> &[MissingSkill] {
    &report.missing_skills[..n.min(report.missing_skills.len())]
}
