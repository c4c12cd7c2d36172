//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{has_optimization_potential, top_missing_skills, ScoreBand};
use crate::processing::analyzer::AnalysisReport;
use crate::processing::recommendations::RecommendationType;
use crate::processing::scoring::{
    DIVERSITY_POINTS, KEYWORD_MATCH_POINTS, LENGTH_IDEAL_POINTS, MISSING_PENALTY_POINTS, SECTION_POINTS,
};
use crate::processing::skills::SkillCategory;
use colored::{Color, Colorize};
use std::fmt::Write;
use std::path::Path;

/// Trait for rendering an analysis report
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    top_missing: usize,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    top_missing: usize,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

/// (label, earned points, maximum points) for each scoring component
fn breakdown_rows(report: &AnalysisReport) -> [(&'static str, f64, f64); 5] {
    let b = &report.score_breakdown;
    [
        ("Keyword match", b.keyword_match, KEYWORD_MATCH_POINTS),
        ("CV length", b.length, LENGTH_IDEAL_POINTS),
        ("Section completeness", b.section_completeness, SECTION_POINTS),
        ("Skill diversity", b.skill_diversity, DIVERSITY_POINTS),
        ("Critical skill coverage", b.missing_penalty, MISSING_PENALTY_POINTS),
    ]
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, top_missing: usize) -> Self {
        Self {
            use_colors,
            detailed,
            top_missing,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let band = ScoreBand::from_score(score);

        if self.use_colors {
            format!("[{}]", band.label().color(band.color()).bold())
        } else {
            format!("[{}]", band.label())
        }
    }

    fn format_recommendation_icon(&self, kind: RecommendationType) -> &'static str {
        match (kind, self.use_colors) {
            (RecommendationType::Critical, true) => "🚨",
            (RecommendationType::Warning, true) => "⚠️",
            (RecommendationType::Info, true) => "💡",
            (RecommendationType::Success, true) => "✅",
            (RecommendationType::Critical, false) => "[!]",
            (RecommendationType::Warning, false) => "[*]",
            (RecommendationType::Info, false) => "[-]",
            (RecommendationType::Success, false) => "[+]",
        }
    }

    fn format_categories(&self, output: &mut String, report: &AnalysisReport) -> Result<()> {
        output.push_str(&self.format_header("Skills by Category", 3));

        for category in SkillCategory::ALL {
            let matched: Vec<&str> = report.matches_by_category[&category]
                .iter()
                .map(|m| m.skill.as_str())
                .collect();
            let missing: Vec<&str> = report.missing_by_category[&category]
                .iter()
                .map(|m| m.skill.as_str())
                .collect();

            if matched.is_empty() && missing.is_empty() {
                continue;
            }

            writeln!(output, "{}:", category)?;
            if !matched.is_empty() {
                writeln!(output, "  ✓ {}", self.colorize(&matched.join(", "), Color::Green))?;
            }
            if !missing.is_empty() {
                writeln!(output, "  ✗ {}", self.colorize(&missing.join(", "), Color::Red))?;
            }
        }

        Ok(())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 CV ANALYSIS", 1));
        writeln!(output, "Match Score: {}/100 {}", report.score, self.format_score_badge(report.score))?;
        writeln!(
            output,
            "Skills matched: {} | Skills missing: {} | Words: {}",
            report.total_skill_matches, report.total_missing_skills, report.word_count
        )?;

        if self.detailed {
            output.push_str(&self.format_header("Score Breakdown", 2));
            for (label, points, max) in breakdown_rows(report) {
                writeln!(output, "{:<24} {:>5.1} / {:.0}", label, points, max)?;
            }
        }

        if !report.skill_matches.is_empty() {
            output.push_str(&self.format_header("Matched Skills", 2));
            let names: Vec<&str> = report.skill_matches.iter().map(|m| m.skill.as_str()).collect();
            writeln!(output, "{}", self.colorize(&names.join(", "), Color::Green))?;
        }

        let top_missing = top_missing_skills(report, self.top_missing);
        if !top_missing.is_empty() {
            output.push_str(&self.format_header("Top Missing Skills", 2));
            for missing in top_missing {
                let marker = if missing.is_critical() { "!" } else { "-" };
                writeln!(
                    output,
                    "{} {} ({}, mentioned {}x)",
                    marker,
                    self.colorize(&missing.skill, Color::Red),
                    missing.category,
                    missing.priority
                )?;
            }
        }

        if self.detailed {
            self.format_categories(&mut output, report)?;
        }

        if !report.recommendations.is_empty() {
            output.push_str(&self.format_header("Recommendations", 2));
            for rec in &report.recommendations {
                writeln!(
                    output,
                    "{} {}: {}",
                    self.format_recommendation_icon(rec.kind),
                    self.colorize(&rec.title, Color::Cyan),
                    rec.description
                )?;
                writeln!(output, "   → {}", rec.action)?;
            }
        }

        if has_optimization_potential(report) {
            writeln!(
                output,
                "\n{}",
                self.colorize("Run `cv-analyzer optimize` to tailor this CV to the job.", Color::BrightBlack)
            )?;
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(top_missing: usize) -> Self {
        Self { top_missing }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let band = ScoreBand::from_score(report.score);
        let mut output = String::new();

        output.push_str("# 📊 CV Analysis Report\n\n");
        writeln!(output, "**Match Score:** {}/100 {} {}\n", report.score, band.marker(), band)?;

        output.push_str("## Score Breakdown\n\n");
        output.push_str("| Component | Points | Max |\n");
        output.push_str("|-----------|--------|-----|\n");
        for (label, points, max) in breakdown_rows(report) {
            writeln!(output, "| {} | {:.1} | {:.0} |", label, points, max)?;
        }
        output.push('\n');

        output.push_str("## Skills by Category\n\n");
        output.push_str("| Category | Matched | Missing |\n");
        output.push_str("|----------|---------|---------|\n");
        for category in SkillCategory::ALL {
            let matched: Vec<&str> = report.matches_by_category[&category]
                .iter()
                .map(|m| m.skill.as_str())
                .collect();
            let missing: Vec<&str> = report.missing_by_category[&category]
                .iter()
                .map(|m| m.skill.as_str())
                .collect();
            writeln!(output, "| {} | {} | {} |", category, matched.join(", "), missing.join(", "))?;
        }
        output.push('\n');

        let top_missing = top_missing_skills(report, self.top_missing);
        if !top_missing.is_empty() {
            output.push_str("## 🎯 Top Missing Skills\n\n");
            for missing in top_missing {
                writeln!(output, "- **{}** ({}, priority {})", missing.skill, missing.category, missing.priority)?;
            }
            output.push('\n');
        }

        if !report.recommendations.is_empty() {
            output.push_str("## Recommendations\n\n");
            for (index, rec) in report.recommendations.iter().enumerate() {
                writeln!(output, "{}. **{}** `{}`: {}", index + 1, rec.title, rec.kind, rec.description)?;
                writeln!(output, "   - {}", rec.action)?;
            }
            output.push('\n');
        }

        writeln!(output, "_CV length: {} words_", report.word_count)?;
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, crate::output::report::DEFAULT_TOP_MISSING)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, top_missing: usize) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed, top_missing),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(top_missing),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, cv_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(cv_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_analysis{}.{}", base_name, timestamp_suffix, extension)
}
