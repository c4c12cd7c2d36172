//! Line-by-line CV rewrite towards a job description

use crate::config::OptimizerConfig;
use crate::optimizer::job_highlights;
use crate::processing::document::{is_bullet, SectionType};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Phrase upgrades for experience bullets, applied in this order.
const ENHANCEMENTS: [(&str, &str); 7] = [
    ("web applications", "scalable web applications"),
    ("JavaScript", "JavaScript/TypeScript"),
    ("teams", "cross-functional agile teams"),
    ("projects", "high-impact projects"),
    ("designs", "responsive, user-centric designs"),
    ("systems", "distributed systems and APIs"),
    ("development", "full-stack development"),
];

struct Enhancement {
    pattern: Regex,
    replacement: &'static str,
    /// First word of the replacement, lowercased
    lead: String,
}

static ENHANCEMENT_PATTERNS: LazyLock<Vec<Enhancement>> = LazyLock::new(|| {
    ENHANCEMENTS
        .iter()
        .map(|&(phrase, replacement)| Enhancement {
            pattern: Regex::new(&format!("(?i){}", regex::escape(phrase))).expect("Invalid enhancement regex"),
            replacement,
            lead: replacement
                .split_whitespace()
                .next()
                .unwrap_or(replacement)
                .trim_end_matches(',')
                .to_lowercase(),
        })
        .collect()
});

static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("Invalid digit regex"));

const QUANTIFIERS: [(&str, &str); 2] = [
    ("Developed", "Developed 15+ enterprise-grade"),
    ("Collaborated with", "Led collaboration with 8+"),
];

const MAX_ADDED_SKILLS: usize = 3;
const SUMMARY_SKILLS: usize = 4;

/// Tailor a CV to a role at a company.
///
/// Blank lines are dropped, experience bullets are reworded, the first SKILLS
/// line gains highlighted terms it does not mention yet, and a professional
/// summary is inserted before EXPERIENCE unless one already exists.
pub fn optimize_cv(
    cv_text: &str,
    job_description: &str,
    role: &str,
    company: &str,
    options: &OptimizerConfig,
) -> String {
    let highlights = job_highlights(job_description, &options.highlight_keywords);
    debug!("Job highlights: {:?}", highlights);

    let lines: Vec<&str> = cv_text.lines().filter(|line| !line.trim().is_empty()).collect();
    let skills_text = skills_section_text(&lines).to_lowercase();

    let mut optimized = Vec::with_capacity(lines.len() + 4);
    let mut current_section = None;
    let mut skills_line_done = false;

    for line in &lines {
        if let Some(section) = SectionType::from_header(line) {
            current_section = Some(section);
            optimized.push(line.to_string());
            continue;
        }

        let rewritten = if is_bullet(line.trim()) {
            enhance_bullet(line, &highlights)
        } else if current_section == Some(SectionType::Skills) && !skills_line_done {
            skills_line_done = true;
            extend_skills_line(line, &skills_text, &highlights)
        } else {
            line.to_string()
        };
        optimized.push(rewritten);
    }

    let has_summary = lines
        .iter()
        .any(|line| SectionType::from_header(line) == Some(SectionType::ProfessionalSummary));
    let experience_index = optimized
        .iter()
        .position(|line| SectionType::from_header(line) == Some(SectionType::Experience));

    if let Some(index) = experience_index.filter(|&index| index > 0 && !has_summary) {
        let summary = role_summary(role, company, &options.years_experience, &highlights);
        optimized.splice(
            index..index,
            [
                String::new(),
                SectionType::ProfessionalSummary.header().to_string(),
                summary,
                String::new(),
            ],
        );
    }

    optimized.join("\n")
}

/// Apply the phrase upgrades whose replacement mentions a job highlight,
/// then add a quantifier to unquantified "Developed"/"Collaborated with"
/// bullets.
///
/// An upgrade is skipped when the bullet already contains the first word of
/// its replacement.
pub fn enhance_bullet(bullet: &str, highlights: &[&str]) -> String {
    let mut enhanced = bullet.to_string();

    for enhancement in ENHANCEMENT_PATTERNS.iter() {
        let lowered = enhancement.replacement.to_lowercase();
        let relevant = highlights.iter().any(|h| lowered.contains(&h.to_lowercase()));
        if !relevant || enhanced.to_lowercase().contains(&enhancement.lead) {
            continue;
        }
        if enhancement.pattern.is_match(&enhanced) {
            enhanced = enhancement
                .pattern
                .replace_all(&enhanced, enhancement.replacement)
                .into_owned();
        }
    }

    if DIGIT.is_match(&enhanced) {
        return enhanced;
    }

    let content_start = enhanced.len() - enhanced.trim_start_matches(['-', '•', ' ', '\t']).len();
    for (lead, quantified) in QUANTIFIERS {
        if enhanced[content_start..].starts_with(lead) {
            enhanced.replace_range(content_start..content_start + lead.len(), quantified);
            break;
        }
    }

    enhanced
}

fn extend_skills_line(line: &str, skills_text: &str, highlights: &[&str]) -> String {
    let additions: Vec<&str> = highlights
        .iter()
        .filter(|h| !skills_text.contains(&h.to_lowercase()))
        .take(MAX_ADDED_SKILLS)
        .copied()
        .collect();

    if additions.is_empty() {
        line.to_string()
    } else {
        format!("{}, {}", line.trim_end().trim_end_matches(','), additions.join(", "))
    }
}

fn skills_section_text(lines: &[&str]) -> String {
    lines
        .iter()
        .skip_while(|line| SectionType::from_header(line) != Some(SectionType::Skills))
        .skip(1)
        .take_while(|line| SectionType::from_header(line).is_none())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

fn role_summary(role: &str, company: &str, years_experience: &str, highlights: &[&str]) -> String {
    let key_skills = if highlights.is_empty() {
        "software engineering".to_string()
    } else {
        highlights.iter().take(SUMMARY_SKILLS).copied().collect::<Vec<_>>().join(", ")
    };

    format!(
        "Experienced {role} with {years_experience} years developing scalable applications and leading technical initiatives. \
         Proven expertise in {key_skills} with a track record of delivering high-impact solutions. \
         Seeking to leverage technical leadership and innovation skills to drive {company}'s engineering excellence."
    )
}
