//! Structured CV model: parsing section-header text and writing it back
//!
//! The text layout uses literal `EXPERIENCE` / `EDUCATION` / `SKILLS`
//! header lines, as produced by form-based CV builders.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Invalid email regex")
});

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("Invalid phone regex")
});

static PERIOD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("Invalid period regex"));

const DEFAULT_NAME: &str = "Your Name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionType {
    ProfessionalSummary,
    Summary,
    Experience,
    Education,
    Skills,
}

impl SectionType {
    /// Match a trimmed line against the known headers, ignoring case.
    pub fn from_header(line: &str) -> Option<Self> {
        match line.trim().to_uppercase().as_str() {
            "PROFESSIONAL SUMMARY" => Some(SectionType::ProfessionalSummary),
            "SUMMARY" => Some(SectionType::Summary),
            "EXPERIENCE" => Some(SectionType::Experience),
            "EDUCATION" => Some(SectionType::Education),
            "SKILLS" => Some(SectionType::Skills),
            _ => None,
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            SectionType::ProfessionalSummary => "PROFESSIONAL SUMMARY",
            SectionType::Summary => "SUMMARY",
            SectionType::Experience => "EXPERIENCE",
            SectionType::Education => "EDUCATION",
            SectionType::Skills => "SKILLS",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvDocument {
    pub name: String,
    pub title: String,
    pub contact: ContactInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

/// Lines grouped under their section header, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CvSections {
    pub preamble: Vec<String>,
    pub sections: Vec<(SectionType, Vec<String>)>,
}

impl CvSections {
    pub fn split(text: &str) -> Self {
        let mut result = Self::default();

        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            if let Some(section) = SectionType::from_header(line) {
                result.sections.push((section, Vec::new()));
            } else if let Some((_, lines)) = result.sections.last_mut() {
                lines.push(line.to_string());
            } else {
                result.preamble.push(line.to_string());
            }
        }

        result
    }

    /// Content of the last occurrence of a section, if present.
    pub fn get(&self, section: SectionType) -> Option<&[String]> {
        self.sections
            .iter()
            .rev()
            .find(|(kind, _)| *kind == section)
            .map(|(_, lines)| lines.as_slice())
    }
}

impl CvDocument {
    /// Parse CV text laid out with section header lines.
    pub fn parse(text: &str) -> Self {
        let sections = CvSections::split(text);

        let name = sections
            .preamble
            .first()
            .map(|line| line.trim().to_string())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        let summary = sections
            .get(SectionType::ProfessionalSummary)
            .or_else(|| sections.get(SectionType::Summary))
            .map(|lines| lines.join("\n"))
            .unwrap_or_default();

        Self {
            name,
            title: sections
                .preamble
                .get(1)
                .map(|line| line.trim())
                .filter(|line| !is_contact_line(line))
                .map(str::to_string)
                .unwrap_or_default(),
            contact: ContactInfo {
                email: first_match(&EMAIL_REGEX, text),
                phone: first_match(&PHONE_REGEX, text),
            },
            summary,
            experience: parse_experience(sections.get(SectionType::Experience).unwrap_or_default()),
            education: parse_education(sections.get(SectionType::Education).unwrap_or_default()),
            skills: parse_skills(sections.get(SectionType::Skills).unwrap_or_default()),
        }
    }

    /// Serialize back into the section-header text layout.
    pub fn to_text(&self) -> String {
        let mut text = format!("{}\n", self.name);
        if !self.title.is_empty() {
            text.push_str(&format!("{}\n", self.title));
        }

        let contact: Vec<&str> = [self.contact.email.as_str(), self.contact.phone.as_str()]
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect();
        if !contact.is_empty() {
            text.push_str(&format!("{}\n", contact.join(" | ")));
        }

        if !self.summary.is_empty() {
            text.push_str(&format!("\n{}\n{}\n", SectionType::ProfessionalSummary, self.summary));
        }

        if !self.experience.is_empty() {
            text.push_str(&format!("\n{}\n", SectionType::Experience));
            for job in &self.experience {
                text.push_str(&job.title);
                if !job.company.is_empty() {
                    text.push_str(&format!(" at {}", job.company));
                }
                if !job.period.is_empty() {
                    text.push_str(&format!(" ({})", job.period));
                }
                text.push('\n');
                for responsibility in &job.responsibilities {
                    text.push_str(&format!("- {}\n", responsibility));
                }
                text.push('\n');
            }
        }

        if !self.education.is_empty() {
            text.push_str(&format!("{}\n", SectionType::Education));
            for entry in &self.education {
                text.push_str(&format!("{}\n{}", entry.degree, entry.institution));
                if !entry.period.is_empty() {
                    text.push_str(&format!(" ({})", entry.period));
                }
                text.push('\n');
                if !entry.details.is_empty() {
                    text.push_str(&format!("{}\n", entry.details));
                }
                text.push('\n');
            }
        }

        if !self.skills.is_empty() {
            text.push_str(&format!("{}\n{}", SectionType::Skills, self.skills.join(", ")));
        }

        text
    }
}

fn first_match(regex: &Regex, text: &str) -> String {
    regex.find(text).map(|m| m.as_str().to_string()).unwrap_or_default()
}

fn is_contact_line(line: &str) -> bool {
    EMAIL_REGEX.is_match(line) || PHONE_REGEX.is_match(line)
}

pub(crate) fn is_bullet(line: &str) -> bool {
    line.starts_with('-') || line.starts_with('•')
}

fn extract_period(line: &str) -> String {
    PERIOD_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn strip_period(line: &str) -> &str {
    line.split('(').next().unwrap_or(line).trim()
}

fn parse_experience(lines: &[String]) -> Vec<ExperienceEntry> {
    let mut entries: Vec<ExperienceEntry> = Vec::new();

    for line in lines.iter().map(|l| l.trim()) {
        if is_bullet(line) {
            if let Some(current) = entries.last_mut() {
                let responsibility = line.trim_start_matches(['-', '•']).trim();
                current.responsibilities.push(responsibility.to_string());
            }
            continue;
        }

        let (title, company) = match line.split_once(" at ") {
            Some((title, company)) => (title.trim(), strip_period(company)),
            None => (strip_period(line), ""),
        };
        entries.push(ExperienceEntry {
            title: title.to_string(),
            company: company.to_string(),
            period: extract_period(line),
            responsibilities: Vec::new(),
        });
    }

    entries
}

/// Builder layout: degree line, then institution line with an optional
/// period. A trailing line without a period is kept as details.
fn parse_education(lines: &[String]) -> Vec<EducationEntry> {
    let mut entries: Vec<EducationEntry> = Vec::new();
    let mut pending_degree: Option<&str> = None;

    for line in lines.iter().map(|l| l.trim()).filter(|l| !is_bullet(l)) {
        match pending_degree.take() {
            Some(degree) => entries.push(EducationEntry {
                degree: degree.to_string(),
                institution: strip_period(line).to_string(),
                period: extract_period(line),
                details: String::new(),
            }),
            None if !extract_period(line).is_empty() => entries.push(EducationEntry {
                degree: strip_period(line).to_string(),
                institution: String::new(),
                period: extract_period(line),
                details: String::new(),
            }),
            None => pending_degree = Some(line),
        }
    }

    if let Some(degree) = pending_degree {
        match entries.last_mut() {
            Some(last) if !last.institution.is_empty() && last.details.is_empty() => {
                last.details = degree.to_string();
            }
            _ => entries.push(EducationEntry {
                degree: degree.to_string(),
                ..EducationEntry::default()
            }),
        }
    }

    entries
}

fn parse_skills(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}
