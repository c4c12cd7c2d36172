//! Skill catalog, categories and name normalization

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Cloud,
    Tools,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Cloud,
        SkillCategory::Tools,
        SkillCategory::SoftSkills,
    ];

    pub fn count() -> usize {
        Self::ALL.len()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Cloud => "Cloud",
            SkillCategory::Tools => "Tools",
            SkillCategory::SoftSkills => "Soft Skills",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Master skill list, grouped by category. A skill appears in exactly one group.
static SKILL_GROUPS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Frontend,
        &["React", "Vue", "Angular", "JavaScript", "TypeScript", "HTML", "CSS", "SCSS", "Tailwind", "Bootstrap"],
    ),
    (
        SkillCategory::Backend,
        &["Node.js", "Python", "Java", "C#", "PHP", "Ruby", "Go", "Rust", "Express", "Django", "Spring"],
    ),
    (
        SkillCategory::Database,
        &["MySQL", "PostgreSQL", "MongoDB", "Redis", "SQLite", "Oracle", "SQL Server", "DynamoDB"],
    ),
    (
        SkillCategory::Cloud,
        &["AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Terraform", "Jenkins", "CI/CD"],
    ),
    (
        SkillCategory::Tools,
        &["Git", "GitHub", "GitLab", "Jira", "Confluence", "Slack", "Figma", "Postman", "VS Code"],
    ),
    (
        SkillCategory::SoftSkills,
        &["Leadership", "Communication", "Team work", "Problem solving", "Critical thinking", "Agile", "Scrum"],
    ),
];

/// Alternate surface spellings keyed by canonical display name.
static SYNONYMS: &[(&str, &[&str])] = &[
    ("React", &["React.js", "ReactJS"]),
    ("Vue", &["Vue.js", "VueJS"]),
    ("Angular", &["AngularJS"]),
    ("Node.js", &["Node", "NodeJS", "Nodejs"]),
    ("Express", &["Express.js", "ExpressJS"]),
    ("C#", &["CSharp", "C-sharp", "C sharp"]),
    ("Go", &["Golang"]),
    ("PostgreSQL", &["Postgres"]),
    ("Google Cloud", &["GCP"]),
    ("Kubernetes", &["K8s"]),
    ("CI/CD", &["CI-CD", "CI CD"]),
    ("Team work", &["Teamwork"]),
    ("Problem solving", &["Problem-solving"]),
    ("Critical thinking", &["Critical-thinking"]),
];

/// Canonicalization rules applied after character stripping.
static CANONICAL_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"^react(\.?js)?$").expect("Invalid react rule"), "react"),
        (Regex::new(r"^node(\.?js)?$").expect("Invalid node rule"), "nodejs"),
        (Regex::new(r"^ci[-/]?cd$").expect("Invalid ci/cd rule"), "ci/cd"),
    ]
});

/// The full skill catalog, built once from the static tables.
static CATALOG: LazyLock<Vec<CanonicalSkill>> = LazyLock::new(|| {
    SKILL_GROUPS
        .iter()
        .flat_map(|(category, names)| {
            names
                .iter()
                .map(move |name| CanonicalSkill::new(*name, *category, synonyms_for(name)))
        })
        .collect()
});

/// A canonical skill identity and the spellings that collapse onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalSkill {
    pub name: &'static str,
    pub category: SkillCategory,
    pub synonyms: &'static [&'static str],
    variants: Vec<String>,
}

impl CanonicalSkill {
    fn new(name: &'static str, category: SkillCategory, synonyms: &'static [&'static str]) -> Self {
        let mut variants = Vec::with_capacity(synonyms.len() + 1);
        for surface in std::iter::once(&name).chain(synonyms.iter()) {
            let normalized = normalize(surface);
            if !normalized.is_empty() && !variants.contains(&normalized) {
                variants.push(normalized);
            }
        }

        Self {
            name,
            category,
            synonyms,
            variants,
        }
    }

    /// Normalized forms of the name and every synonym.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// True if any normalized variant appears among the keywords.
    pub fn is_present_in(&self, keywords: &NormalizedKeywords) -> bool {
        self.variants.iter().any(|variant| keywords.contains(variant))
    }

    /// Number of distinct keyword spellings that normalize to one of the variants.
    pub fn mentions_in(&self, keywords: &NormalizedKeywords) -> usize {
        keywords
            .entries()
            .iter()
            .filter(|entry| self.variants.contains(entry))
            .count()
    }
}

/// Normalized keyword entries with a lookup set.
///
/// There is one entry per distinct stripped spelling: `python.` and `python`
/// collapse, while `node` and `node.js` stay separate entries even though
/// both canonicalize to `nodejs`.
#[derive(Debug, Clone, Default)]
pub struct NormalizedKeywords {
    entries: Vec<String>,
    lookup: HashSet<String>,
}

impl NormalizedKeywords {
    pub fn from_keywords<'a>(keywords: impl IntoIterator<Item = &'a str>) -> Self {
        let spellings: BTreeSet<String> = keywords.into_iter().map(strip).collect();
        spellings.iter().map(|spelling| canonicalize(spelling)).collect()
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.lookup.contains(normalized)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<String> for NormalizedKeywords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let entries: Vec<String> = iter.into_iter().collect();
        let lookup = entries.iter().cloned().collect();
        Self { entries, lookup }
    }
}

/// Canonicalize a skill token or phrase.
///
/// Lowercases, keeps only `[a-z0-9.+/#-]`, drops trailing periods and
/// applies the react / node / ci-cd collapsing rules. Idempotent.
pub fn normalize(token: &str) -> String {
    canonicalize(&strip(token))
}

fn strip(token: &str) -> String {
    let stripped: String = token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '+' | '/' | '#' | '-'))
        .collect();
    stripped.trim_end_matches('.').to_string()
}

fn canonicalize(stripped: &str) -> String {
    CANONICAL_RULES
        .iter()
        .find(|(rule, _)| rule.is_match(stripped))
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| stripped.to_string())
}

/// Every skill in the master list, in category order.
pub fn catalog() -> &'static [CanonicalSkill] {
    &CATALOG
}

/// Look up the category of a canonical display name.
pub fn category_of(name: &str) -> Option<SkillCategory> {
    SKILL_GROUPS
        .iter()
        .find(|(_, names)| names.contains(&name))
        .map(|(category, _)| *category)
}

fn synonyms_for(name: &str) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|(canonical, _)| *canonical == name)
        .map(|(_, synonyms)| *synonyms)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::keywords::extract_keywords;

    #[test]
    fn test_canonical_rules() {
        assert_eq!(normalize("React.js"), "react");
        assert_eq!(normalize("ReactJS"), "react");
        assert_eq!(normalize("Node"), "nodejs");
        assert_eq!(normalize("Node.js"), "nodejs");
        assert_eq!(normalize("CI-CD"), "ci/cd");
        assert_eq!(normalize("ci cd"), "ci/cd");
        assert_eq!(normalize("CI/CD"), "ci/cd");
    }

    #[test]
    fn test_stripping() {
        assert_eq!(normalize("C#"), "c#");
        assert_eq!(normalize("C sharp"), "csharp");
        assert_eq!(normalize("Problem solving"), "problemsolving");
        assert_eq!(normalize("Python."), "python");
        assert_eq!(normalize("(AWS)"), "aws");
        assert_eq!(normalize("naïve"), "nave");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "React.js", "NODE.JS.", "CI / CD", "C-sharp", "SQL Server", "Ünïcödé", "...", "", "c++", "  VS Code ",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_every_skill_in_exactly_one_category() {
        let mut seen = HashSet::new();
        for (_, names) in SKILL_GROUPS {
            for name in *names {
                assert!(seen.insert(*name), "{name} listed twice");
            }
        }
        assert_eq!(catalog().len(), seen.len());
        for skill in catalog() {
            assert_eq!(category_of(skill.name), Some(skill.category));
        }
    }

    #[test]
    fn test_synonyms_reference_catalog_skills() {
        for (name, _) in SYNONYMS {
            assert!(category_of(name).is_some(), "synonym entry for unknown skill {name}");
        }
    }

    #[test]
    fn test_variant_presence() {
        let react = catalog().iter().find(|s| s.name == "React").unwrap();
        let keywords = extract_keywords("Built dashboards in ReactJS").normalized();

        assert!(react.is_present_in(&keywords));
        assert_eq!(react.mentions_in(&keywords), 1);
    }

    #[test]
    fn test_mentions_count_distinct_spellings() {
        let node = catalog().iter().find(|s| s.name == "Node.js").unwrap();
        let keywords = extract_keywords("Node, Node.js and NodeJS").normalized();

        assert_eq!(node.mentions_in(&keywords), 3);
    }

    #[test]
    fn test_sentence_end_period_is_not_a_second_mention() {
        let python = catalog().iter().find(|s| s.name == "Python").unwrap();
        let with_period = extract_keywords("We use Python. Python is great").normalized();
        let without_period = extract_keywords("We use Python and Python is great").normalized();

        assert_eq!(python.mentions_in(&with_period), 1);
        assert_eq!(python.mentions_in(&without_period), 1);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(SkillCategory::SoftSkills.to_string(), "Soft Skills");
        assert_eq!(SkillCategory::count(), 6);
    }
}
