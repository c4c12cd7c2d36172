//! Configuration management for the CV analyzer
//!
//! Scoring weights are constants in `processing::scoring`, not settings.

use crate::error::{CvAnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub optimizer: OptimizerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub enable_cache: bool,
    pub cache_capacity: usize,
    /// How many missing skills the summary views show
    pub top_missing_display: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Experience claim used in the generated professional summary
    pub years_experience: String,
    /// Terms looked for in the job description when rewriting the CV
    pub highlight_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            enable_cache: true,
            cache_capacity: 32,
            top_missing_display: 5,
        }
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        let highlight_keywords = [
            "React", "JavaScript", "TypeScript", "Node.js", "Python", "AWS", "Docker",
            "leadership", "agile", "scrum", "team lead", "senior", "architecture",
            "microservices", "API", "database", "frontend", "backend", "full-stack",
            "responsive", "testing", "CI/CD", "DevOps", "cloud", "kubernetes",
        ];

        Self {
            years_experience: "4+".to_string(),
            highlight_keywords: highlight_keywords.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            optimizer: OptimizerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load an explicit config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CvAnalyzerError::Configuration(format!("Failed to parse config {}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CvAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("cv-analyzer")
            .join("config.toml")
    }
}
