//! CLI interface for the CV analyzer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Extensions accepted for CV and job description files
pub const TEXT_EXTENSIONS: [&str; 4] = ["txt", "text", "md", "markdown"];

#[derive(Parser)]
#[command(name = "cv-analyzer")]
#[command(about = "Score a CV against a job description and tailor it to the role")]
#[command(long_about = "Analyze CV and job description overlap with a skill catalog, get a 0-100 match score with recommendations, and generate a tailored CV and cover letter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a CV against a job description
    Analyze {
        /// Path to CV file (TXT, MD)
        #[arg(long)]
        cv: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Show the score breakdown and per-category skills
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file; without a value a name is derived from the CV file
        #[arg(short, long, num_args = 0..=1)]
        save: Option<Option<PathBuf>>,
    },

    /// Write a tailored CV and a cover letter for a role
    Optimize {
        /// Path to CV file (TXT, MD)
        #[arg(long)]
        cv: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Target role, e.g. "Senior Frontend Engineer"
        #[arg(short, long)]
        role: String,

        /// Hiring company
        #[arg(long)]
        company: String,

        /// Name to sign the cover letter with (defaults to the CV's first line)
        #[arg(short, long)]
        name: Option<String>,

        /// Directory for the generated files; prints to stdout when omitted
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if allowed_extensions.contains(&ext.to_lowercase().as_str()) => Ok(()),
        Some(ext) => Err(format!(
            "Unsupported file extension: .{}. Allowed: {}",
            ext,
            allowed_extensions.join(", ")
        )),
        None => Err("File has no extension".to_string()),
    }
}
