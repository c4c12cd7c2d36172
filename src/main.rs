//! cv-analyzer: score a CV against a job description and tailor it

use anyhow::{Context, Result};
use clap::Parser;
use cv_analyzer::cli::{self, Cli, Commands, ConfigAction, TEXT_EXTENSIONS};
use cv_analyzer::config::Config;
use cv_analyzer::input::InputManager;
use cv_analyzer::optimizer::{generate_cover_letter, optimize_cv, CoverLetterRequest};
use cv_analyzer::output::{save_report_to_file, suggest_filename, ReportGenerator};
use cv_analyzer::processing::analyzer::AnalysisEngine;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::process;
use unicode_segmentation::UnicodeSegmentation;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path).with_context(|| format!("Reading {}", path.display())),
        None => Ok(Config::load()?),
    }
}

async fn read_inputs(cv: &Path, job: &Path) -> Result<(String, String)> {
    cli::validate_file_extension(cv, &TEXT_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("CV file {}: {}", cv.display(), e))?;
    cli::validate_file_extension(job, &TEXT_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("Job description file {}: {}", job.display(), e))?;

    let mut input_manager = InputManager::new();
    let cv_text = input_manager
        .extract_text(cv)
        .await
        .with_context(|| format!("Reading CV {}", cv.display()))?;
    let job_text = input_manager
        .extract_text(job)
        .await
        .with_context(|| format!("Reading job description {}", job.display()))?;

    debug!("CV preview: {}", truncate_text(&cv_text, 120));
    debug!("Job preview: {}", truncate_text(&job_text, 120));
    Ok((cv_text, job_text))
}

async fn run_command(command: Commands, config: Config, config_override: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            cv,
            job,
            detailed,
            output,
            save,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(anyhow::Error::msg)?,
                None => config.output.format,
            };

            let (cv_text, job_text) = read_inputs(&cv, &job).await?;

            info!("Analyzing {} against {}", cv.display(), job.display());
            let mut engine = AnalysisEngine::new(&config.analysis);
            let report = engine.analyze(&cv_text, &job_text);

            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(
                use_colors,
                detailed || config.output.detailed,
                config.output.pretty_json,
                config.analysis.top_missing_display,
            );
            let rendered = generator.generate_report(&report, output_format)?;

            match save {
                Some(path) => {
                    let path = path.unwrap_or_else(|| {
                        PathBuf::from(suggest_filename(output_format, &cv.to_string_lossy(), false))
                    });
                    save_report_to_file(&rendered, &path)
                        .with_context(|| format!("Writing report to {}", path.display()))?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Optimize {
            cv,
            job,
            role,
            company,
            name,
            out_dir,
        } => {
            let (cv_text, job_text) = read_inputs(&cv, &job).await?;

            info!("Tailoring {} for {} at {}", cv.display(), role, company);
            let optimized = optimize_cv(&cv_text, &job_text, &role, &company, &config.optimizer);
            let request = CoverLetterRequest {
                name: name.as_deref().unwrap_or_default(),
                role: &role,
                company: &company,
                job_description: &job_text,
                cv_text: &cv_text,
                options: &config.optimizer,
            };
            let cover_letter = generate_cover_letter(&request, chrono::Local::now().date_naive());

            match out_dir {
                Some(dir) => {
                    let stem = cv.file_stem().unwrap_or_default().to_string_lossy();
                    let cv_path = dir.join(format!("{}_optimized.txt", stem));
                    let letter_path = dir.join(format!("{}_cover_letter.txt", stem));

                    save_report_to_file(&optimized, &cv_path)
                        .with_context(|| format!("Writing {}", cv_path.display()))?;
                    save_report_to_file(&cover_letter, &letter_path)
                        .with_context(|| format!("Writing {}", letter_path.display()))?;

                    println!("✅ Optimized CV: {}", cv_path.display());
                    println!("✅ Cover letter: {}", letter_path.display());
                }
                None => {
                    println!("{}\n", optimized);
                    println!("{}", "-".repeat(60));
                    println!("\n{}", cover_letter);
                }
            }
        }

        Commands::Config { action } => {
            let config_path = config_override.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", config_path.display());
                    println!("Analysis cache: {} (capacity {})", config.analysis.enable_cache, config.analysis.cache_capacity);
                    println!("Missing skills shown: {}", config.analysis.top_missing_display);
                    println!("Years of experience: {}", config.optimizer.years_experience);
                    println!("Highlight keywords: {}", config.optimizer.highlight_keywords.join(", "));
                    println!("Output format: {:?}", config.output.format);
                    println!("Detailed: {} | Colors: {} | Pretty JSON: {}",
                        config.output.detailed, config.output.color_output, config.output.pretty_json);
                }

                Some(ConfigAction::Reset) => {
                    Config::default()
                        .save_to(&config_path)
                        .with_context(|| format!("Writing {}", config_path.display()))?;
                    println!("✅ Configuration reset: {}", config_path.display());
                }

                Some(ConfigAction::Path) => println!("{}", config_path.display()),
            }
        }
    }

    Ok(())
}

/// Truncate on a word boundary without splitting grapheme clusters
fn truncate_text(text: &str, max_graphemes: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_graphemes {
        return text.to_string();
    }

    let truncated = graphemes[..max_graphemes].concat();
    let cut = truncated.rfind(char::is_whitespace).unwrap_or(truncated.len());
    format!("{}...", &truncated[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("hello brave new world", 12), "hello brave...");
        assert_eq!(truncate_text("naïve café", 7), "naïve...");
    }
}
