//! Integration tests for the CV analyzer

use cv_analyzer::config::{Config, OutputFormat};
use cv_analyzer::error::CvAnalyzerError;
use cv_analyzer::input::InputManager;
use cv_analyzer::optimizer::{generate_cover_letter, optimize_cv, CoverLetterRequest};
use cv_analyzer::output::{save_report_to_file, ReportGenerator};
use cv_analyzer::processing::document::CvDocument;
use cv_analyzer::processing::skills::SkillCategory;
use cv_analyzer::{calculate_cv_score, generate_analysis_report, AnalysisEngine};
use std::path::Path;
use tempfile::TempDir;

const CV_PATH: &str = "tests/fixtures/sample_cv.txt";
const JOB_PATH: &str = "tests/fixtures/sample_job.txt";

async fn load_fixtures() -> (String, String) {
    let mut manager = InputManager::new();
    let cv = manager.extract_text(Path::new(CV_PATH)).await.unwrap();
    let job = manager.extract_text(Path::new(JOB_PATH)).await.unwrap();
    (cv, job)
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let text = manager.extract_text(Path::new(CV_PATH)).await.unwrap();

    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Developer at TechCorp"));
    assert!(text.contains("React"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let text = manager.extract_text(Path::new("tests/fixtures/sample_cv.md")).await.unwrap();

    assert!(text.contains("John Doe"));
    assert!(text.contains("Node.js"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));

    let cv = CvDocument::parse(&text);
    assert_eq!(cv.name, "John Doe");
    assert_eq!(cv.experience.len(), 1);
    assert_eq!(cv.experience[0].company, "TechCorp");
    assert_eq!(cv.experience[0].responsibilities.len(), 2);
    assert_eq!(cv.skills, vec!["JavaScript", "React", "Node.js", "Git"]);
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new(CV_PATH);

    let first = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    manager.extract_text(Path::new(CV_PATH)).await.unwrap();

    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let err = manager
        .extract_text(Path::new("tests/fixtures/unsupported.xyz"))
        .await
        .unwrap_err();

    assert!(matches!(err, CvAnalyzerError::UnsupportedFormat(_)));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let err = manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await
        .unwrap_err();

    assert!(matches!(err, CvAnalyzerError::InvalidInput(_)));
}

#[tokio::test]
async fn test_pdf_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cv.pdf");
    std::fs::write(&path, b"%PDF-1.4").unwrap();

    let err = InputManager::new().extract_text(&path).await.unwrap_err();
    assert!(matches!(err, CvAnalyzerError::UnsupportedFormat(_)));
}

#[tokio::test]
async fn test_end_to_end_analysis() {
    let (cv, job) = load_fixtures().await;
    let report = generate_analysis_report(&cv, &job);

    let matched: Vec<&str> = report.skill_matches.iter().map(|m| m.skill.as_str()).collect();
    assert_eq!(matched, vec!["React", "Agile"]);

    let missing: Vec<&str> = report.missing_skills.iter().map(|m| m.skill.as_str()).collect();
    assert_eq!(missing, vec!["TypeScript", "AWS", "Docker", "Kubernetes", "CI/CD"]);
    assert_eq!(report.missing_by_category[&SkillCategory::Cloud].len(), 4);

    assert!(report.score > 0 && report.score <= 100);
    assert_eq!(report.score, calculate_cv_score(&cv, &job));
    assert!(report.recommendations.iter().any(|r| r.title == "CV Too Short"));
}

#[tokio::test]
async fn test_engine_reuses_reports() {
    let (cv, job) = load_fixtures().await;
    let mut engine = AnalysisEngine::new(&Config::default().analysis);

    let first = engine.analyze(&cv, &job);
    let second = engine.analyze(&cv, &job);

    assert_eq!(first, second);
    assert_eq!(engine.stats().cache_hits, 1);
}

#[tokio::test]
async fn test_markdown_report_saved() {
    let (cv, job) = load_fixtures().await;
    let report = generate_analysis_report(&cv, &job);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.md");

    let rendered = ReportGenerator::with_options(false, true, true, 5)
        .generate_report(&report, OutputFormat::Markdown)
        .unwrap();
    save_report_to_file(&rendered, &path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains(&format!("**Match Score:** {}/100", report.score)));
    assert!(saved.contains("| Cloud |  | AWS, Docker, Kubernetes, CI/CD |"));
}

#[tokio::test]
async fn test_optimize_improves_fit() {
    let (cv, job) = load_fixtures().await;
    let config = Config::default();

    let optimized = optimize_cv(&cv, &job, "Senior Frontend Engineer", "Acme", &config.optimizer);

    assert!(optimized.contains("PROFESSIONAL SUMMARY"));
    assert!(optimized.contains("Proven expertise in React, TypeScript, AWS, Docker with"));
    assert!(optimized.contains("using JavaScript/TypeScript and React"));
    assert!(optimized.ends_with("JavaScript, React, HTML, CSS, Python, Git, Agile, TypeScript, AWS, Docker"));
    assert!(calculate_cv_score(&optimized, &job) >= calculate_cv_score(&cv, &job));

    let reparsed = CvDocument::parse(&optimized);
    assert_eq!(reparsed.name, "John Doe");
    assert_eq!(reparsed.experience.len(), 2);
    assert!(reparsed.summary.starts_with("Experienced Senior Frontend Engineer"));
}

#[tokio::test]
async fn test_cover_letter_for_fixture() {
    let (cv, job) = load_fixtures().await;
    let config = Config::default();
    let request = CoverLetterRequest {
        name: "",
        role: "Senior Frontend Engineer",
        company: "Acme",
        job_description: &job,
        cv_text: &cv,
        options: &config.optimizer,
    };

    let letter = generate_cover_letter(&request, chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());

    assert!(letter.starts_with("January 15, 2025"));
    assert!(letter.contains("using React, TypeScript, AWS."));
    assert!(letter.contains("In my role as a Software Developer at TechCorp"));
    assert!(letter.contains("Your focus on user experience"));
    assert!(letter.ends_with("Sincerely,\nJohn Doe"));
}
