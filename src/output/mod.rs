//! Report rendering and export

pub mod formatter;
pub mod report;

pub use formatter::{save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use report::{has_optimization_potential, top_missing_skills, ScoreBand};
