//! Cover letter template

use crate::config::OptimizerConfig;
use crate::optimizer::job_highlights;
use crate::processing::document::CvDocument;
use crate::processing::keywords::extract_keywords;
use crate::processing::matcher::match_skills;
use chrono::NaiveDate;

const LETTER_SKILLS: usize = 3;
const FALLBACK_SKILLS: &str = "modern software technologies";

pub struct CoverLetterRequest<'a> {
    /// Signature; when empty the name parsed from the CV is used
    pub name: &'a str,
    pub role: &'a str,
    pub company: &'a str,
    pub job_description: &'a str,
    pub cv_text: &'a str,
    pub options: &'a OptimizerConfig,
}

/// Render a cover letter dated `date` (e.g. "March 5, 2025").
pub fn generate_cover_letter(request: &CoverLetterRequest<'_>, date: NaiveDate) -> String {
    let cv = CvDocument::parse(request.cv_text);
    let name = if request.name.trim().is_empty() { cv.name.as_str() } else { request.name.trim() };
    let company = request.company;
    let years = request.options.years_experience.trim_end_matches('+');

    let experience_line = match cv.experience.first() {
        Some(job) if !job.title.is_empty() && !job.company.is_empty() => {
            format!("In my role as a {} at {}, I have", job.title, job.company)
        }
        _ => "Throughout my career, I have".to_string(),
    };

    format!(
        "{date}

Dear Hiring Manager,

I am writing to express my strong interest in the {role} position at {company}. With over {years} years of experience in software development and a proven track record of delivering scalable applications, I am excited about the opportunity to contribute to your innovative team.

{experience_line} delivered production web applications using {skills}. My experience includes collaborating with cross-functional agile teams, implementing responsive user-centric designs, and working with distributed systems and APIs. These experiences have prepared me well for the challenges outlined in your job description.

What particularly excites me about {company} is your commitment to technological innovation and excellence. Your focus on {focus} aligns perfectly with my passion for creating impactful software solutions that drive business results.

I am confident that my technical expertise, leadership experience, and collaborative approach would make me a valuable addition to your team. I would welcome the opportunity to discuss how my background in full-stack development and agile methodologies can contribute to {company}'s continued success.

Thank you for considering my application. I look forward to hearing from you soon.

Sincerely,
{name}",
        date = date.format("%B %-d, %Y"),
        role = request.role,
        skills = letter_skills(request),
        focus = focus_area(request.job_description),
    )
}

/// Up to three job highlights, else skills the CV already matches.
fn letter_skills(request: &CoverLetterRequest<'_>) -> String {
    let highlights = job_highlights(request.job_description, &request.options.highlight_keywords);
    let mut skills: Vec<String> = highlights
        .into_iter()
        .take(LETTER_SKILLS)
        .map(str::to_string)
        .collect();

    if skills.is_empty() {
        let comparison = match_skills(
            &extract_keywords(request.cv_text),
            &extract_keywords(request.job_description),
        );
        skills = comparison.matches.into_iter().take(LETTER_SKILLS).map(|m| m.skill).collect();
    }

    if skills.is_empty() {
        FALLBACK_SKILLS.to_string()
    } else {
        skills.join(", ")
    }
}

/// Case-sensitive, as is the job text it quotes back.
fn focus_area(job_description: &str) -> &'static str {
    if job_description.contains("scaling") {
        "scaling solutions"
    } else if job_description.contains("user") {
        "user experience"
    } else {
        "cutting-edge technology"
    }
}
