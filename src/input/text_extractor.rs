//! Text extraction from supported file formats

use crate::error::{CvAnalyzerError, Result};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Rejects PDF input; only text formats are read.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Err(CvAnalyzerError::UnsupportedFormat(format!(
            "PDF input is not supported, export '{}' as .txt or .md",
            path.display()
        )))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Render Markdown and strip the markup down to trimmed, non-empty lines.
/// List items keep a `- ` bullet.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut html_output = String::new();
    html::push_html(&mut html_output, Parser::new(markdown));

    let text = html_output
        .replace("<li>", "- ")
        .replace("<br />", "\n")
        .replace("</p>", "\n\n")
        .replace("</li>", "\n");
    let stripped = HTML_TAG.replace_all(&text, "");
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_is_flattened() {
        let text = markdown_to_text("# Jane Doe\n\n## SKILLS\n\n- **React** & Node.js\n- C#\n");

        assert_eq!(text, "Jane Doe\nSKILLS\n- React & Node.js\n- C#");
    }

    #[tokio::test]
    async fn test_pdf_is_rejected() {
        let err = PdfExtractor.extract(Path::new("cv.pdf")).await.unwrap_err();
        assert!(matches!(err, CvAnalyzerError::UnsupportedFormat(_)));
    }
}
