//! Keyword extraction, skill matching, scoring and report assembly

pub mod analyzer;
pub mod document;
pub mod keywords;
pub mod matcher;
pub mod recommendations;
pub mod scoring;
pub mod skills;
