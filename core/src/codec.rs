//! Conversion between multi-line form text and structured array fields.
//!
//! Parsing is permissive: lines are trimmed, blank lines are dropped and
//! missing pieces are defaulted, so no text is ever rejected. The trip
//! text → array → text is lossy only in whitespace and blank lines.

use crate::types::{Language, Requirement, DEFAULT_LANGUAGE_LEVEL};

/// Split `text` into trimmed, non-empty lines, preserving order.
pub fn parse_lines(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// One requirement per non-empty line.
pub fn parse_requirement_lines(text: Option<&str>) -> Vec<Requirement> {
    parse_lines(text)
        .into_iter()
        .map(|name| Requirement { name })
        .collect()
}

/// One language per non-empty line, written as `name[,level]`.
///
/// Only the first two comma-separated parts are read; anything after a
/// second comma is ignored. A missing or blank level becomes `Beginner`.
pub fn parse_language_lines(text: Option<&str>) -> Vec<Language> {
    parse_lines(text)
        .iter()
        .map(|line| {
            let mut parts = line.split(',').map(str::trim);
            let name = parts.next().unwrap_or_default();
            let level = parts
                .next()
                .filter(|level| !level.is_empty())
                .unwrap_or(DEFAULT_LANGUAGE_LEVEL);
            Language::new(name, level)
        })
        .collect()
}

pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

pub fn join_requirements(requirements: &[Requirement]) -> String {
    requirements
        .iter()
        .map(|req| req.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn join_languages(languages: &[Language]) -> String {
    languages
        .iter()
        .map(|lang| format!("{},{}", lang.name, lang.level))
        .collect::<Vec<_>>()
        .join("\n")
}
