//! Content quality assessment for extracted article bodies.

use std::collections::HashSet;

use crate::extractor::model::ContentQuality;

/// Minimum character count an article body should reach.
pub const MIN_CONTENT_LENGTH: usize = 250;

const MIN_WORD_COUNT: usize = 50;
const MIN_VOCABULARY_RATIO: f64 = 0.3;
const MIN_SENTENCE_COUNT: usize = 3;
const MIN_SENTENCE_LEN: usize = 10;

/// Keywords that suggest navigation chrome leaked into the body.
const NAV_INDICATORS: &[&str] = &[
    "menu",
    "navigation",
    "breadcrumb",
    "sidebar",
    "footer",
    "header",
];

/// Score extracted text against a minimum-length requirement.
///
/// Starts at 1.0 and subtracts a fixed penalty per failed check; the result
/// is clamped to `[0, 1]`. Pure function, usable on any candidate text.
pub fn validate_content(text: &str, min_length: usize) -> ContentQuality {
    let mut score = 1.0_f64;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if text.chars().count() < min_length {
        score -= 0.3;
        issues.push(format!("content is shorter than {min_length} characters"));
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < MIN_WORD_COUNT {
        score -= 0.2;
        issues.push(format!("fewer than {MIN_WORD_COUNT} words"));
    }

    if !words.is_empty() {
        let unique: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let ratio = unique.len() as f64 / words.len() as f64;
        if ratio < MIN_VOCABULARY_RATIO {
            score -= 0.2;
            issues.push("vocabulary is highly repetitive".to_string());
            suggestions.push("try extracting with a different content selector".to_string());
        }
    }

    let lower = text.to_lowercase();
    if NAV_INDICATORS.iter().any(|k| lower.contains(k)) {
        score -= 0.1;
        issues.push("navigation keywords present in content".to_string());
    }

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| s.trim().chars().count() > MIN_SENTENCE_LEN)
        .count();
    if sentences < MIN_SENTENCE_COUNT {
        score -= 0.2;
        issues.push(format!("fewer than {MIN_SENTENCE_COUNT} substantial sentences"));
    }

    ContentQuality {
        score: score.max(0.0),
        issues,
        suggestions,
    }
}
