use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// A cleaned article body plus whatever metadata could be recovered.
/// Immutable after creation; a low quality score makes the pipeline refetch
/// the page before accepting one of these as best effort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub url: Url,
    pub title: String,
    pub body: String,
    pub metadata: ArticleMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub description: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<String>,
    pub language: Option<String>,
    pub word_count: usize,
    pub quality: ContentQuality,
}

/// Quality assessment attached to every extracted article.
/// `score` is always clamped to `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentQuality {
    pub score: f64,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static NEWLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n+").unwrap());

/// Uniform text cleaning applied to every strategy's output: tabs become
/// spaces, characters outside the printable ASCII range (plus newline) are
/// dropped, space runs collapse to one space and blank-line runs to one
/// blank line.
pub fn clean_text(text: &str) -> String {
    let printable: String = text
        .chars()
        .map(|c| if c == '\t' { ' ' } else { c })
        .filter(|c| (' '..='~').contains(c) || *c == '\n')
        .collect();

    let spaced = SPACE_RE.replace_all(&printable, " ");
    let collapsed = NEWLINE_RE.replace_all(&spaced, "\n\n");
    collapsed.trim().to_string()
}
