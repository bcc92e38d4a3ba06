//! Best-effort title and metadata extraction. Never blocks extraction.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::extractor::model::{ArticleMetadata, ContentQuality, clean_text};

const DEFAULT_TITLE: &str = "Untitled Article";
const MAX_TITLE_LEN: usize = 200;

const MIN_DETECT_LENGTH: usize = 50;
const MIN_DETECT_CONFIDENCE: f64 = 0.25;

static TITLE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        "h1.post-title",
        "h1.entry-title",
        ".post-title",
        ".entry-title",
        ".article-title",
        "h1",
        "title",
    ]
    .iter()
    .map(|s| Selector::parse(s).expect("static selector"))
    .collect()
});

pub fn extract_title(document: &Html) -> String {
    for selector in TITLE_SELECTORS.iter() {
        for element in document.select(selector) {
            let text = clean_text(&element.text().collect::<String>());
            if !text.is_empty() && text.chars().count() < MAX_TITLE_LEN {
                return text;
            }
        }
    }
    DEFAULT_TITLE.to_string()
}

pub fn extract_metadata(document: &Html, body: &str, quality: ContentQuality) -> ArticleMetadata {
    ArticleMetadata {
        description: meta_content(
            document,
            &["meta[name='description']", "meta[property='og:description']"],
        ),
        author: extract_author(document),
        publish_date: extract_publish_date(document),
        language: detect_language(body),
        word_count: body.split_whitespace().count(),
        quality,
    }
}

fn extract_author(document: &Html) -> Option<String> {
    meta_content(
        document,
        &["meta[name='author']", "meta[property='article:author']"],
    )
    .or_else(|| element_text(document, &[".author", ".byline", "[rel='author']"]))
}

fn extract_publish_date(document: &Html) -> Option<String> {
    meta_content(
        document,
        &["meta[property='article:published_time']", "meta[name='date']"],
    )
    .or_else(|| attr_value(document, "time[datetime]", "datetime"))
    .or_else(|| element_text(document, &[".post-date", ".published"]))
}

/// First non-empty `content` attribute among the given meta selectors.
/// Missing values stay `None`, never empty-string placeholders.
fn meta_content(document: &Html, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        for element in document.select(&selector) {
            if let Some(content) = element.value().attr("content") {
                let content = content.trim();
                if !content.is_empty() {
                    return Some(content.to_string());
                }
            }
        }
    }
    None
}

fn element_text(document: &Html, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        for element in document.select(&selector) {
            let text = clean_text(&element.text().collect::<String>());
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

fn attr_value(document: &Html, selector_str: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector_str).ok()?;
    document
        .select(&selector)
        .find_map(|el| el.value().attr(attr))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn detect_language(text: &str) -> Option<String> {
    if text.trim().len() < MIN_DETECT_LENGTH {
        return None;
    }
    whatlang::detect(text)
        .filter(|info| info.confidence() >= MIN_DETECT_CONFIDENCE)
        .map(|info| info.lang().code().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_prefers_semantic_heading() {
        let html = Html::parse_document(
            "<html><head><title>Site | Post</title></head>\
             <body><h1 class='entry-title'>The Real Title</h1></body></html>",
        );
        assert_eq!(extract_title(&html), "The Real Title");
    }

    #[test]
    fn test_title_falls_back_to_document_title() {
        let html =
            Html::parse_document("<html><head><title>Fallback Title</title></head><body></body></html>");
        assert_eq!(extract_title(&html), "Fallback Title");
    }

    #[test]
    fn test_oversized_title_is_skipped() {
        let long = "x".repeat(300);
        let html = Html::parse_document(&format!(
            "<html><body><h1>{long}</h1><p>body</p></body></html>"
        ));
        assert_eq!(extract_title(&html), DEFAULT_TITLE);
    }

    #[test]
    fn test_meta_description_and_author() {
        let html = Html::parse_document(
            "<html><head><meta name='description' content='A short description'>\
             <meta name='author' content='Jane Writer'></head><body></body></html>",
        );
        let meta = extract_metadata(&html, "some body text", placeholder_quality());
        assert_eq!(meta.description.as_deref(), Some("A short description"));
        assert_eq!(meta.author.as_deref(), Some("Jane Writer"));
        assert_eq!(meta.publish_date, None);
    }

    #[test]
    fn test_publish_date_from_time_element() {
        let html = Html::parse_document(
            "<html><body><time datetime='2024-03-01T10:00:00Z'>March 1</time></body></html>",
        );
        let meta = extract_metadata(&html, "", placeholder_quality());
        assert_eq!(meta.publish_date.as_deref(), Some("2024-03-01T10:00:00Z"));
    }

    #[test]
    fn test_empty_meta_is_none_not_empty_string() {
        let html = Html::parse_document(
            "<html><head><meta name='author' content='  '></head><body></body></html>",
        );
        let meta = extract_metadata(&html, "", placeholder_quality());
        assert_eq!(meta.author, None);
    }

    #[test]
    fn test_language_detection_on_english_body() {
        let body = "This is a long enough passage of English prose for the language \
                    detector to classify with reasonable confidence.";
        let html = Html::parse_document("<html><body></body></html>");
        let meta = extract_metadata(&html, body, placeholder_quality());
        assert_eq!(meta.language.as_deref(), Some("eng"));
    }

    fn placeholder_quality() -> ContentQuality {
        ContentQuality {
            score: 1.0,
            issues: vec![],
            suggestions: vec![],
        }
    }
}
