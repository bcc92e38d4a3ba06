//! Ordered body-extraction strategies. First success wins.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

use crate::extractor::model::clean_text;

/// Minimum cleaned length for a selector candidate to be accepted.
const MIN_SELECTOR_TEXT_LEN: usize = 100;
/// Minimum cleaned length for a paragraph to take part in aggregation.
const MIN_PARAGRAPH_LEN: usize = 20;

/// Priority list of semantic/structural content selectors.
static CONTENT_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        "article",
        ".post-content",
        ".entry-content",
        ".article-content",
        ".post-body",
        "main",
        "[role='main']",
        ".content",
        "#content",
        "#main",
    ]
    .iter()
    .map(|s| Selector::parse(s).expect("static selector"))
    .collect()
});

static BLOCK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div, section, article").expect("static selector"));

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("static selector"));

/// Subtrees stripped before any text is collected.
const NOISE_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "form", "button", "iframe", "noscript",
];

/// Class/id fragments that mark navigation, chrome and discussion regions.
const NOISE_MARKERS: &[&str] = &[
    "sidebar",
    "menu",
    "breadcrumb",
    "share",
    "comment",
    "social",
    "widget",
    "related",
    "advert",
];

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "li", "blockquote", "h1", "h2", "h3", "h4", "h5", "h6",
    "br", "tr", "ul", "ol",
];

pub fn extract_body(document: &Html) -> Option<String> {
    if let Some(text) = selector_strategy(document) {
        return Some(text);
    }
    if let Some(text) = largest_block_strategy(document) {
        return Some(text);
    }
    paragraph_strategy(document)
}

/// Strategy 1: fixed priority list of content selectors. The first candidate
/// whose cleaned text exceeds the minimum length is accepted.
fn selector_strategy(document: &Html) -> Option<String> {
    for selector in CONTENT_SELECTORS.iter() {
        for element in document.select(selector) {
            let text = clean_text(&collect_text(element));
            if text.chars().count() > MIN_SELECTOR_TEXT_LEN {
                return Some(text);
            }
        }
    }
    None
}

/// Strategy 2: scan all block-level containers outside navigation/side
/// regions and keep the top 3 by character length, preferring the longest.
fn largest_block_strategy(document: &Html) -> Option<String> {
    let mut blocks: Vec<(String, usize)> = document
        .select(&BLOCK_SELECTOR)
        .filter(|el| !inside_noise(*el))
        .map(|el| {
            let text = clean_text(&collect_text(el));
            let len = text.chars().count();
            (text, len)
        })
        .filter(|(_, len)| *len > 0)
        .collect();

    blocks.sort_by(|a, b| b.1.cmp(&a.1));
    blocks.truncate(3);
    blocks.into_iter().next().map(|(text, _)| text)
}

/// Strategy 3: concatenate every paragraph with enough text, joined with
/// blank lines. Total fallback for any page with at least one real `<p>`.
fn paragraph_strategy(document: &Html) -> Option<String> {
    let paragraphs: Vec<String> = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|el| clean_text(&collect_text(el)))
        .filter(|text| text.chars().count() > MIN_PARAGRAPH_LEN)
        .collect();

    if paragraphs.is_empty() {
        return None;
    }
    Some(paragraphs.join("\n\n"))
}

/// Collect descendant text, skipping noise subtrees entirely.
fn collect_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    push_text(element, &mut out);
    out
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    if is_noise(child_el) {
                        continue;
                    }
                    push_text(child_el, out);
                    if BLOCK_TAGS.contains(&child_el.value().name()) {
                        out.push('\n');
                    } else {
                        out.push(' ');
                    }
                }
            }
            _ => {}
        }
    }
}

fn is_noise(element: ElementRef<'_>) -> bool {
    let name = element.value().name();
    if NOISE_TAGS.contains(&name) {
        return true;
    }

    let mut markers = String::new();
    if let Some(class) = element.value().attr("class") {
        markers.push_str(&class.to_lowercase());
        markers.push(' ');
    }
    if let Some(id) = element.value().attr("id") {
        markers.push_str(&id.to_lowercase());
    }
    !markers.is_empty() && NOISE_MARKERS.iter().any(|m| markers.contains(m))
}

fn inside_noise(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(is_noise)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(html: &str) -> Option<String> {
        extract_body(&Html::parse_document(html))
    }

    #[test]
    fn test_selector_strategy_prefers_article() {
        let html = format!(
            "<html><body><nav>Home About Contact</nav><article><p>{}</p></article>\
             <div>{}</div></body></html>",
            "Article body text that is long enough to qualify. ".repeat(5),
            "Unrelated div text that is even longer but should lose. ".repeat(10),
        );
        let body = body_of(&html).unwrap();
        assert!(body.contains("Article body text"));
        assert!(!body.contains("Unrelated div"));
        assert!(!body.contains("Home About"));
    }

    #[test]
    fn test_noise_subtrees_are_stripped() {
        let html = format!(
            "<article><script>var x = 1;</script><div class='social-share'>Share this</div>\
             <p>{}</p><aside>Subscribe now</aside></article>",
            "Real content sentence for the reader. ".repeat(5)
        );
        let body = body_of(&html).unwrap();
        assert!(body.contains("Real content sentence"));
        assert!(!body.contains("var x"));
        assert!(!body.contains("Share this"));
        assert!(!body.contains("Subscribe now"));
    }

    #[test]
    fn test_largest_block_when_no_selector_matches() {
        let html = format!(
            "<html><body><div>{}</div><div>short</div></body></html>",
            "A plain page built only from divs with plenty of text. "
                .repeat(3)
                // keep it under the selector threshold check by avoiding
                // content classes; generic divs only match strategy 2
        );
        // ".content"-style selectors don't match, so the largest div wins
        let body = body_of(&html).unwrap();
        assert!(body.contains("plain page built"));
    }

    #[test]
    fn test_paragraph_aggregation_last_resort() {
        let html = "<html><body><span><p>This paragraph has more than twenty characters.</p>\
             <p>tiny</p><p>Another qualifying paragraph with enough length.</p></span></body></html>";
        let body = body_of(html).unwrap();
        assert!(body.contains("more than twenty characters"));
        assert!(body.contains("Another qualifying paragraph"));
        assert!(!body.contains("tiny"));
    }

    #[test]
    fn test_empty_document_yields_none() {
        assert!(body_of("<html><body></body></html>").is_none());
        assert!(body_of("").is_none());
    }

    #[test]
    fn test_blocks_inside_nav_are_excluded() {
        let html = format!(
            "<html><body><nav><div>{}</div></nav><div>{}</div></body></html>",
            "Navigation filler text repeated to be long. ".repeat(10),
            "Body text that should win despite being shorter. ".repeat(3),
        );
        let body = body_of(&html).unwrap();
        assert!(body.contains("should win"));
        assert!(!body.contains("Navigation filler"));
    }
}
