use url::Url;

use crate::extractor::{ExtractError, extract};

fn source_url() -> Url {
    Url::parse("https://blog.example.com/post").unwrap()
}

const BLOG_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>How AI Changes Healthcare - Tech Blog</title>
    <meta name="description" content="A look at diagnosis speed.">
    <meta name="author" content="A. Researcher">
    <meta property="article:published_time" content="2024-06-12T08:00:00Z">
</head>
<body>
    <header><nav><ul><li>Home</li><li>About</li><li>Archive</li></ul></nav></header>
    <article>
        <h1 class="entry-title">How AI Changes Healthcare</h1>
        <p>Artificial intelligence is transforming healthcare around the world.
        Hospitals report significant improvements in diagnosis speed, and researchers
        say the key benefit is earlier treatment for patients everywhere.</p>
        <p>The evidence so far suggests that careful deployment matters more than raw
        model quality. Important safeguards include clinical review and clear audit
        trails for every automated decision made by these systems.</p>
        <script>analytics.track("view");</script>
    </article>
    <aside class="sidebar">Subscribe to our newsletter for more posts.</aside>
    <footer>Copyright 2024</footer>
</body>
</html>"#;

#[test]
fn test_extract_blog_article() {
    let article = extract(BLOG_PAGE, &source_url()).unwrap();

    assert_eq!(article.title, "How AI Changes Healthcare");
    assert!(article.body.contains("transforming healthcare"));
    assert!(article.body.contains("clinical review"));
    assert!(!article.body.contains("Subscribe to our newsletter"));
    assert!(!article.body.contains("analytics.track"));
    assert!(!article.body.contains("Archive"));

    assert_eq!(
        article.metadata.description.as_deref(),
        Some("A look at diagnosis speed.")
    );
    assert_eq!(article.metadata.author.as_deref(), Some("A. Researcher"));
    assert_eq!(
        article.metadata.publish_date.as_deref(),
        Some("2024-06-12T08:00:00Z")
    );
    assert!(article.metadata.word_count > 40);
}

#[test]
fn test_extract_page_without_semantic_markup() {
    let html = format!(
        "<html><head><title>Plain Page</title></head><body><div>{}</div></body></html>",
        "Plain blog platforms sometimes emit nothing but generic divs with prose inside them. "
            .repeat(4)
    );
    let article = extract(&html, &source_url()).unwrap();
    assert_eq!(article.title, "Plain Page");
    assert!(article.body.contains("generic divs"));
}

#[test]
fn test_any_page_with_a_real_paragraph_extracts() {
    // Paragraph aggregation is a total fallback: one <p> over 20 chars is enough.
    let html = "<html><body><table><p>This single paragraph easily clears twenty characters.</p></table></body></html>";
    let article = extract(html, &source_url()).unwrap();
    assert!(article.body.contains("single paragraph"));
}

#[test]
fn test_insufficient_content_fails() {
    let html = "<html><body><p>tiny</p></body></html>";
    let err = extract(html, &source_url()).unwrap_err();
    assert!(matches!(err, ExtractError::InsufficientContent));
}

#[test]
fn test_malformed_html_is_tolerated() {
    let html = format!(
        "<html><head><title>Broken</title><body><div><p>{}<span>Unclosed tags everywhere",
        "Content that survives a badly nested document structure. ".repeat(3)
    );
    let article = extract(&html, &source_url()).unwrap();
    assert!(article.body.contains("badly nested"));
}

#[test]
fn test_low_quality_page_still_extracts_with_low_score() {
    let html = format!(
        "<html><body><article>{}</article></body></html>",
        "menu menu menu menu menu menu menu menu menu menu menu menu menu menu menu \
         menu menu menu menu menu menu menu"
    );
    let article = extract(&html, &source_url()).unwrap();
    assert!(article.metadata.quality.score < 0.3);
    assert!(!article.metadata.quality.issues.is_empty());
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract(&html, &source_url());
        }

        #[test]
        fn test_extracted_body_is_cleaned(html in "<p>[a-zA-Z ]{30,80}</p>") {
            if let Ok(article) = extract(&html, &source_url()) {
                prop_assert!(!article.body.contains('\t'));
                prop_assert!(article.body.trim().len() == article.body.len());
            }
        }
    }
}
