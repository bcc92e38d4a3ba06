pub mod metadata;
pub mod model;
pub mod quality;
pub mod strategies;

#[cfg(test)]
mod tests;

pub use model::{ArticleMetadata, ContentQuality, ExtractedArticle};
pub use quality::{MIN_CONTENT_LENGTH, validate_content};

use scraper::Html;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("insufficient content")]
    InsufficientContent,
}

/// Extract the readable article body from raw HTML.
///
/// Strategies are tried in order (semantic selectors, largest text block,
/// paragraph aggregation); the first one that produces qualifying text wins.
/// Metadata extraction is best-effort and never fails the extraction.
pub fn extract(html: &str, source_url: &Url) -> Result<ExtractedArticle, ExtractError> {
    let document = Html::parse_document(html);

    let body = strategies::extract_body(&document).ok_or(ExtractError::InsufficientContent)?;
    let title = metadata::extract_title(&document);
    let quality = validate_content(&body, MIN_CONTENT_LENGTH);
    let metadata = metadata::extract_metadata(&document, &body, quality);

    Ok(ExtractedArticle {
        url: source_url.clone(),
        title,
        body,
        metadata,
    })
}
