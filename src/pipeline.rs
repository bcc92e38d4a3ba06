//! End-to-end processing pipeline: fetch a blog URL, extract the article,
//! summarize it, and translate the summary into Urdu.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, instrument, warn};
use url::Url;

use crate::extractor::{self, ExtractError, ExtractedArticle};
use crate::fetcher::{FetchError, fetch_with_retry};
use crate::providers::{SummaryChain, TranslationChain};
use crate::summarizer::{SummarizeError, SummaryResult};
use crate::urdu::ValidationResult;

/// Extraction scores below this retrigger the fetch; the page may have been
/// served partially or from an interstitial.
const LOW_QUALITY_THRESHOLD: f64 = 0.3;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),
    #[error("summarization failed: {0}")]
    Summarize(#[from] SummarizeError),
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Everything produced for one URL. Persisting and serving this is the
/// caller's concern.
pub struct PipelineOutput {
    pub article: ExtractedArticle,
    pub summary: SummaryResult,
    pub summary_provider: &'static str,
    pub urdu_summary: String,
    pub translation_provider: &'static str,
    pub validation: ValidationResult,
    pub checksum: String,
    pub fetched_at: DateTime<Utc>,
}

pub struct Pipeline {
    summary_chain: SummaryChain,
    translation_chain: TranslationChain,
    max_fetch_attempts: u32,
    retry_base_delay: Duration,
}

impl Pipeline {
    pub fn new(
        summary_chain: SummaryChain,
        translation_chain: TranslationChain,
        max_fetch_attempts: u32,
        retry_base_delay: Duration,
    ) -> Self {
        Self {
            summary_chain,
            translation_chain,
            max_fetch_attempts: max_fetch_attempts.max(1),
            retry_base_delay,
        }
    }

    /// Process a single blog URL through fetch, extraction, summarization
    /// and translation.
    #[instrument(skip(self))]
    pub async fn process_url(&self, url: &str) -> Result<PipelineOutput, PipelineError> {
        let parsed = Url::parse(url)?;

        let (page, article) = self.fetch_and_extract(url, &parsed).await?;
        let checksum = format!("{:x}", md5::compute(page.body_raw.as_ref()));
        let fetched_at = page.fetched_at;

        let (summary, summary_provider) = self.summary_chain.summarize(&article.body).await?;
        let outcome = self.translation_chain.translate(&summary.summary).await;

        info!(
            "processed {} (quality {:.2}, summary via '{}', translation via '{}')",
            url, article.metadata.quality.score, summary_provider, outcome.provider
        );

        Ok(PipelineOutput {
            article,
            summary,
            summary_provider,
            urdu_summary: outcome.text,
            translation_provider: outcome.provider,
            validation: outcome.validation,
            checksum,
            fetched_at,
        })
    }

    /// Fetch and extract with linear backoff. Transport retries live in
    /// [`fetch_with_retry`]; this loop retriggers the whole fetch when the
    /// extraction scores too low, and once its attempts are exhausted the
    /// low-quality article is accepted as best effort.
    async fn fetch_and_extract(
        &self,
        url: &str,
        parsed: &Url,
    ) -> Result<(crate::fetcher::PageResponse, ExtractedArticle), PipelineError> {
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            let page =
                fetch_with_retry(url, self.max_fetch_attempts, self.retry_base_delay).await?;

            let article = extractor::extract(&page.body_utf8, parsed)?;
            let score = article.metadata.quality.score;
            if score >= LOW_QUALITY_THRESHOLD {
                return Ok((page, article));
            }
            if attempt >= self.max_fetch_attempts {
                warn!(
                    "extraction quality {score:.2} for {url} still low after {attempt} attempts, \
                     accepting best effort"
                );
                return Ok((page, article));
            }

            let delay = self.retry_base_delay.saturating_mul(attempt);
            warn!(
                "extraction quality {score:.2} for {url} below {LOW_QUALITY_THRESHOLD}, \
                 refetching in {delay:?}"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Process several URLs concurrently. Each URL gets its own task and its
    /// own result; one failure never aborts the batch.
    pub async fn process_batch(
        self: &Arc<Self>,
        urls: Vec<String>,
    ) -> Vec<(String, Result<PipelineOutput, PipelineError>)> {
        let mut handles = Vec::with_capacity(urls.len());
        for url in urls {
            let pipeline = Arc::clone(self);
            handles.push((
                url.clone(),
                tokio::spawn(async move { pipeline.process_url(&url).await }),
            ));
        }

        let mut results = Vec::with_capacity(handles.len());
        for (url, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(PipelineError::Task(e)),
            };
            results.push((url, result));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{SummaryChain, TranslationChain};

    fn bare_pipeline() -> Pipeline {
        Pipeline::new(
            SummaryChain::new(vec![]),
            TranslationChain::new(vec![]),
            1,
            Duration::from_millis(1),
        )
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_fetching() {
        let pipeline = bare_pipeline();
        let result = pipeline.process_url("not a url at all").await;
        assert!(matches!(result, Err(PipelineError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_batch_reports_per_url_results() {
        let pipeline = Arc::new(bare_pipeline());
        let results = pipeline
            .process_batch(vec!["::bad::".to_string(), "also bad".to_string()])
            .await;
        assert_eq!(results.len(), 2);
        for (_, result) in results {
            assert!(matches!(result, Err(PipelineError::InvalidUrl(_))));
        }
    }
}
