//! Hosted AI provider speaking a small JSON API with `/summarize` and
//! `/translate` endpoints. Configured from `AI_API_URL` / `AI_API_KEY`;
//! absent configuration simply means the provider is never registered.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::providers::{SummaryProvider, TranslationProvider};
use crate::summarizer::{MAX_KEY_POINTS, SummaryResult, extractive};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct SummarizeRequestBody<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponseBody {
    summary: String,
    #[serde(rename = "keyPoints", default)]
    key_points: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TranslateRequestBody<'a> {
    text: &'a str,
    #[serde(rename = "targetLanguage")]
    target_language: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponseBody {
    translation: String,
}

pub struct RemoteAiProvider {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RemoteAiProvider {
    pub fn new(base_url: String, api_key: Option<String>) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn post_json<B: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<R> {
        let mut request = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl SummaryProvider for RemoteAiProvider {
    fn name(&self) -> &'static str {
        "remote-ai"
    }

    #[instrument(skip(self, text))]
    async fn summarize(&self, text: &str) -> anyhow::Result<SummaryResult> {
        let body: SummarizeResponseBody = self
            .post_json("/summarize", &SummarizeRequestBody { text })
            .await?;

        if body.summary.trim().is_empty() {
            anyhow::bail!("hosted summarizer returned an empty summary");
        }

        let mut key_points = body.key_points;
        key_points.truncate(MAX_KEY_POINTS);

        // Input statistics match the extractive path: `word_count` counts
        // the cleaned source words, `original_length` its characters.
        Ok(SummaryResult {
            word_count: extractive::preprocess(text).split_whitespace().count(),
            original_length: text.chars().count(),
            summary: body.summary,
            key_points,
        })
    }
}

#[async_trait]
impl TranslationProvider for RemoteAiProvider {
    fn name(&self) -> &'static str {
        "remote-ai"
    }

    #[instrument(skip(self, text))]
    async fn translate(&self, text: &str) -> anyhow::Result<String> {
        let body: TranslateResponseBody = self
            .post_json(
                "/translate",
                &TranslateRequestBody {
                    text,
                    target_language: "ur",
                },
            )
            .await?;

        if body.translation.trim().is_empty() {
            anyhow::bail!("hosted translator returned an empty translation");
        }
        Ok(body.translation)
    }
}
