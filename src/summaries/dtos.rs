use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::ArticleSummary;
use crate::pipeline::PipelineOutput;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
}

impl SummarizeRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("URL cannot be empty".to_string());
        }
        if self.url.len() > 2048 {
            return Err("URL too long".to_string());
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err("URL must use http or https".to_string());
        }
        Ok(())
    }
}

/// A processed article as served to clients. `id` and `created_at` are absent
/// when the pipeline succeeded but persistence did not.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub id: Option<Uuid>,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub urdu_summary: String,
    pub summary_provider: String,
    pub translation_provider: String,
    pub word_count: i32,
    pub quality_score: f64,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ArticleSummary> for SummaryResponse {
    fn from(row: ArticleSummary) -> Self {
        let key_points = serde_json::from_value(row.key_points).unwrap_or_default();
        Self {
            id: Some(row.id),
            url: row.url,
            title: row.title,
            summary: row.summary,
            key_points,
            urdu_summary: row.urdu_summary,
            summary_provider: row.summary_provider,
            translation_provider: row.translation_provider,
            word_count: row.word_count,
            quality_score: row.quality_score,
            created_at: Some(row.created_at),
        }
    }
}

impl SummaryResponse {
    /// Build a response straight from pipeline output, for when the row could
    /// not be stored.
    pub fn from_output(output: &PipelineOutput) -> Self {
        Self {
            id: None,
            url: output.article.url.to_string(),
            title: output.article.title.clone(),
            summary: output.summary.summary.clone(),
            key_points: output.summary.key_points.clone(),
            urdu_summary: output.urdu_summary.clone(),
            summary_provider: output.summary_provider.to_string(),
            translation_provider: output.translation_provider.to_string(),
            word_count: output.summary.word_count as i32,
            quality_score: output.article.metadata.quality.score,
            created_at: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryListResponse {
    pub summaries: Vec<SummaryResponse>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
