use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// --- Tables ---

/// A processed article as stored in `article_summaries`. Key points are kept
/// as a JSONB array of strings.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub key_points: serde_json::Value,
    pub urdu_summary: String,
    pub summary_provider: String,
    pub translation_provider: String,
    pub word_count: i32,
    pub quality_score: f64,
    pub checksum: String,
    pub created_at: DateTime<Utc>,
}
