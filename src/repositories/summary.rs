use crate::entities::ArticleSummary;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Fields for a row about to be inserted. The id and timestamp come from the
/// database.
#[derive(Debug)]
pub struct NewArticleSummary<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub summary: &'a str,
    pub key_points: &'a [String],
    pub urdu_summary: &'a str,
    pub summary_provider: &'a str,
    pub translation_provider: &'a str,
    pub word_count: i32,
    pub quality_score: f64,
    pub checksum: &'a str,
}

#[async_trait]
pub trait SummaryRepositoryTrait: Send + Sync {
    async fn store(&self, new: NewArticleSummary<'_>) -> Result<ArticleSummary>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ArticleSummary>>;
    async fn find_by_checksum(&self, checksum: &str) -> Result<Option<ArticleSummary>>;
    async fn list_recent(&self, limit: i64) -> Result<Vec<ArticleSummary>>;
}

const COLUMNS: &str = "id, url, title, summary, key_points, urdu_summary, \
                       summary_provider, translation_provider, word_count, \
                       quality_score, checksum, created_at";

#[derive(Clone)]
pub struct SummaryRepository {
    pool: Pool<Postgres>,
}

impl SummaryRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SummaryRepositoryTrait for SummaryRepository {
    /// Insert a processed article. Checksum-based deduplication: when a row
    /// with the same checksum already exists the content has not changed and
    /// the existing row is returned untouched.
    async fn store(&self, new: NewArticleSummary<'_>) -> Result<ArticleSummary> {
        if let Some(existing) = self.find_by_checksum(new.checksum).await? {
            return Ok(existing);
        }

        let sql = format!(
            r#"
            INSERT INTO article_summaries
                (url, title, summary, key_points, urdu_summary,
                 summary_provider, translation_provider, word_count,
                 quality_score, checksum)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ArticleSummary>(&sql)
            .bind(new.url)
            .bind(new.title)
            .bind(new.summary)
            .bind(serde_json::json!(new.key_points))
            .bind(new.urdu_summary)
            .bind(new.summary_provider)
            .bind(new.translation_provider)
            .bind(new.word_count)
            .bind(new.quality_score)
            .bind(new.checksum)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ArticleSummary>> {
        let sql = format!("SELECT {COLUMNS} FROM article_summaries WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleSummary>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn find_by_checksum(&self, checksum: &str) -> Result<Option<ArticleSummary>> {
        let sql = format!("SELECT {COLUMNS} FROM article_summaries WHERE checksum = $1");
        let row = sqlx::query_as::<_, ArticleSummary>(&sql)
            .bind(checksum)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ArticleSummary>> {
        let sql =
            format!("SELECT {COLUMNS} FROM article_summaries ORDER BY created_at DESC LIMIT $1");
        let rows = sqlx::query_as::<_, ArticleSummary>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
