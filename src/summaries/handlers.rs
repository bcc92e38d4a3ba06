use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;
use uuid::Uuid;

use crate::{
    app_state::AppState,
    pipeline::PipelineError,
    repositories::NewArticleSummary,
    summaries::dtos::{ErrorResponse, SummarizeRequest, SummaryListResponse, SummaryResponse},
};

const RECENT_LIMIT: i64 = 20;

pub async fn create_summary(
    State(state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Response {
    if let Err(message) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response();
    }

    let output = match state.pipeline.process_url(&payload.url).await {
        Ok(output) => output,
        Err(e) => {
            warn!("pipeline failed for {}: {e}", payload.url);
            let status = match e {
                PipelineError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
                PipelineError::Fetch(_) => StatusCode::BAD_GATEWAY,
                PipelineError::Extract(_) | PipelineError::Summarize(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                PipelineError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            return (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let record = NewArticleSummary {
        url: &payload.url,
        title: &output.article.title,
        summary: &output.summary.summary,
        key_points: &output.summary.key_points,
        urdu_summary: &output.urdu_summary,
        summary_provider: output.summary_provider,
        translation_provider: output.translation_provider,
        word_count: output.summary.word_count as i32,
        quality_score: output.article.metadata.quality.score,
        checksum: &output.checksum,
    };

    match state.summaries.store(record).await {
        Ok(row) => (StatusCode::CREATED, Json(SummaryResponse::from(row))).into_response(),
        Err(e) => {
            // The pipeline result is still good; serve it without an id.
            warn!("failed to store summary for {}: {e}", payload.url);
            (
                StatusCode::CREATED,
                Json(SummaryResponse::from_output(&output)),
            )
                .into_response()
        }
    }
}

pub async fn get_summary(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.summaries.find_by_id(id).await {
        Ok(Some(row)) => (StatusCode::OK, Json(SummaryResponse::from(row))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Summary not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("failed to load summary {id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load summary".to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn list_summaries(State(state): State<AppState>) -> Response {
    match state.summaries.list_recent(RECENT_LIMIT).await {
        Ok(rows) => {
            let summaries = rows.into_iter().map(SummaryResponse::from).collect();
            (StatusCode::OK, Json(SummaryListResponse { summaries })).into_response()
        }
        Err(e) => {
            warn!("failed to list summaries: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to list summaries".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ArticleSummary;
    use crate::providers::{SummaryChain, TranslationChain};
    use crate::repositories::SummaryRepositoryTrait;
    use crate::pipeline::Pipeline;
    use anyhow::Result;
    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::Request,
        routing::{get, post},
    };
    use sqlx::{Pool, Postgres};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    struct UnreachableRepo;

    #[async_trait]
    impl SummaryRepositoryTrait for UnreachableRepo {
        async fn store(&self, _new: NewArticleSummary<'_>) -> Result<ArticleSummary> {
            anyhow::bail!("database unavailable")
        }
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<ArticleSummary>> {
            Ok(None)
        }
        async fn find_by_checksum(&self, _checksum: &str) -> Result<Option<ArticleSummary>> {
            Ok(None)
        }
        async fn list_recent(&self, _limit: i64) -> Result<Vec<ArticleSummary>> {
            anyhow::bail!("database unavailable")
        }
    }

    fn create_test_app() -> Router {
        let pool =
            Pool::<Postgres>::connect_lazy("postgresql://dummy").expect("Failed to create pool");
        let pipeline = Arc::new(Pipeline::new(
            SummaryChain::new(vec![]),
            TranslationChain::new(vec![]),
            1,
            Duration::from_millis(1),
        ));
        let state = AppState {
            summaries: Arc::new(UnreachableRepo),
            pipeline,
            db_pool: pool,
        };

        Router::new()
            .route("/summaries", post(create_summary).get(list_summaries))
            .route("/summaries/{id}", get(get_summary))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_create_summary_rejects_invalid_url() {
        let app = create_test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/summaries")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"url": ""}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_summary_rejects_non_http_scheme() {
        let app = create_test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/summaries")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"url": "file:///etc/passwd"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_summary_unknown_id_is_404() {
        let app = create_test_app();
        let request = Request::builder()
            .method("GET")
            .uri(format!("/summaries/{}", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_summaries_surfaces_db_failure() {
        let app = create_test_app();
        let request = Request::builder()
            .method("GET")
            .uri("/summaries")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
