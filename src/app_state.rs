use crate::pipeline::Pipeline;
use crate::repositories::{SummaryRepository, SummaryRepositoryTrait};
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub summaries: Arc<dyn SummaryRepositoryTrait>,
    pub pipeline: Arc<Pipeline>,
    pub db_pool: Pool<Postgres>,
}

impl AppState {
    pub fn new(pool: Pool<Postgres>, pipeline: Arc<Pipeline>) -> Self {
        Self {
            summaries: Arc::new(SummaryRepository::new(pool.clone())),
            pipeline,
            db_pool: pool,
        }
    }
}
