use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use sqlx::postgres::PgPoolOptions;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use khulasa::{
    app_state::AppState,
    config::Config,
    health,
    pipeline::Pipeline,
    providers::{
        RemoteAiProvider, SummaryChain, SummaryProvider, TranslationChain, TranslationProvider,
    },
    summaries::handlers,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(config.database_url())?;
    // The pipeline works without the database; persistence degrades to
    // warnings when migrations or connections fail.
    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        warn!("could not run migrations, persistence may be unavailable: {e}");
    }

    let mut summary_providers: Vec<Box<dyn SummaryProvider>> = Vec::new();
    let mut translation_providers: Vec<Box<dyn TranslationProvider>> = Vec::new();
    if let Some(base_url) = config.ai_api_url() {
        info!("hosted AI service configured at {base_url}");
        summary_providers.push(Box::new(RemoteAiProvider::new(
            base_url.to_string(),
            config.ai_api_key().map(str::to_string),
        )?));
        translation_providers.push(Box::new(RemoteAiProvider::new(
            base_url.to_string(),
            config.ai_api_key().map(str::to_string),
        )?));
    } else {
        info!("no hosted AI service configured, using local heuristics only");
    }

    let pipeline = Arc::new(Pipeline::new(
        SummaryChain::new(summary_providers),
        TranslationChain::new(translation_providers),
        config.fetch_max_retries(),
        Duration::from_millis(config.fetch_retry_base_ms()),
    ));

    let state = AppState::new(pool, pipeline);

    let app = Router::new()
        .route(
            "/summaries",
            post(handlers::create_summary).get(handlers::list_summaries),
        )
        .route("/summaries/{id}", get(handlers::get_summary))
        .route("/healthz", get(health::health_check))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("listening on {}", config.bind_addr());
    axum::serve(listener, app).await?;

    Ok(())
}
