pub mod app_state;
pub mod config;
pub mod entities;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod pipeline;
pub mod providers;
pub mod repositories;
pub mod summaries;
pub mod summarizer;
pub mod urdu;
