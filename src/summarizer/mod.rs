pub mod extractive;
pub mod keypoints;
pub mod lexicon;

pub use extractive::summarize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard cap on the key-point list, regardless of how many candidates exist.
pub const MAX_KEY_POINTS: usize = 5;

/// Summary output shared by the extractive path and the hosted path; callers
/// cannot tell which one produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub key_points: Vec<String>,
    pub word_count: usize,
    pub original_length: usize,
}

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("input text is empty")]
    EmptyInput,
}
