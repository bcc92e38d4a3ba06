pub mod summary;

pub use summary::{NewArticleSummary, SummaryRepository, SummaryRepositoryTrait};
