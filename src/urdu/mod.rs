//! Urdu text quality engine: script detection, quality scoring, validation
//! of translation candidates, normalization/repair, and a deterministic
//! dictionary-based fallback translator.

pub mod dictionary;
pub mod fallback;
pub mod metrics;
pub mod normalize;
pub mod script;
pub mod validate;

pub use fallback::translate_fallback;
pub use metrics::{UrduQualityMetrics, quality_metrics};
pub use normalize::{normalize, post_process};
pub use script::{contains_urdu_script, script_percentage};
pub use validate::{ValidationResult, validate_translation};
