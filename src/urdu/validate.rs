//! Validation of a translation candidate against its English source.

use serde::{Deserialize, Serialize};

use crate::urdu::metrics::{UrduQualityMetrics, quality_metrics};

const MIN_LENGTH_RATIO: f64 = 0.3;
const MAX_LENGTH_RATIO: f64 = 3.0;
const MIN_VALID_SCORE: f64 = 0.5;

const HIGH_SCRIPT_PERCENTAGE: f64 = 80.0;
const GOOD_AVG_SENTENCE_WORDS: f64 = 20.0;

/// Read-only snapshot of a candidate's fitness. Never persisted; always
/// recomputed from the current candidate string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub metrics: UrduQualityMetrics,
    pub issues: Vec<String>,
    pub is_valid: bool,
    pub confidence: f64,
}

/// Validate a candidate Urdu translation of `source`.
///
/// A candidate with no Urdu script at all can never be valid, whatever its
/// other metrics look like; callers must discard it and fall back to the
/// dictionary translator rather than surface it.
pub fn validate_translation(source: &str, candidate: &str) -> ValidationResult {
    let metrics = quality_metrics(candidate);
    let mut issues = Vec::new();

    if !metrics.has_urdu_script {
        issues.push("candidate contains no Urdu script".to_string());
    } else if metrics.script_percentage < 50.0 {
        issues.push(format!(
            "only {:.0}% of characters are Urdu script",
            metrics.script_percentage
        ));
    }
    if metrics.word_count < 3 {
        issues.push("candidate is too short to be a meaningful translation".to_string());
    }
    if metrics.sentence_count == 0 {
        issues.push("no complete sentences detected".to_string());
    }

    let source_words = source.split_whitespace().count();
    if source_words > 0 {
        let ratio = metrics.word_count as f64 / source_words as f64;
        if ratio < MIN_LENGTH_RATIO {
            issues.push("translation is much shorter than the source text".to_string());
        } else if ratio > MAX_LENGTH_RATIO {
            issues.push("translation is much longer than the source text".to_string());
        }
    }

    let mut confidence = metrics.quality_score;
    if metrics.script_percentage > HIGH_SCRIPT_PERCENTAGE {
        confidence += 0.1;
    }
    if metrics.sentence_count > 0 && metrics.avg_words_per_sentence < GOOD_AVG_SENTENCE_WORDS {
        confidence += 0.1;
    }
    if metrics.diacritic_count > 0 {
        confidence += 0.05;
    }
    let confidence = confidence.min(1.0);

    let is_valid = metrics.quality_score >= MIN_VALID_SCORE && metrics.has_urdu_script;

    ValidationResult {
        metrics,
        issues,
        is_valid,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "Artificial intelligence is transforming healthcare. \
                          Researchers say the key benefit is faster diagnosis.";

    #[test]
    fn test_good_translation_is_valid() {
        let candidate =
            "مصنوعی ذہانت صحت کے شعبے کو بدل رہی ہے۔ ماہرین کے مطابق اہم فائدہ تیز تشخیص ہے۔";
        let result = validate_translation(SOURCE, candidate);
        assert!(result.is_valid);
        assert!(result.confidence > 0.9);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_english_candidate_is_never_valid() {
        let result = validate_translation(SOURCE, "This is still English, not a translation.");
        assert!(!result.is_valid);
        assert!(
            result
                .issues
                .iter()
                .any(|i| i.contains("no Urdu script"))
        );
    }

    #[test]
    fn test_unrelated_script_is_never_valid() {
        let result = validate_translation(SOURCE, "これは日本語のテキストです。まったく関係ない。");
        assert!(!result.is_valid);
    }

    #[test]
    fn test_truncated_translation_flagged() {
        let result = validate_translation(SOURCE, "صرف تین الفاظ۔");
        assert!(
            result
                .issues
                .iter()
                .any(|i| i.contains("much shorter"))
        );
    }

    #[test]
    fn test_confidence_is_clamped() {
        let candidate = "زَبَر والا مکمل اردو جملہ یہاں ہے۔ دوسرا جملہ بھی موجود ہے۔";
        let result = validate_translation("short source text here", candidate);
        assert!(result.confidence <= 1.0);
    }

    #[test]
    fn test_confidence_bonuses_reward_fluent_text() {
        let fluent = "یہ ایک مختصر اور صاف جملہ ہے۔ یہاں دوسرا جملہ ہے۔";
        let sparse = "اردو else mostly English filler words here and there";
        let fluent_conf = validate_translation(SOURCE, fluent).confidence;
        let sparse_conf = validate_translation(SOURCE, sparse).confidence;
        assert!(fluent_conf > sparse_conf);
    }
}
