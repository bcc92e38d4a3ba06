//! Quality metrics for a translation candidate. Pure functions of the
//! candidate string; computed on demand, never persisted.

use serde::{Deserialize, Serialize};

use crate::urdu::script::{contains_urdu_script, diacritic_count, is_urdu_char, script_percentage};

const MIN_SCRIPT_PERCENTAGE: f64 = 50.0;
const MIN_WORD_COUNT: usize = 3;
const MAX_WORD_COUNT: usize = 1000;
const MAX_AVG_SENTENCE_WORDS: f64 = 25.0;
const MAX_LATIN_WORD_RATIO: f64 = 0.3;
const MIN_SENTENCE_FRAGMENT_CHARS: usize = 5;

/// Sentence terminators recognized in mixed Urdu/Latin text.
pub(crate) const SENTENCE_TERMINATORS: [char; 5] = ['۔', '؟', '!', '.', '?'];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrduQualityMetrics {
    pub has_urdu_script: bool,
    pub script_percentage: f64,
    pub diacritic_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_words_per_sentence: f64,
    pub quality_score: f64,
}

/// Compute metrics and the composite quality score for a candidate string.
/// The score starts at 1.0, takes fixed deductions, and is clamped to `[0, 1]`.
pub fn quality_metrics(text: &str) -> UrduQualityMetrics {
    let has_urdu_script = contains_urdu_script(text);
    let script_percentage = script_percentage(text);
    let diacritic_count = diacritic_count(text);

    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    let sentence_count = text
        .split(SENTENCE_TERMINATORS)
        .filter(|s| s.trim().chars().count() > MIN_SENTENCE_FRAGMENT_CHARS)
        .count();

    let avg_words_per_sentence = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };

    let latin_words = words.iter().filter(|w| is_latin_word(w)).count();
    let latin_ratio = if word_count > 0 {
        latin_words as f64 / word_count as f64
    } else {
        0.0
    };

    let mut score = 1.0_f64;
    if !has_urdu_script {
        score -= 0.5;
    } else if script_percentage < MIN_SCRIPT_PERCENTAGE {
        score -= 0.2;
    }
    if word_count < MIN_WORD_COUNT {
        score -= 0.3;
    }
    if word_count > MAX_WORD_COUNT {
        score -= 0.1;
    }
    if sentence_count == 0 {
        score -= 0.2;
    }
    if avg_words_per_sentence > MAX_AVG_SENTENCE_WORDS {
        score -= 0.1;
    }
    if latin_ratio > MAX_LATIN_WORD_RATIO {
        score -= 0.2;
    }

    UrduQualityMetrics {
        has_urdu_script,
        script_percentage,
        diacritic_count,
        word_count,
        sentence_count,
        avg_words_per_sentence,
        quality_score: score.max(0.0),
    }
}

/// A token counts as a Latin word when it contains ASCII letters and no
/// Urdu script at all.
fn is_latin_word(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_alphabetic()) && !token.chars().any(is_urdu_char)
}
