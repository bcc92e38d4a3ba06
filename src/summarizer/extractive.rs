//! Extractive summarization without any external service. Used whenever the
//! hosted summarizer fails, and as the baseline quality gate.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::summarizer::{
    MAX_KEY_POINTS, SummarizeError, SummaryResult, keypoints, lexicon::IMPORTANCE_LEXICON,
};

const MIN_SENTENCE_WORDS: usize = 3;
const MIN_SENTENCE_CHARS: usize = 15;
const SELECTION_RATIO: f64 = 0.3;
const MIN_SUMMARY_SENTENCES: usize = 3;
const MAX_SUMMARY_SENTENCES: usize = MAX_KEY_POINTS;

const PLACEHOLDER_SUMMARY: &str =
    "The article does not contain enough well-formed sentences to summarize.";

static UNSAFE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s.,!?;:'"()%-]"#).unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static TERMINATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// A sentence with its score and original position. Ordering by `score`
/// picks the summary set; ordering by `original_index` restores narrative
/// order afterwards.
#[derive(Debug, Clone)]
struct ScoredSentence {
    text: String,
    score: i64,
    original_index: usize,
}

/// Build a [`SummaryResult`] from article body text.
///
/// Fails only for empty or whitespace-only input; any other input produces a
/// summary, falling back to a placeholder sentence when nothing qualifies.
pub fn summarize(text: &str) -> Result<SummaryResult, SummarizeError> {
    if text.trim().is_empty() {
        return Err(SummarizeError::EmptyInput);
    }

    let cleaned = preprocess(text);
    let sentences = split_sentences(&cleaned);
    let summary = build_summary(&sentences);
    let key_points = keypoints::extract_key_points(text, &sentences);

    Ok(SummaryResult {
        summary,
        key_points,
        word_count: cleaned.split_whitespace().count(),
        original_length: text.chars().count(),
    })
}

/// Collapse whitespace and drop characters outside the safe word and
/// punctuation set.
pub(crate) fn preprocess(text: &str) -> String {
    let safe = UNSAFE_CHARS_RE.replace_all(text, "");
    WHITESPACE_RE.replace_all(&safe, " ").trim().to_string()
}

/// Split on sentence-terminator runs, discarding fragments too short to
/// carry meaning.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    TERMINATOR_RE
        .split(text)
        .map(str::trim)
        .filter(|s| {
            s.split_whitespace().count() >= MIN_SENTENCE_WORDS
                && s.chars().count() >= MIN_SENTENCE_CHARS
        })
        .map(str::to_string)
        .collect()
}

fn build_summary(sentences: &[String]) -> String {
    if sentences.is_empty() {
        return PLACEHOLDER_SUMMARY.to_string();
    }

    let total = sentences.len();
    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .enumerate()
        .map(|(i, s)| ScoredSentence {
            text: s.clone(),
            score: score_sentence(s, i, total),
            original_index: i,
        })
        .collect();

    // Stable sort: score ties keep the earlier sentence first.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let by_ratio = (total as f64 * SELECTION_RATIO).ceil() as usize;
    let target = by_ratio
        .max(MIN_SUMMARY_SENTENCES)
        .min(MAX_SUMMARY_SENTENCES)
        .min(total);
    scored.truncate(target);

    // Selection must not scramble narrative order.
    scored.sort_by_key(|s| s.original_index);

    let mut summary = scored
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(". ");
    summary.push('.');
    summary
}

/// Additive integer scoring; can go negative for noisy sentences.
pub(crate) fn score_sentence(sentence: &str, index: usize, total: usize) -> i64 {
    let mut score = 0_i64;

    // Position bonuses are two independent checks, not mutually exclusive;
    // in a very short document one sentence can collect both.
    let edge = (total as f64 * 0.2).ceil() as usize;
    if index < edge {
        score += 3;
    }
    if index >= total.saturating_sub(edge) {
        score += 2;
    }

    let words: Vec<&str> = sentence.split_whitespace().collect();
    let word_count = words.len();
    if (10..=30).contains(&word_count) {
        score += 2;
    } else if (8..=35).contains(&word_count) {
        score += 1;
    }

    let lower = sentence.to_lowercase();
    let mut distinct_terms = 0;
    for term in IMPORTANCE_LEXICON {
        let hits = lower.matches(term).count();
        if hits > 0 {
            distinct_terms += 1;
            score += hits as i64;
        }
    }
    if distinct_terms >= 2 {
        score += 1;
    }

    let numeric_tokens = words
        .iter()
        .filter(|w| w.chars().any(|c| c.is_ascii_digit()))
        .count();
    if numeric_tokens > 3 {
        score -= 1;
    }

    let bracket_chars = sentence.chars().filter(|c| "()[]{}".contains(*c)).count();
    if bracket_chars > 2 {
        score -= 1;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(summarize(""), Err(SummarizeError::EmptyInput)));
        assert!(matches!(
            summarize("   \n\t  "),
            Err(SummarizeError::EmptyInput)
        ));
    }

    #[test]
    fn test_summary_is_never_empty() {
        // No sentence qualifies (all too short), but a summary still comes back.
        let result = summarize("Ok. No. Hm. Eh.").unwrap();
        assert_eq!(result.summary, PLACEHOLDER_SUMMARY);
        assert!(!result.summary.is_empty());
    }

    #[test]
    fn test_healthcare_example_keeps_both_sentences() {
        let text =
            "AI is transforming healthcare. Researchers say the key benefit is faster diagnosis.";
        let result = summarize(text).unwrap();
        assert_eq!(
            result.summary,
            "AI is transforming healthcare. Researchers say the key benefit is faster diagnosis."
        );
        assert!(result.key_points.iter().any(|p| p.contains("key")));
    }

    #[test]
    fn test_selection_preserves_original_order() {
        // The closing sentence scores far higher than the middle ones, but it
        // must still appear last in the summary.
        let text = "The committee met on a rainy Tuesday to settle the agenda for the season. \
                    Some members were late because the trains were delayed near the station. \
                    Catering arrangements took up most of the first hour of discussion. \
                    The room needed new chairs and somebody mentioned the broken projector again. \
                    A vote on the venue was postponed until the following meeting in October. \
                    Several attendees left early to catch the last connection home that evening. \
                    Therefore the key finding is that significant research evidence demands action.";
        let result = summarize(text).unwrap();

        let first = result.summary.find("committee met").unwrap();
        let last = result.summary.find("demands action").unwrap();
        assert!(first < last);
        assert!(result.summary.ends_with('.'));
    }

    #[test]
    fn test_sentence_splitting_drops_fragments() {
        let sentences = split_sentences("Dr. No! This sentence is long enough to keep. Ok.");
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].contains("long enough"));
    }

    #[test]
    fn test_preprocess_strips_unsafe_characters() {
        let cleaned = preprocess("Hello <world> ~ £100 \n\n test");
        assert_eq!(cleaned, "Hello world 100 test");
    }

    #[test]
    fn test_position_bonuses_are_independent() {
        // Single-sentence document: first-20% and last-20% checks both fire.
        let score = score_sentence("Short sentence here", 0, 1);
        assert_eq!(score, 5);
    }

    #[test]
    fn test_numeric_and_bracket_penalties() {
        let noisy = "The figures 12 44 78 91 (see [tables] {below}) say little else here";
        let clean = "The figures in the appendix say very little about the trend here";
        let noisy_score = score_sentence(noisy, 5, 20);
        let clean_score = score_sentence(clean, 5, 20);
        assert!(noisy_score < clean_score);
    }

    #[test]
    fn test_keyword_compounding_bonus() {
        let one_term = "The outcome was positive for everyone involved in it";
        let two_terms = "The key research outcome was positive for everyone involved";
        let gap = score_sentence(two_terms, 5, 20) - score_sentence(one_term, 5, 20);
        // two lexicon hits plus the compounding bonus
        assert!(gap >= 3);
    }

    #[test]
    fn test_word_count_matches_preprocessed_text() {
        let result = summarize("One two three. Four five six seven eight nine ten eleven.").unwrap();
        assert_eq!(result.word_count, 11);
        assert_eq!(result.original_length, 57);
    }
}
