//! Key-point selection: existing list items first, then sentences carrying
//! key-indicator terms, then the opening sentences as a last resort.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::summarizer::{MAX_KEY_POINTS, lexicon::KEY_INDICATORS};

const MIN_LIST_ITEM_CHARS: usize = 10;
const MAX_LIST_ITEM_CHARS: usize = 150;
const MIN_POINT_CHARS: usize = 10;
const MAX_POINT_CHARS: usize = 200;
/// Stop collecting once this many candidates exist.
const ENOUGH_CANDIDATES: usize = 3;

static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[•·*-]\s+(.+)$").unwrap());
static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\d+[.)]\s+(.+)$").unwrap());

/// Collect up to [`MAX_KEY_POINTS`] key points. List items are read from the
/// raw text (markers survive there); indicator sentences come from the same
/// segmentation the summary uses.
pub fn extract_key_points(raw_text: &str, sentences: &[String]) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();

    for caps in BULLET_RE
        .captures_iter(raw_text)
        .chain(NUMBERED_RE.captures_iter(raw_text))
    {
        let item = caps[1].trim().to_string();
        let len = item.chars().count();
        if (MIN_LIST_ITEM_CHARS..=MAX_LIST_ITEM_CHARS).contains(&len) {
            push_unique(&mut candidates, item);
        }
    }

    if candidates.len() < ENOUGH_CANDIDATES {
        for sentence in sentences {
            let lower = sentence.to_lowercase();
            if KEY_INDICATORS.iter().any(|k| lower.contains(k)) {
                push_unique(&mut candidates, sentence.clone());
            }
        }
    }

    if candidates.len() < ENOUGH_CANDIDATES {
        for sentence in sentences.iter().take(ENOUGH_CANDIDATES) {
            push_unique(&mut candidates, sentence.clone());
        }
    }

    candidates.retain(|c| {
        let len = c.chars().count();
        (MIN_POINT_CHARS..=MAX_POINT_CHARS).contains(&len)
    });
    candidates.truncate(MAX_KEY_POINTS);
    candidates
}

fn push_unique(candidates: &mut Vec<String>, item: String) {
    if !candidates.contains(&item) {
        candidates.push(item);
    }
}
