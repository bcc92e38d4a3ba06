//! Deterministic word-by-word English→Urdu translation. Last resort when no
//! hosted provider produces a valid candidate; always succeeds and always
//! produces the same output for the same input.

use crate::urdu::dictionary::DICTIONARY;
use crate::urdu::normalize::post_process;

/// Inflection suffixes tried, in order, when a token has no exact entry.
const SUFFIXES: [&str; 6] = ["ing", "ed", "er", "est", "s", "ly"];

/// Translate English text word by word against the static dictionary.
///
/// Each whitespace token is lowercased and looked up with its surrounding
/// punctuation preserved. Misses fall back to suffix stripping, then to the
/// `ies`→`y` plural rule; a token still unmatched passes through unchanged.
/// Tokens mapping to the empty string (English articles) are dropped. The
/// result goes through [`post_process`] so spacing and sentence termination
/// match what the validator expects.
pub fn translate_fallback(text: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for token in text.split_whitespace() {
        let (prefix, core, suffix) = split_punctuation(token);
        let translated = match lookup(&core.to_lowercase()) {
            Some(urdu) => urdu,
            None => core.to_string(),
        };

        let prefix = map_punctuation(prefix);
        let suffix = map_punctuation(suffix);
        if translated.is_empty() {
            if !prefix.is_empty() || !suffix.is_empty() {
                parts.push(format!("{prefix}{suffix}"));
            }
            continue;
        }
        parts.push(format!("{prefix}{translated}{suffix}"));
    }

    post_process(&parts.join(" "))
}

fn lookup(word: &str) -> Option<String> {
    if let Some(urdu) = DICTIONARY.get(word) {
        return Some((*urdu).to_string());
    }
    for suffix in SUFFIXES {
        if let Some(stem) = word.strip_suffix(suffix)
            && let Some(urdu) = DICTIONARY.get(stem)
        {
            return Some((*urdu).to_string());
        }
    }
    if let Some(stem) = word.strip_suffix("ies") {
        let singular = format!("{stem}y");
        if let Some(urdu) = DICTIONARY.get(singular.as_str()) {
            return Some((*urdu).to_string());
        }
    }
    None
}

/// Split a token into leading punctuation, the alphanumeric core, and
/// trailing punctuation.
fn split_punctuation(token: &str) -> (&str, &str, &str) {
    let start = token
        .find(|c: char| c.is_alphanumeric())
        .unwrap_or(token.len());
    let end = token
        .rfind(|c: char| c.is_alphanumeric())
        .map(|i| i + token[i..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(start);
    (&token[..start], &token[start..end], &token[end..])
}

/// Swap ASCII sentence punctuation for its Urdu counterpart.
fn map_punctuation(punct: &str) -> String {
    punct
        .chars()
        .map(|c| match c {
            '.' => '۔',
            ',' => '،',
            '?' => '؟',
            other => other,
        })
        .collect()
}
