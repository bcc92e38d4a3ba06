//! Normalization and repair of translation candidates. The hosted model
//! tends to prepend labels and mangle spacing around Urdu punctuation; both
//! are fixed here before validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Labels the hosted model prepends to its output. Compared case-insensitively.
const BOILERPLATE_PREFIXES: &[&str] = &[
    "here is the urdu translation:",
    "here is the translation:",
    "urdu translation:",
    "translation:",
    "urdu:",
    "اردو ترجمہ:",
    "ترجمہ:",
];

/// Recognized sentence terminators; `post_process` appends the Urdu full
/// stop when none is present.
const TERMINATORS: [char; 5] = ['۔', '؟', '!', '.', '?'];

static SPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static BLANK_LINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n+").unwrap());

/// Space wrongly inserted before a combining mark splits it from its base
/// letter.
static SPACE_BEFORE_DIACRITIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t]+([\u{064B}-\u{065F}\u{0670}\u{06D6}-\u{06DC}\u{06DF}-\u{06ED}])").unwrap()
});

static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([۔،؟!.,;:?])").unwrap());

static PUNCT_WITHOUT_SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([۔،؟!,;:])(\p{L})").unwrap());

/// Trim, normalize line endings, strip boilerplate prefixes, collapse
/// whitespace runs and blank-line runs.
pub fn normalize(text: &str) -> String {
    let mut text = text.replace("\r\n", "\n").replace('\r', "\n");
    text = text.trim().to_string();

    let lower = text.to_lowercase();
    for prefix in BOILERPLATE_PREFIXES {
        if lower.starts_with(prefix) {
            text = text[prefix.len()..].trim_start().to_string();
            break;
        }
    }

    let spaced = SPACE_RUN_RE.replace_all(&text, " ");
    let collapsed = BLANK_LINES_RE.replace_all(&spaced, "\n\n");
    collapsed.trim().to_string()
}

/// Repair pass applied after normalization: reattach combining marks, fix
/// spacing around punctuation, and terminate the final sentence.
/// Idempotent: applying it twice yields the same string.
pub fn post_process(text: &str) -> String {
    let text = normalize(text);
    if text.is_empty() {
        return text;
    }

    let text = SPACE_BEFORE_DIACRITIC_RE.replace_all(&text, "$1");
    let text = SPACE_BEFORE_PUNCT_RE.replace_all(&text, "$1");
    let text = PUNCT_WITHOUT_SPACE_RE.replace_all(&text, "$1 $2");

    let mut text = text.into_owned();
    if !text.ends_with(TERMINATORS) {
        text.push('۔');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_model_labels() {
        assert_eq!(normalize("Translation: یہ خلاصہ ہے۔"), "یہ خلاصہ ہے۔");
        assert_eq!(normalize("URDU: یہ خلاصہ ہے۔"), "یہ خلاصہ ہے۔");
        assert_eq!(normalize("اردو ترجمہ: یہ خلاصہ ہے۔"), "یہ خلاصہ ہے۔");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        let text = "پہلی  سطر\r\n\r\n\r\nدوسری   سطر";
        assert_eq!(normalize(text), "پہلی سطر\n\nدوسری سطر");
    }

    #[test]
    fn test_post_process_fixes_punctuation_spacing() {
        assert_eq!(post_process("خلاصہ ۔"), "خلاصہ۔");
        assert_eq!(post_process("پہلا۔دوسرا۔"), "پہلا۔ دوسرا۔");
    }

    #[test]
    fn test_post_process_appends_full_stop() {
        assert_eq!(post_process("یہ خلاصہ ہے"), "یہ خلاصہ ہے۔");
        // existing terminators are left alone
        assert_eq!(post_process("یہ خلاصہ ہے۔"), "یہ خلاصہ ہے۔");
        assert_eq!(post_process("کیا یہ خلاصہ ہے؟"), "کیا یہ خلاصہ ہے؟");
    }

    #[test]
    fn test_post_process_reattaches_diacritics() {
        // a stray space between the base letter and its fatha
        let broken = "ز َبر";
        assert_eq!(post_process(broken), "زَبر۔");
    }

    #[test]
    fn test_post_process_is_idempotent() {
        let samples = [
            "Translation: یہ خلاصہ ہے",
            "پہلا۔دوسرا ۔ تیسرا",
            "صحت کے شعبے میں مصنوعی ذہانت",
            "mixed اردو and english text",
        ];
        for sample in samples {
            let once = post_process(sample);
            let twice = post_process(&once);
            assert_eq!(once, twice);
        }
    }
}
