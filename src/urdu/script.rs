//! Unicode-level script detection for Urdu text.

/// Code point ranges treated as Urdu script: Arabic, Arabic Supplement,
/// Arabic Extended-A, and both Arabic Presentation Forms blocks.
const URDU_BLOCKS: [(u32, u32); 5] = [
    (0x0600, 0x06FF),
    (0x0750, 0x077F),
    (0x08A0, 0x08FF),
    (0xFB50, 0xFDFF),
    (0xFE70, 0xFEFF),
];

/// Combining-mark ranges counted as diacritics (harakat and Quranic marks).
const DIACRITIC_RANGES: [(u32, u32); 4] = [
    (0x064B, 0x065F),
    (0x0670, 0x0670),
    (0x06D6, 0x06DC),
    (0x06DF, 0x06ED),
];

pub fn is_urdu_char(c: char) -> bool {
    let cp = c as u32;
    URDU_BLOCKS.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

pub fn is_diacritic(c: char) -> bool {
    let cp = c as u32;
    DIACRITIC_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// True if any character in the text falls in an Urdu block.
pub fn contains_urdu_script(text: &str) -> bool {
    text.chars().any(is_urdu_char)
}

/// Percentage of non-whitespace characters that are Urdu script, in `[0, 100]`.
pub fn script_percentage(text: &str) -> f64 {
    let mut total = 0_usize;
    let mut urdu = 0_usize;
    for c in text.chars() {
        if c.is_whitespace() {
            continue;
        }
        total += 1;
        if is_urdu_char(c) {
            urdu += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    urdu as f64 / total as f64 * 100.0
}

pub fn diacritic_count(text: &str) -> usize {
    text.chars().filter(|c| is_diacritic(*c)).count()
}
