//! Static signal-word tables used by sentence scoring and key-point
//! selection. Built once, immutable, domain-neutral.

/// Terms whose presence raises a sentence's score. Matched as substrings of
/// the lowercased sentence, so "researchers" counts for "research".
pub const IMPORTANCE_LEXICON: &[&str] = &[
    "important",
    "significant",
    "key",
    "main",
    "primary",
    "essential",
    "critical",
    "major",
    "fundamental",
    "notable",
    "therefore",
    "thus",
    "consequently",
    "however",
    "moreover",
    "furthermore",
    "conclusion",
    "result",
    "finding",
    "research",
    "study",
    "evidence",
    "data",
    "analysis",
    "demonstrates",
    "suggests",
    "shows",
    "according",
    "experts",
    "reveals",
];

/// Smaller set used to promote sentences into the key-point list.
pub const KEY_INDICATORS: &[&str] = &[
    "key",
    "important",
    "significant",
    "essential",
    "critical",
    "main",
    "must",
    "should",
    "note",
    "remember",
];
