//! Text cleanup applied before counting.
//!
//! Order matters: non-Arabic codepoints are dropped first, then diacritics,
//! then whitespace runs are collapsed to a single space and the ends trimmed.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::AnalysisConfig;

/// Codepoints kept when `remove_non_arabic` is set (plus whitespace)
pub const ARABIC_BLOCK: (char, char) = ('\u{0600}', '\u{06FF}');

/// Harakat, superscript alef and the Quranic annotation marks
pub const DIACRITIC_RANGES: &[(char, char)] = &[
    ('\u{064B}', '\u{0652}'),
    ('\u{0670}', '\u{0670}'),
    ('\u{06D6}', '\u{06ED}'),
];

/// Body of a regex character class covering `ranges`
fn class_body(ranges: &[(char, char)]) -> String {
    ranges
        .iter()
        .map(|&(lo, hi)| format!(r"\u{{{:04X}}}-\u{{{:04X}}}", lo as u32, hi as u32))
        .collect()
}

lazy_static! {
    static ref NON_ARABIC: Regex =
        Regex::new(&format!(r"[^{}\s]", class_body(&[ARABIC_BLOCK]))).unwrap();
    static ref DIACRITICS: Regex =
        Regex::new(&format!("[{}]", class_body(DIACRITIC_RANGES))).unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    // General category L only; harakat carry Other_Alphabetic and must not count
    static ref LETTER: Regex = Regex::new(r"\p{L}").unwrap();
}

/// Normalize text according to `config`.
///
/// Empty input yields empty output. The result is never longer than the
/// input, and normalizing it again returns it unchanged.
pub fn normalize(text: &str, config: &AnalysisConfig) -> String {
    let mut result = text.to_string();

    if config.remove_non_arabic {
        result = NON_ARABIC.replace_all(&result, "").into_owned();
    }

    if config.strip_diacritics {
        result = DIACRITICS.replace_all(&result, "").into_owned();
    }

    WHITESPACE.replace_all(&result, " ").trim().to_string()
}

/// True for the codepoints stripped when `strip_diacritics` is set
pub fn is_diacritic(c: char) -> bool {
    DIACRITIC_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// True for codepoints kept when `remove_non_arabic` is set
pub fn is_arabic_block(c: char) -> bool {
    (ARABIC_BLOCK.0..=ARABIC_BLOCK.1).contains(&c)
}

/// Count letters (no marks, digits or spaces)
pub fn count_letters(text: &str) -> usize {
    LETTER.find_iter(text).count()
}
