//! Whole-word counting over normalized text.
//!
//! A match only counts when the characters on either side are not word
//! characters (letters, digits or `_`). Combining marks are not word
//! characters, so a trailing haraka still ends the word, while a target
//! embedded in a longer token never matches. Patterns in a set are counted
//! independently and summed; overlap between different sets is not
//! deduplicated.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::config::AllahMode;
use crate::error::Result;

/// The words whose occurrences are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Ism,
    Allah,
    Rahman,
    Rahim,
}

impl Target {
    pub const ALL: [Target; 4] = [Target::Ism, Target::Allah, Target::Rahman, Target::Rahim];

    /// Standalone Arabic form
    pub fn word(&self) -> &'static str {
        match self {
            Target::Ism => "اسم",
            Target::Allah => "الله",
            Target::Rahman => "الرحمن",
            Target::Rahim => "الرحيم",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Target::Ism => "Ism",
            Target::Allah => "Allah",
            Target::Rahman => "Rahman",
            Target::Rahim => "Rahim",
        }
    }

    /// Historically reported number of occurrences
    pub fn reference_count(&self) -> u64 {
        match self {
            Target::Ism => 19,
            Target::Allah => 2698,
            Target::Rahman => 57,
            Target::Rahim => 114,
        }
    }
}

lazy_static! {
    static ref WORD_CHAR: Regex = Regex::new(r"^[\p{L}\p{N}_]$").unwrap();
}

fn is_word_char(c: char) -> bool {
    WORD_CHAR.is_match(c.encode_utf8(&mut [0u8; 4]))
}

/// True when `text[start..end]` has no word character directly on either side
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Byte offset of the char following the one at `i`
fn next_char(text: &str, i: usize) -> usize {
    text[i..].chars().next().map_or(text.len() + 1, |c| i + c.len_utf8())
}

/// Ordered whole-word expressions for one target
#[derive(Debug, Clone)]
pub struct PatternSet {
    target: Target,
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Build a set from literal words; boundaries are checked when counting
    pub fn from_words(target: Target, words: &[&str]) -> Result<Self> {
        let patterns = words
            .iter()
            .map(|w| Regex::new(&regex::escape(w)))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { target, patterns })
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    pub fn count(&self, text: &str) -> u64 {
        count_occurrences(text, &self.patterns)
    }
}

lazy_static! {
    // Standalone form only, no pronoun endings or plurals
    pub static ref ISM: PatternSet = PatternSet::from_words(Target::Ism, &["اسم"]).unwrap();

    pub static ref ALLAH_STRICT: PatternSet =
        PatternSet::from_words(Target::Allah, &["الله"]).unwrap();

    pub static ref ALLAH_EXPANDED: PatternSet = PatternSet::from_words(
        Target::Allah,
        &[
            "الله",  // standalone
            "اللهم", // vocative
            "بالله",
            "والله",
            "فلله",
            "تالله",
        ],
    )
    .unwrap();

    pub static ref RAHMAN: PatternSet =
        PatternSet::from_words(Target::Rahman, &["الرحمن"]).unwrap();

    pub static ref RAHIM: PatternSet =
        PatternSet::from_words(Target::Rahim, &["الرحيم"]).unwrap();
}

/// Non-overlapping whole-word matches of one pattern
fn count_whole_words(text: &str, pattern: &Regex) -> u64 {
    let mut count = 0;
    let mut start = 0;
    while start <= text.len() {
        let Some(m) = pattern.find_at(text, start) else {
            break;
        };
        if is_whole_word(text, m.start(), m.end()) {
            count += 1;
            start = if m.end() > m.start() { m.end() } else { next_char(text, m.start()) };
        } else {
            // An overlapping candidate may still be bounded
            start = next_char(text, m.start());
        }
    }
    count
}

/// Sum the non-overlapping whole-word matches of every pattern
pub fn count_occurrences(text: &str, patterns: &[Regex]) -> u64 {
    let mut total: u64 = 0;
    for pattern in patterns {
        let count = count_whole_words(text, pattern);
        debug!("Pattern '{}' found {} matches", pattern.as_str(), count);
        total += count;
    }
    total
}

/// Allah count, shaped by the configured mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllahCount {
    Single(u64),
    /// (strict, expanded)
    Dual(u64, u64),
}

impl AllahCount {
    /// Counts in report order
    pub fn values(&self) -> Vec<u64> {
        match *self {
            AllahCount::Single(n) => vec![n],
            AllahCount::Dual(strict, expanded) => vec![strict, expanded],
        }
    }
}

pub fn count_allah(text: &str, mode: AllahMode) -> AllahCount {
    match mode {
        AllahMode::Strict => AllahCount::Single(ALLAH_STRICT.count(text)),
        AllahMode::Expanded => AllahCount::Single(ALLAH_EXPANDED.count(text)),
        AllahMode::Both => AllahCount::Dual(ALLAH_STRICT.count(text), ALLAH_EXPANDED.count(text)),
    }
}

/// Counts for every target over one normalized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountResult {
    pub ism: u64,
    pub allah: AllahCount,
    pub rahman: u64,
    pub rahim: u64,
}

impl CountResult {
    pub fn is_empty(&self) -> bool {
        self.ism == 0
            && self.rahman == 0
            && self.rahim == 0
            && self.allah.values().iter().all(|&n| n == 0)
    }
}

pub fn count_all(text: &str, mode: AllahMode) -> CountResult {
    CountResult {
        ism: ISM.count(text),
        allah: count_allah(text, mode),
        rahman: RAHMAN.count(text),
        rahim: RAHIM.count(text),
    }
}
