//! Fixed reference numbers and the invocation self-check.

use crate::config::AnalysisConfig;
use crate::normalize::{count_letters, normalize};

/// بسم الله الرحمن الرحيم
pub const INVOCATION: &str = "بسم الله الرحمن الرحيم";
pub const INVOCATION_LETTERS: usize = 19;

pub const CHAPTERS: u64 = 114;
pub const VERSES: u64 = 6346;
pub const INVOCATION_OCCURRENCES: u64 = 114;

pub const MISSING_INVOCATION_NOTE: &str =
    "Missing Bismillah in Chapter 9, extra in 27 => 19 chapters apart";
pub const CHAPTER_27_NOTE: &str = "Surah 27:30 => 27 + 30 = 57 (19×3)";

/// Letters left in the invocation after normalizing it with `config`
pub fn invocation_letter_count(config: &AnalysisConfig) -> usize {
    count_letters(&normalize(INVOCATION, config))
}

/// Sum of the decimal digits of `n`
pub fn cross_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// `Some(k)` when `n == 19 * k`
pub fn nineteen_factor(n: u64) -> Option<u64> {
    (n % 19 == 0).then_some(n / 19)
}
