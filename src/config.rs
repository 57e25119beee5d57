//! Analysis settings.
//!
//! These used to be module-level flags; they are now a plain value passed
//! into normalization and counting so several configurations can coexist.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which lexical set is used when counting "Allah"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllahMode {
    /// Only the standalone form
    Strict,
    /// Standalone form plus prefixed/suffixed variants
    Expanded,
    /// Report both totals
    Both,
}

impl FromStr for AllahMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(AllahMode::Strict),
            "expanded" => Ok(AllahMode::Expanded),
            "both" => Ok(AllahMode::Both),
            _ => Err(Error::UnknownAllahMode(s.to_string())),
        }
    }
}

impl fmt::Display for AllahMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AllahMode::Strict => "strict",
            AllahMode::Expanded => "expanded",
            AllahMode::Both => "both",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Strip harakat and Quranic annotation marks
    pub strip_diacritics: bool,
    /// Drop every codepoint outside U+0600..U+06FF except whitespace
    pub remove_non_arabic: bool,
    pub allah_mode: AllahMode,
}

impl AnalysisConfig {
    pub const DEFAULT: AnalysisConfig = AnalysisConfig {
        strip_diacritics: true,
        remove_non_arabic: true,
        allah_mode: AllahMode::Both,
    };
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
