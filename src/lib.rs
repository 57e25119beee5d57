//! Whole-word counting of key terms in an Arabic corpus.
//!
//! The pipeline is linear: load the corpus, normalize it, count each target
//! with boundary-anchored patterns and print the counts next to the
//! historically reported numbers.

pub mod config;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod reference;
pub mod report;

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{info, warn};
use whatlang::Script;

pub use config::{AllahMode, AnalysisConfig};
pub use error::{Error, Result};
pub use matcher::{AllahCount, CountResult, PatternSet, Target, count_all, count_allah};
pub use normalize::normalize;
pub use report::{Report, write_report};

/// Corpus location, relative to the working directory
pub const CORPUS_PATH: &str = "quran-simple.txt";

/// Read the whole corpus into memory
pub fn load_corpus(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded {}: {} bytes", path.display(), content.len());

    if !content.trim().is_empty() {
        match whatlang::detect_script(&content) {
            Some(Script::Arabic) => {}
            Some(other) => warn!(
                "{} looks like {:?} script, not Arabic; counts will likely be zero",
                path.display(),
                other
            ),
            None => warn!("Could not detect the script of {}", path.display()),
        }
    }

    Ok(content)
}

/// Normalize `raw` and count every target
pub fn analyze(raw: &str, config: &AnalysisConfig) -> Report {
    let text = normalize(raw, config);
    info!(
        "Normalized corpus: {} -> {} chars (mode {})",
        raw.chars().count(),
        text.chars().count(),
        config.allah_mode
    );

    let counts = count_all(&text, config.allah_mode);
    if counts.is_empty() {
        warn!("No target words found in corpus");
    }

    Report {
        invocation_letters: reference::invocation_letter_count(config),
        counts,
    }
}

/// Load, analyze and write the report for the corpus at `path`
pub fn run<W: Write>(path: &Path, config: &AnalysisConfig, out: &mut W) -> Result<Report> {
    let raw = load_corpus(path)?;
    let report = analyze(&raw, config);
    write_report(out, &report)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn corpus(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn run_on(text: &str, config: &AnalysisConfig) -> (Report, String) {
        let file = corpus(text);
        let mut buf = Vec::new();
        let report = run(file.path(), config, &mut buf).unwrap();
        (report, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_isolated_and_embedded_targets() {
        // One standalone instance of each target, one embedded in a longer word
        let text = "1|1|اسم الله الرحمن الرحيم\n1|2|واسمه كالله والرحمن والرحيم\n";
        let (report, out) = run_on(text, &AnalysisConfig::DEFAULT);

        assert_eq!(
            report.counts,
            CountResult {
                ism: 1,
                allah: AllahCount::Dual(1, 1),
                rahman: 1,
                rahim: 1,
            }
        );
        assert!(out.contains("Ism (اسم) [No pronoun forms]: 1\n"));
        assert!(out.contains("Allah (الله) [Strict]: 1\n"));
        assert!(out.contains("Allah (الله) [Expanded]: 1\n"));
        assert!(out.contains("Rahman (الرحمن): 1\n"));
        assert!(out.contains("Rahim (الرحيم): 1\n"));
    }

    #[test]
    fn test_empty_corpus() {
        let (report, out) = run_on("", &AnalysisConfig::DEFAULT);

        assert!(report.counts.is_empty());
        assert_eq!(report.invocation_letters, 19);
        assert!(out.contains("Ism (اسم) [No pronoun forms]: 0\n"));
        assert!(out.contains("Rahim (الرحيم): 0\n"));
        assert!(out.contains("--- KNOWN BULLET DATA ---"));
        assert!(out.contains("Cross-sum of 6346 = 19 (should be 19)"));
        assert!(out.ends_with("Analysis complete.\n"));
    }

    #[test]
    fn test_diacritized_corpus() {
        let text = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ\nوَاللَّهِ تَاللَّهِ";
        let (report, _) = run_on(text, &AnalysisConfig::DEFAULT);
        assert_eq!(report.counts.allah, AllahCount::Dual(1, 3));
        assert_eq!(report.counts.rahman, 1);

        // Without stripping, shadda inside a word breaks the literal
        let config = AnalysisConfig {
            strip_diacritics: false,
            ..AnalysisConfig::DEFAULT
        };
        let (report, _) = run_on(text, &config);
        assert_eq!(report.counts.allah, AllahCount::Dual(0, 0));

        // but case endings alone do not hide the word
        let (report, out) = run_on("بسمِ اللهِ الرحمنِ الرحيمِ\nواللهِ", &config);
        assert_eq!(
            report.counts,
            CountResult {
                ism: 0,
                allah: AllahCount::Dual(1, 2),
                rahman: 1,
                rahim: 1,
            }
        );
        assert!(out.contains("Allah (الله) [Expanded]: 2\n"));
    }

    #[test]
    fn test_single_mode_output() {
        let config = AnalysisConfig {
            allah_mode: AllahMode::Expanded,
            ..AnalysisConfig::DEFAULT
        };
        let (report, out) = run_on("الله بالله", &config);
        assert_eq!(report.counts.allah, AllahCount::Single(2));
        assert!(out.contains("Allah (الله): 2\n"));
    }

    #[test]
    fn test_missing_corpus_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let mut buf = Vec::new();
        let err = run(&path, &AnalysisConfig::DEFAULT, &mut buf).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(buf.is_empty());
    }
}
