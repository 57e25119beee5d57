//! Human-readable report on stdout (or any writer).

use std::io::{self, Write};

use crate::matcher::{AllahCount, CountResult, Target};
use crate::reference::{
    CHAPTER_27_NOTE, CHAPTERS, INVOCATION_LETTERS, INVOCATION_OCCURRENCES,
    MISSING_INVOCATION_NOTE, VERSES, cross_sum, nineteen_factor,
};

/// Everything computed in one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub invocation_letters: usize,
    pub counts: CountResult,
}

/// " (19×k)" when `n` is a multiple of 19, empty otherwise
fn factor_note(n: u64) -> String {
    match nineteen_factor(n) {
        Some(k) if n > 0 => format!(" (19×{})", k),
        _ => String::new(),
    }
}

fn comparison_line<W: Write>(
    out: &mut W,
    label: &str,
    counted: u64,
    reference: u64,
) -> io::Result<()> {
    let verdict = if counted == reference { "matches" } else { "differs" };
    writeln!(
        out,
        "{}: {} vs reference {}{} - {}",
        label,
        counted,
        reference,
        factor_note(reference),
        verdict
    )
}

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let counts = &report.counts;

    writeln!(
        out,
        "Bismillah letter count (should be {}): {}",
        INVOCATION_LETTERS, report.invocation_letters
    )?;

    writeln!(out)?;
    writeln!(out, "--- WORD COUNTS ---")?;
    writeln!(out, "Ism ({}) [No pronoun forms]: {}", Target::Ism.word(), counts.ism)?;
    match counts.allah {
        AllahCount::Single(n) => {
            writeln!(out, "Allah ({}): {}", Target::Allah.word(), n)?;
        }
        AllahCount::Dual(strict, expanded) => {
            writeln!(out, "Allah ({}) [Strict]: {}", Target::Allah.word(), strict)?;
            writeln!(out, "Allah ({}) [Expanded]: {}", Target::Allah.word(), expanded)?;
        }
    }
    writeln!(out, "Rahman ({}): {}", Target::Rahman.word(), counts.rahman)?;
    writeln!(out, "Rahim ({}): {}", Target::Rahim.word(), counts.rahim)?;

    writeln!(out)?;
    writeln!(out, "--- REFERENCE COMPARISON ---")?;
    comparison_line(out, Target::Ism.name(), counts.ism, Target::Ism.reference_count())?;
    let allah_ref = Target::Allah.reference_count();
    match counts.allah {
        AllahCount::Single(n) => comparison_line(out, Target::Allah.name(), n, allah_ref)?,
        AllahCount::Dual(strict, expanded) => {
            comparison_line(out, "Allah [Strict]", strict, allah_ref)?;
            comparison_line(out, "Allah [Expanded]", expanded, allah_ref)?;
        }
    }
    comparison_line(
        out,
        Target::Rahman.name(),
        counts.rahman,
        Target::Rahman.reference_count(),
    )?;
    comparison_line(
        out,
        Target::Rahim.name(),
        counts.rahim,
        Target::Rahim.reference_count(),
    )?;

    // Not derived from the corpus
    writeln!(out)?;
    writeln!(out, "--- KNOWN BULLET DATA ---")?;
    writeln!(out, "Chapters: {}{}", CHAPTERS, factor_note(CHAPTERS))?;
    writeln!(out, "Total Verses (with Bismillah): {}{}", VERSES, factor_note(VERSES))?;
    writeln!(out, "Cross-sum of {} = {} (should be 19)", VERSES, cross_sum(VERSES))?;
    writeln!(
        out,
        "Bismillah Count: {}{}",
        INVOCATION_OCCURRENCES,
        factor_note(INVOCATION_OCCURRENCES)
    )?;
    writeln!(out, "{}", MISSING_INVOCATION_NOTE)?;
    writeln!(out, "{}", CHAPTER_27_NOTE)?;

    writeln!(out)?;
    writeln!(out, "Analysis complete.")?;
    Ok(())
}
