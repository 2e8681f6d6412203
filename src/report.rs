//! Turns engine results into the text report.
//!
//! Every section of the report follows the same truncation policy: unless
//! `show_full` is set, at most `max_lines` items are written, followed by a
//! notice giving the number left out. Counts in headings always describe the
//! whole section.
use std::io::{self, Write};
use std::num::NonZeroUsize;

use crate::engine::{Line, PartialResult};

/// Lines shown per section unless the user says otherwise
pub const DEFAULT_LIMIT: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// Which report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The lines present in every file
    #[default]
    Common,
    /// The lines unique to each file, and the lines shared by some files but
    /// not all
    Different,
}

/// How a single run's report should look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// The report to produce
    pub mode: Mode,
    /// Write every line of every section, ignoring `max_lines`
    pub show_full: bool,
    /// The most lines a section shows when `show_full` is false
    pub max_lines: NonZeroUsize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { mode: Mode::Common, show_full: false, max_lines: DEFAULT_LIMIT }
    }
}

impl DisplayConfig {
    /// How many of a section's `total` items get written
    #[must_use]
    pub fn visible(&self, total: usize) -> usize {
        if self.show_full {
            total
        } else {
            total.min(self.max_lines.get())
        }
    }
}

/// Writes the report for `Mode::Common`: the files compared, then the lines
/// they all contain.
pub fn write_common(
    out: impl Write,
    labels: &[&str],
    common: &[Line],
    config: &DisplayConfig,
) -> io::Result<()> {
    let mut report = Report::new(out, config);
    let files = labels.len();
    if common.is_empty() {
        writeln!(report.out, "No common lines found across all {files} files")?;
        return report.finish();
    }

    writeln!(report.out, "Lines common to all {files} files:")?;
    for (n, label) in labels.iter().enumerate() {
        let separator = if n + 1 < files { "," } else { "" };
        writeln!(report.out, "  {label}{separator}")?;
    }
    writeln!(report.out)?;
    writeln!(report.out, "Found {} common {}:", common.len(), lines(common.len()))?;
    writeln!(report.out)?;
    report.section(common.iter(), |out, line| writeln!(out, "{line}"))?;
    report.finish()
}

/// Writes the report for `Mode::Different`: a total, the lines unique to each
/// file, and (for three or more files) the lines shared by some but not all.
pub fn write_different(
    out: impl Write,
    labels: &[&str],
    unique: &[Vec<Line>],
    partial: &PartialResult,
    config: &DisplayConfig,
) -> io::Result<()> {
    let mut report = Report::new(out, config);
    let total: usize = unique.iter().map(Vec::len).sum();
    if total == 0 && partial.is_empty() {
        writeln!(report.out, "No unique lines found - all files have identical content")?;
        return report.finish();
    }

    writeln!(report.out, "Lines unique to each file (total: {total} unique {}):", lines(total))?;
    writeln!(report.out)?;
    for (label, only_here) in labels.iter().zip(unique) {
        if only_here.is_empty() {
            writeln!(report.out, "No unique lines in {label}")?;
        } else {
            let count = only_here.len();
            writeln!(report.out, "Lines only in {label} ({count} {}):", lines(count))?;
            report.section(only_here.iter(), |out, line| writeln!(out, "  {line}"))?;
        }
        writeln!(report.out)?;
    }

    if labels.len() >= 3 && !partial.is_empty() {
        let count = partial.len();
        writeln!(report.out, "Lines shared by some files but not all ({count} {}):", lines(count))?;
        report.section(partial.iter(), |out, (line, found_in)| {
            write!(out, "  \"{line}\" appears in:")?;
            for &position in found_in {
                write!(out, " {}", labels[position])?;
            }
            writeln!(out)
        })?;
    }
    report.finish()
}

/// An output stream plus the bookkeeping needed to decide whether the report
/// ends with a hint about `--full`.
struct Report<'c, W: Write> {
    out: W,
    config: &'c DisplayConfig,
    truncated: bool,
}

impl<'c, W: Write> Report<'c, W> {
    fn new(out: W, config: &'c DisplayConfig) -> Self {
        Report { out, config, truncated: false }
    }

    /// Writes the visible part of `items`, then the truncation notice if any
    /// were left out.
    fn section<I: ExactSizeIterator>(
        &mut self,
        items: I,
        mut write_item: impl FnMut(&mut W, I::Item) -> io::Result<()>,
    ) -> io::Result<()> {
        let total = items.len();
        let shown = self.config.visible(total);
        for item in items.take(shown) {
            write_item(&mut self.out, item)?;
        }
        let hidden = total - shown;
        if hidden > 0 {
            self.truncated = true;
            writeln!(self.out, "  ... and {hidden} more {} (use --full to see all)", lines(hidden))?;
        }
        Ok(())
    }

    fn finish(mut self) -> io::Result<()> {
        if self.truncated {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "Some sections were cut to {} lines; use --full to see everything or --limit N to change the limit.",
                self.config.max_lines
            )?;
        }
        self.out.flush()
    }
}

fn lines(count: usize) -> &'static str {
    if count == 1 {
        "line"
    } else {
        "lines"
    }
}
