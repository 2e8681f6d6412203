//! `comlines` treats each input file as a set of lines. It reports either the
//! lines common to all the files, or the lines that set them apart: the lines
//! unique to each file, and the lines shared by some files but not all.
//!
//! The `engine` module is the kernel of the application. The `loader` module
//! reads files into line sets, `report` writes the results, and `args` parses
//! the command line.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

use std::io;

pub mod args;
pub mod engine;
pub mod error;
pub mod help;
pub mod loader;
pub mod report;
pub mod styles;

use crate::engine::{exclusive_of, intersect_all, partial_overlap, LabeledLineSet};
use crate::report::{DisplayConfig, Mode};

/// Runs the comparison `config.mode` asks for over `sets` and writes the
/// report to `out`. Only the results the mode displays are computed.
pub fn write_report(
    out: impl io::Write,
    sets: &[LabeledLineSet],
    config: &DisplayConfig,
) -> io::Result<()> {
    let labels: Vec<&str> = sets.iter().map(LabeledLineSet::label).collect();
    match config.mode {
        Mode::Common => report::write_common(out, &labels, &intersect_all(sets), config),
        Mode::Different => report::write_different(
            out,
            &labels,
            &exclusive_of(sets),
            &partial_overlap(sets),
            config,
        ),
    }
}
