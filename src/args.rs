//! Parses the command line with `clap`, and defines the parsed result.
//!
//! `clap`'s own help and version flags are turned off: `help.rs` prints the
//! help text instead.
use clap::{Parser, ValueEnum};
use std::ffi::{OsStr, OsString};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::error::Error;
use crate::report::{DisplayConfig, Mode};
use crate::styles::ColorChoice;

/// What the user asked for
#[derive(Debug)]
pub enum Invocation {
    /// Print the help text
    Help(ColorChoice),
    /// Print the version
    Version(ColorChoice),
    /// Compare files
    Compare(Args),
}

/// The parsed command line for a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The files to compare, at least two
    pub files: Vec<PathBuf>,
    /// Report the lines that differ instead of the common lines
    pub diff: bool,
    /// Don't truncate long sections
    pub full: bool,
    /// Lines per section when truncating
    pub limit: NonZeroUsize,
    /// Log progress to standard error
    pub verbose: bool,
    /// Whether diagnostics use color
    pub color: ColorChoice,
}

impl Args {
    /// The display settings for this run
    #[must_use]
    pub fn display_config(&self) -> DisplayConfig {
        DisplayConfig {
            mode: if self.diff { Mode::Different } else { Mode::Common },
            show_full: self.full,
            max_lines: self.limit,
        }
    }
}

/// Returns the parsed command line, or a usage error
pub fn parsed() -> Result<Invocation, Error> {
    parse_from(std::env::args_os())
}

/// Like `parsed`, but for an explicit argument list. The first item is the
/// program name.
pub fn parse_from<I, T>(args: I) -> Result<Invocation, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = CliArgs::try_parse_from(args).map_err(|e| Error::Usage(first_line(&e)))?;
    if parsed.help {
        return Ok(Invocation::Help(parsed.color));
    }
    if parsed.version {
        return Ok(Invocation::Version(parsed.color));
    }
    if parsed.files.len() < 2 {
        return Err(Error::Usage("At least 2 files are required".to_string()));
    }
    Ok(Invocation::Compare(Args {
        files: parsed.files,
        diff: parsed.diff,
        full: parsed.full,
        limit: parsed.limit,
        verbose: parsed.verbose,
        color: parsed.color,
    }))
}

/// The `--color` value on a command line that may not parse, so a usage error
/// can honor it. The last valid value wins; anything after `--` is a file.
pub fn requested_color<I, T>(args: I) -> ColorChoice
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    let mut color = ColorChoice::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let Some(arg) = arg.as_ref().to_str() else { continue };
        let value = match arg {
            "--" => break,
            "--color" => args.next().and_then(|v| v.as_ref().to_str().map(str::to_owned)),
            _ => arg.strip_prefix("--color=").map(str::to_owned),
        };
        if let Some(choice) = value.and_then(|v| ColorChoice::from_str(&v, false).ok()) {
            color = choice;
        }
    }
    color
}

/// `clap` renders its errors as `error: <what went wrong>` followed by a usage
/// summary. We keep just the first part and print our own help after it.
fn first_line(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

#[derive(Debug, Parser)]
#[command(name = "comlines", disable_help_flag = true, disable_version_flag = true)]
/// `CliArgs` is the raw command line
struct CliArgs {
    #[arg(short, long)]
    /// Show the lines unique to each file, and those shared by some but not all
    diff: bool,
    #[arg(short, long)]
    /// Show every line, however long a section gets
    full: bool,
    #[arg(short, long, value_name = "N", default_value = "20")]
    /// Show at most N lines per section
    limit: NonZeroUsize,
    #[arg(short, long)]
    /// Log progress to standard error
    verbose: bool,
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    /// Color the help text, error messages and logs
    color: ColorChoice,
    #[arg(short, long)]
    /// Print help
    help: bool,
    #[arg(short = 'V', long)]
    /// Print version
    version: bool,
    #[arg(value_name = "FILE")]
    /// The files to compare
    files: Vec<PathBuf>,
}
