//! The help text: a usage line, a short description, and two tables (options
//! and examples) with their captions lined up in one column.
use crate::styles::{app_name, as_item, as_title, ColorChoice, StyledStr};
use anstream::{
    stream::{AsLockedWrite, RawStream},
    AutoStream,
};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use std::io::{self, Write};
use terminal_size::{terminal_size, Width};

const USAGE_ARGS: &str = " [OPTIONS] <FILE> <FILE> [FILE]...";

const ABOUT: &str = "Treats each FILE as a set of lines and prints the lines found in every \
file. With --diff it prints the lines found in just one file instead, and (given three or more \
files) the lines found in some files but not all. Empty lines are ignored; other lines must \
match exactly.";

/// Every flag `args.rs` accepts, with its caption
pub(crate) const OPTIONS: &[(&str, &str)] = &[
    ("-d, --diff", "Show the lines that set the files apart instead of the common lines"),
    ("-f, --full", "Show every line, however long a section gets"),
    ("-l, --limit <N>", "Show at most N lines per section [default: 20]"),
    ("-v, --verbose", "Log progress to standard error"),
    ("    --color <WHEN>", "Use color in help, errors and logs: auto, always, or never [default: auto]"),
    ("-h, --help", "Print this help and exit"),
    ("-V, --version", "Print the version and exit"),
];

const EXAMPLES: &[(&str, &str)] = &[
    ("comlines a.txt b.txt", "Lines common to both files"),
    ("comlines a.txt b.txt c.txt", "Lines common to all three files"),
    ("comlines -d a.txt b.txt", "Lines unique to each file"),
    ("comlines -d -f a.txt b.txt c.txt", "Unique and partially shared lines, nothing truncated"),
];

const INDENT: usize = 2;
const GUTTER: usize = 2;
/// Captions narrower than this go on their own lines, below their items
const MIN_CAPTION_WIDTH: usize = 24;
const STACKED_CAPTION_INDENT: usize = 8;

static TERMINAL_WIDTH: Lazy<usize> = Lazy::new(|| {
    let from_env = || std::env::var("COLUMNS").ok()?.parse::<usize>().ok();
    terminal_size().map(|(Width(width), _)| usize::from(width)).or_else(from_env).unwrap_or(100)
});

fn name() -> StyledStr<'static> {
    app_name("comlines")
}

/// The program name and version, as printed by `--version`
#[must_use]
pub fn version() -> String {
    let version = std::env!("CARGO_PKG_VERSION");
    format!("{} {version}", name())
}

/// Prints the help text to standard output
pub fn print(color: ColorChoice) -> Result<()> {
    print_to(io::stdout().lock(), color, *TERMINAL_WIDTH).context("failed printing help to stdout")
}

/// Prints the help text to standard error, after a usage error
pub fn eprint(color: ColorChoice) -> Result<()> {
    print_to(io::stderr().lock(), color, *TERMINAL_WIDTH).context("failed printing help to stderr")
}

/// Prints `comlines <version>` to standard output
pub fn print_version(color: ColorChoice) -> Result<()> {
    let mut stdout = AutoStream::new(io::stdout().lock(), color.into());
    writeln!(stdout, "{}", version()).context("failed printing version to stdout")
}

fn print_to<S: RawStream + AsLockedWrite>(raw: S, color: ColorChoice, width: usize) -> io::Result<()> {
    let mut out = AutoStream::new(raw, color.into());
    writeln!(out, "{}", version())?;
    writeln!(out, "{}{}{USAGE_ARGS}", as_title("Usage: "), name())?;
    for line in textwrap::wrap(ABOUT, width.max(1)) {
        writeln!(out, "{line}")?;
    }
    write_table(&mut out, "Options:", OPTIONS, width)?;
    write_table(&mut out, "Examples:", EXAMPLES, width)?;
    out.flush()
}

/// Writes `rows` under `title`. Items form the first column; captions are
/// wrapped into a second column that starts after the widest item. If that
/// leaves a caption less than `MIN_CAPTION_WIDTH` columns, every caption moves
/// to the lines below its item.
fn write_table(out: &mut dyn Write, title: &str, rows: &[(&str, &str)], width: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", as_title(title))?;
    let widest = rows.iter().map(|(item, _)| item.len()).max().unwrap_or(0);
    let column = INDENT + widest + GUTTER;
    let side_by_side = width.saturating_sub(column) >= MIN_CAPTION_WIDTH;

    for &(item, caption) in rows {
        if side_by_side {
            let lines = textwrap::wrap(caption, width - column);
            let pad = column - INDENT - item.len();
            let mut lines = lines.iter();
            if let Some(first) = lines.next() {
                writeln!(out, "{:INDENT$}{}{:pad$}{first}", "", as_item(item), "")?;
            }
            for line in lines {
                writeln!(out, "{:column$}{line}", "")?;
            }
        } else {
            writeln!(out, "{:INDENT$}{}", "", as_item(item))?;
            let room = width.saturating_sub(STACKED_CAPTION_INDENT).max(MIN_CAPTION_WIDTH);
            for line in textwrap::wrap(caption, room) {
                writeln!(out, "{:STACKED_CAPTION_INDENT$}{line}", "")?;
            }
        }
    }
    Ok(())
}
