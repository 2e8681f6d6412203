//! Terminal styling for the help text and for error diagnostics.
use anstyle::{AnsiColor, Color, Style};
use clap::ValueEnum;
use std::fmt;

/// When to use color in the help text and in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Use color when the output stream is a terminal that supports it
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for anstream::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => anstream::ColorChoice::Auto,
            ColorChoice::Always => anstream::ColorChoice::Always,
            ColorChoice::Never => anstream::ColorChoice::Never,
        }
    }
}

const GREEN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const BOLD_GREEN: Style = GREEN.bold();
const YELLOW: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const BOLD_RED: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold();

#[must_use]
pub(crate) fn app_name(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: BOLD_GREEN, content }
}
#[must_use]
pub(crate) fn as_item(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: GREEN, content }
}
#[must_use]
pub(crate) fn as_title(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: YELLOW, content }
}
/// Styles `content` as the lead-in of an error message
#[must_use]
pub fn as_error(content: &str) -> StyledStr<'_> {
    StyledStr { prefix: BOLD_RED, content }
}

/// A string that displays wrapped in ANSI escapes
pub struct StyledStr<'a> {
    prefix: Style,
    content: &'a str,
}
impl fmt::Display for StyledStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix.render(), self.content, self.prefix.render_reset())
    }
}
