use anyhow::{Context, Result};
use comlines::args::{self, Args, Invocation};
use comlines::styles::{as_error, ColorChoice};
use comlines::{help, loader};
use is_terminal::IsTerminal;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let invocation = match args::parsed() {
        Ok(invocation) => invocation,
        Err(usage) => {
            let color = args::requested_color(std::env::args_os());
            report_error(&anyhow::Error::from(usage), color);
            eprintln!();
            if let Err(e) = help::eprint(color) {
                report_error(&e, color);
            }
            return ExitCode::FAILURE;
        }
    };

    let (outcome, color) = match invocation {
        Invocation::Help(color) => (help::print(color), color),
        Invocation::Version(color) => (help::print_version(color), color),
        Invocation::Compare(args) => {
            init_tracing(args.verbose, args.color);
            (compare(&args), args.color)
        }
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, color);
            ExitCode::FAILURE
        }
    }
}

/// Debug logging to stderr, only when asked for
fn init_tracing(verbose: bool, color: ColorChoice) {
    if verbose {
        let ansi = match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stderr().is_terminal(),
        };
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_ansi(ansi)
            .with_writer(io::stderr)
            .init();
    }
}

fn compare(args: &Args) -> Result<()> {
    let sets = loader::load_all(&args.files)?;
    let config = args.display_config();
    let stdout = io::stdout();
    let written = if stdout.is_terminal() {
        comlines::write_report(stdout.lock(), &sets, &config)
    } else {
        comlines::write_report(io::BufWriter::new(stdout.lock()), &sets, &config)
    };
    written.context("failed writing the report to stdout")
}

/// `{:#}` prints the whole chain, so a read error shows its cause after the path
fn report_error(e: &anyhow::Error, color: ColorChoice) {
    let mut stderr = anstream::AutoStream::new(io::stderr().lock(), color.into());
    let _ = writeln!(stderr, "{} {e:#}", as_error("Error:"));
}
