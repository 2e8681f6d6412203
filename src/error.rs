//! The two ways a `comlines` run can fail: a bad command line, or an input file
//! that can't be read in full.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported to the user. Both kinds end the run with a nonzero exit
/// status; neither is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of file arguments, or a malformed flag
    #[error("{0}")]
    Usage(String),

    /// A file couldn't be opened, or reading it failed partway through. The
    /// underlying `io::Error` is available as the error's `source()`.
    #[error("can't read {}", .path.display())]
    Read {
        /// The file we were trying to read
        path: PathBuf,
        /// What went wrong
        source: io::Error,
    },
}

/// `Result` specialized to `comlines` errors
pub type Result<T> = std::result::Result<T, Error>;
