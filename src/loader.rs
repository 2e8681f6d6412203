//! Reads input files into `LabeledLineSet`s.
//!
//! Every input goes through a BOM-sniffing decoder, so UTF-16 files with a Byte
//! Order Mark are translated to UTF-8 and compare equal to their UTF-8 twins.
//! Anything else passes through byte for byte.
use bstr::io::BufReadExt;
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::engine::LabeledLineSet;
use crate::error::{Error, Result};

/// Reads every file in `paths`, in order. Stops at the first file that can't
/// be read: a comparison against partial input would be wrong.
pub fn load_all(paths: &[PathBuf]) -> Result<Vec<LabeledLineSet>> {
    paths.iter().map(|path| load(path)).collect()
}

/// Reads the file at `path` into a set labeled with the path as given.
pub fn load(path: &Path) -> Result<LabeledLineSet> {
    let read_error = |source: io::Error| Error::Read { path: path.to_owned(), source };
    let file = File::open(path).map_err(read_error)?;
    let set = read_lines(path.display().to_string(), file).map_err(read_error)?;
    debug!(path = %path.display(), lines = set.len(), "loaded");
    Ok(set)
}

/// Collects the lines of `source` into a set named `label`.
///
/// A line is everything up to a `\n` or `\r\n` terminator, which is removed;
/// nothing else is trimmed. Empty lines are dropped, and a line repeated within
/// `source` is kept once.
pub fn read_lines<R: Read>(label: impl Into<String>, source: R) -> io::Result<LabeledLineSet> {
    let mut reader = BufReader::new(
        DecodeReaderBytesBuilder::new()
            .bom_sniffing(true) // Look at the BOM to detect UTF-16 files and convert to UTF-8
            .strip_bom(true) // Remove the BOM before sending data to us
            .utf8_passthru(true) // Don't enforce UTF-8 (BOM or no BOM)
            .build(source),
    );
    let mut set = LabeledLineSet::new(label);
    reader.for_byte_line(|line| {
        set.insert(line);
        Ok(true)
    })?;
    Ok(set)
}
