//! Plain-text export of a generated wordlist.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::Wordlist;

/// File name used by [`export_wordlist`].
pub const EXPORT_FILE_NAME: &str = "custom_wordlist.txt";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Wordlist is empty, nothing to export")]
    EmptyWordlist,
    #[error("Failed to write wordlist: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes one candidate per line to `writer`.
///
/// Lines are joined with `\n` and the last line has no terminator, so the
/// output equals [`Wordlist::to_text`].
pub fn write_wordlist<W: Write>(wordlist: &Wordlist, mut writer: W) -> Result<usize, ExportError> {
    if wordlist.is_empty() {
        return Err(ExportError::EmptyWordlist);
    }

    for (i, word) in wordlist.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(word.as_bytes())?;
    }
    writer.flush()?;

    Ok(wordlist.len())
}

/// Writes `dir/custom_wordlist.txt`, replacing any previous export.
///
/// # Returns
/// The path of the written file.
pub fn export_wordlist<P: AsRef<Path>>(wordlist: &Wordlist, dir: P) -> Result<PathBuf, ExportError> {
    if wordlist.is_empty() {
        return Err(ExportError::EmptyWordlist);
    }

    let path = dir.as_ref().join(EXPORT_FILE_NAME);
    let file = File::create(&path)?;
    let _count = write_wordlist(wordlist, BufWriter::new(file))?;

    #[cfg(feature = "tracing")]
    tracing::info!("Exported {} candidates to {:?}", _count, path);

    Ok(path)
}
