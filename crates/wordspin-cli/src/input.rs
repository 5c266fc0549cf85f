//! Reading the raw word list.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Where raw word text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Words given directly on the command line.
    Inline(Vec<String>),
    /// A text file with one word per line.
    File(PathBuf),
    Stdin,
}

impl WordSource {
    /// Picks a source from the `--input` and `--word` flags.
    ///
    /// Inline words win, then a file path (`-` meaning stdin), then stdin.
    pub fn from_flags(input: Option<&Path>, words: &[String]) -> Self {
        if !words.is_empty() {
            return Self::Inline(words.to_vec());
        }
        match input {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    /// Returns the raw multi-line text for this source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or stdin cannot be read.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Inline(words) => Ok(words.join("\n")),
            Self::File(path) => fs::read_to_string(path)
                .with_context(|| format!("read word list {}", path.display())),
            Self::Stdin => read_from(io::stdin().lock()).context("read word list from stdin"),
        }
    }
}

/// Reads all text from `reader`.
pub fn read_from<R: Read>(mut reader: R) -> io::Result<String> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(raw)
}
