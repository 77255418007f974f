//! Whole-file source loading.
//!
//! A `SourceText` is the raw content of one input file, immutable once
//! loaded and identified by its path. All downstream stages iterate over
//! its lines; nothing re-reads the file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CompareError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    path: PathBuf,
    text: String,
}

impl SourceText {
    /// Read an entire file into memory as UTF-8 text.
    ///
    /// Fails fast on a missing file or invalid UTF-8; there is no partial
    /// or streaming read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CompareError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CompareError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Build a source from an in-memory string, labeled with a display path.
    pub fn from_string(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}
