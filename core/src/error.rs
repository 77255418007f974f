use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by loading sources and writing reports.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompareError {
    #[error("failed to read source file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write report '{path}': {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
