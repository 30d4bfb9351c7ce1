//! Error taxonomy for the visualizer.
//!
//! Every variant is scoped: `DirectoryNotFound` affects one workload,
//! `MissingColumn` / `MalformedLog` / `ColumnLengthMismatch` affect one column.
//! The remaining variants are I/O and backend failures surfaced to the binary.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VizError>;

#[derive(Error, Debug)]
pub enum VizError {
    #[error("no task directory found for workload {workload}")]
    DirectoryNotFound { workload: String },

    #[error("log for {algorithm} (workload {workload}) not found at {}", .path.display())]
    MissingColumn {
        workload: String,
        algorithm: String,
        path: PathBuf,
    },

    #[error("malformed decision log {}:{line}: {reason}", .path.display())]
    MalformedLog {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("column `{title}` has mismatched lengths (cpu={cpu}, mem={mem}, offload={offload})")]
    ColumnLengthMismatch {
        title: String,
        cpu: usize,
        mem: usize,
        offload: usize,
    },

    #[error("invalid glob pattern `{0}`")]
    Pattern(String),

    #[error("rendering failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
