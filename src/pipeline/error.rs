//! Error types for roster extraction, persistence, and export.
//!
//! Each variant corresponds to one stage of the pipeline so callers can
//! tell a bad input file apart from a damaged payers store or a failed
//! export. Every variant carries the offending path and a reason string.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced by the roster pipeline.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A source file could not be read or parsed.
    ///
    /// Raised for missing or unreadable files, non-UTF-8 content, a
    /// missing header row, or a column label that is not in the header.
    #[error("Failed to read roster file '{}': {}", .path.display(), .reason)]
    Read { path: PathBuf, reason: String },

    /// The persisted payers store could not be written or read.
    ///
    /// A missing store file is not an error (it loads as an empty
    /// roster); this variant covers permission failures, rename
    /// failures, and malformed JSON in an existing store.
    #[error("Payers store error at '{}': {}", .path.display(), .reason)]
    Persistence { path: PathBuf, reason: String },

    /// An export file could not be produced.
    #[error("Failed to write export file '{}': {}", .path.display(), .reason)]
    Write { path: PathBuf, reason: String },
}

impl RosterError {
    pub fn read(path: &Path, reason: impl ToString) -> Self {
        RosterError::Read {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn persistence(path: &Path, reason: impl ToString) -> Self {
        RosterError::Persistence {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn write(path: &Path, reason: impl ToString) -> Self {
        RosterError::Write {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
