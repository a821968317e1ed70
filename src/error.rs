//! Error types for rating submission and storage.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Criterion;

/// Reasons a submitted form is rejected. Checked in declaration order;
/// the first failing check wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("comment must not be empty")]
    EmptyComment,

    #[error("name, position, club and country are all required")]
    IncompleteForm,
}

/// A criterion score outside 1..=5, rejected at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("{} score must be between 1 and 5, got {value}", .criterion.column())]
    OutOfRange { criterion: Criterion, value: i64 },
}

/// Failures reading or writing the backing dataset file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed dataset {path:?}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// True for the load-side variants, which callers degrade to an empty dataset.
    pub fn is_read(&self) -> bool {
        matches!(self, StorageError::Read { .. } | StorageError::Malformed { .. })
    }
}
