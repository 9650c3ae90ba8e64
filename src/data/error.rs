use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while discovering or reading CSV input.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}, row {row}: malformed record", path.display())]
    Read {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("{}, row {row}: expected field {field} but the row has {found} fields", path.display())]
    MissingField {
        path: PathBuf,
        row: usize,
        field: usize,
        found: usize,
    },

    #[error("{}, row {row}, field {field}: '{value}' is not a number", path.display())]
    NotNumeric {
        path: PathBuf,
        row: usize,
        field: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

impl LoadError {
    /// Whether the failure is confined to a single row and may be skipped.
    pub fn is_row_level(&self) -> bool {
        matches!(
            self,
            LoadError::MissingField { .. } | LoadError::NotNumeric { .. }
        )
    }
}
